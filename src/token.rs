use std::fmt;

/// Token produced by the robot command scanner.
#[derive(Debug, PartialEq, Clone)]
pub struct RobotToken {
    pub(crate) r#type: RobotTokenType,
    pub(crate) lexeme: String,
    // only numbers carry a value, it repeats the lexeme
    pub(crate) value: Option<String>,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RobotTokenType {
    // the `Robot` declaration keyword, only at the start of a line
    RobotKeyword,
    Identifier,
    // iniciar, finalizar, cerrarGarra, abrirGarra
    Action,
    // any other dotted name: base, cuerpo, garra, velocidad...
    Method,
    Number,
    Equals,
    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    Dot,
    Unknown,
}

impl RobotTokenType {
    pub fn description(&self) -> &'static str {
        match self {
            RobotTokenType::RobotKeyword => "Palabra_r",
            RobotTokenType::Identifier => "Identificador",
            RobotTokenType::Action => "Accion",
            RobotTokenType::Method => "Metodo",
            RobotTokenType::Number => "Numero",
            RobotTokenType::Equals => "Igual",
            RobotTokenType::ParenOpen => "Parentesis_Izq",
            RobotTokenType::ParenClose => "Parentesis_Der",
            RobotTokenType::BraceOpen => "Llave_Izq",
            RobotTokenType::BraceClose => "Llave_Der",
            RobotTokenType::Dot => "Punto",
            RobotTokenType::Unknown => "Desconocido",
        }
    }
}

impl fmt::Display for RobotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15} {:<15} {:<15} {:<5} {:<5}",
            self.lexeme,
            self.r#type.description(),
            self.value.as_deref().unwrap_or(""),
            self.line,
            self.column
        )
    }
}

/// Token produced by the C-family scanner. The lexeme is the value.
#[derive(Debug, PartialEq, Clone)]
pub struct GenericToken {
    pub(crate) r#type: GenericTokenType,
    pub(crate) lexeme: String,
    pub(crate) line: usize,
    pub(crate) column: usize,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum GenericTokenType {
    Keyword,
    Identifier,
    Operator,
    Delimiter,
    String,
    Char,
    Number,
    Comment,
    Unknown,
}

impl GenericTokenType {
    pub fn description(&self) -> &'static str {
        match self {
            GenericTokenType::Keyword => "Palabra_Clave",
            GenericTokenType::Identifier => "Identificador",
            GenericTokenType::Operator => "Operador",
            GenericTokenType::Delimiter => "Delimitador",
            GenericTokenType::String => "String",
            GenericTokenType::Char => "Char",
            GenericTokenType::Number => "Numero",
            GenericTokenType::Comment => "Comentario",
            GenericTokenType::Unknown => "Desconocido",
        }
    }
}

impl fmt::Display for GenericToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<20} {:<15} {:<5} {:<5}",
            self.lexeme,
            self.r#type.description(),
            self.line,
            self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_robot_token_display_pads_columns() {
        let token = RobotToken {
            r#type: RobotTokenType::Number,
            lexeme: "50".to_string(),
            value: Some("50".to_string()),
            line: 3,
            column: 14,
        };
        assert_eq!(
            token.to_string(),
            "50              Numero          50              3     14   "
        );
    }

    #[test]
    fn test_generic_token_display() {
        let token = GenericToken {
            r#type: GenericTokenType::Keyword,
            lexeme: "int".to_string(),
            line: 1,
            column: 1,
        };
        assert_eq!(
            token.to_string(),
            "int                  Palabra_Clave   1     1    "
        );
    }
}
