use std::fmt;

use crate::projection::{HasParam, RobotRow};
use crate::token::{GenericToken, GenericTokenType, RobotToken, RobotTokenType};

/// Entry in a symbol table. Tables keep the order in which names first appear.
#[derive(Debug, PartialEq, Clone)]
pub struct Symbol {
    pub(crate) name: String,
    pub(crate) kind: &'static str,
    // last assigned value for robot methods, declaration line for C-family identifiers
    pub(crate) detail: String,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15} {:<15} {:<15}", self.name, self.kind, self.detail)
    }
}

/// Identifiers in order of first appearance, then every method that was assigned a value.
/// Assigning the same method again overwrites the stored value.
pub fn robot_symbols(tokens: &[RobotToken], rows: &[RobotRow]) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = vec![];
    for token in tokens {
        if token.r#type == RobotTokenType::Identifier && find(&symbols, &token.lexeme).is_none() {
            symbols.push(Symbol {
                name: token.lexeme.clone(),
                kind: "Variable",
                detail: "".to_string(),
            });
        }
    }

    let assignments = rows.iter().filter(|row| {
        row.kind == RobotTokenType::Method.description() && row.has_param == HasParam::Yes
    });
    for row in assignments {
        match find(&symbols, &row.label) {
            Some(index) => symbols[index].detail = row.value.clone(),
            None => symbols.push(Symbol {
                name: row.label.clone(),
                kind: "Método",
                detail: row.value.clone(),
            }),
        }
    }
    symbols
}

/// Identifiers in order of first appearance, with the line they first appear on.
pub fn generic_symbols(tokens: &[GenericToken]) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = vec![];
    for token in tokens {
        if token.r#type == GenericTokenType::Identifier && find(&symbols, &token.lexeme).is_none() {
            symbols.push(Symbol {
                name: token.lexeme.clone(),
                kind: "Variable",
                detail: token.line.to_string(),
            });
        }
    }
    symbols
}

fn find(symbols: &[Symbol], name: &str) -> Option<usize> {
    symbols.iter().position(|symbol| symbol.name == name)
}
