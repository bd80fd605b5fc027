use crate::token::{GenericToken, GenericTokenType, RobotToken, RobotTokenType};

// Shorthands for building expected tokens in tests.

/// Numbers get their lexeme as value, like the scanner does.
pub fn robot_token(r#type: RobotTokenType, lexeme: &str, line: usize, column: usize) -> RobotToken {
    let value = match r#type {
        RobotTokenType::Number => Some(lexeme.to_string()),
        _ => None,
    };
    RobotToken {
        r#type,
        lexeme: lexeme.to_string(),
        value,
        line,
        column,
    }
}

pub fn generic_token(
    r#type: GenericTokenType,
    lexeme: &str,
    line: usize,
    column: usize,
) -> GenericToken {
    GenericToken {
        r#type,
        lexeme: lexeme.to_string(),
        line,
        column,
    }
}
