use thiserror::Error;

use crate::generic_scanner::is_unterminated_comment;
use crate::token::{GenericToken, GenericTokenType, RobotToken, RobotTokenType};

/// Problems found while scanning. Scanning itself never fails: these are read back out of the
/// UNKNOWN tokens so the caller can show them to the user.
#[derive(Debug, Error, PartialEq)]
pub enum ScanningError {
    #[error("Unexpected character '{character}'.")]
    UnexpectedCharacter {
        line: usize,
        column: usize,
        character: char,
    },
    #[error("Unterminated block comment.")]
    UnterminatedBlockComment { line: usize, column: usize },
}

impl ScanningError {
    pub fn get_line(&self) -> usize {
        match self {
            ScanningError::UnexpectedCharacter { line, .. }
            | ScanningError::UnterminatedBlockComment { line, .. } => *line,
        }
    }

    pub fn get_column(&self) -> usize {
        match self {
            ScanningError::UnexpectedCharacter { column, .. }
            | ScanningError::UnterminatedBlockComment { column, .. } => *column,
        }
    }
}

pub fn robot_scan_errors(tokens: &[RobotToken]) -> Vec<ScanningError> {
    tokens
        .iter()
        .filter(|token| token.r#type == RobotTokenType::Unknown)
        .filter_map(|token| unexpected_character(&token.lexeme, token.line, token.column))
        .collect()
}

pub fn scan_errors(tokens: &[GenericToken]) -> Vec<ScanningError> {
    tokens
        .iter()
        .filter(|token| token.r#type == GenericTokenType::Unknown)
        .filter_map(|token| {
            if is_unterminated_comment(token) {
                Some(ScanningError::UnterminatedBlockComment {
                    line: token.line,
                    column: token.column,
                })
            } else {
                unexpected_character(&token.lexeme, token.line, token.column)
            }
        })
        .collect()
}

fn unexpected_character(lexeme: &str, line: usize, column: usize) -> Option<ScanningError> {
    lexeme
        .chars()
        .next()
        .map(|character| ScanningError::UnexpectedCharacter {
            line,
            column,
            character,
        })
}
