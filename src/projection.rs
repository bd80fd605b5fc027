use std::fmt;

use crate::token::{GenericToken, RobotToken, RobotTokenType};

/// Whether a projected robot row is a method that received a parameter.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum HasParam {
    Yes,
    No,
    // every row that isn't a merged call or assignment
    NotApplicable,
}

impl fmt::Display for HasParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HasParam::Yes => "Si",
            HasParam::No => "No",
            HasParam::NotApplicable => "",
        };
        f.write_str(text)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct RobotRow {
    pub(crate) label: String,
    pub(crate) kind: &'static str,
    pub(crate) value: String,
    pub(crate) has_param: HasParam,
}

impl fmt::Display for RobotRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<15} {:<15} {:<15} {:<15}",
            self.label,
            self.kind,
            self.value,
            self.has_param.to_string()
        )
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct GenericRow {
    pub(crate) label: String,
    pub(crate) kind: &'static str,
    pub(crate) line: usize,
}

impl fmt::Display for GenericRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<20} {:<15} {:<5}", self.label, self.kind, self.line)
    }
}

/// Rows for the robot token table.
///
/// `name()` collapses into a single call row, `name=number` into a single row carrying the
/// number, and dots are left out.
pub fn project_robot(tokens: &[RobotToken]) -> Vec<RobotRow> {
    let mut rows = vec![];
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let next_two = (
            tokens.get(i + 1).map(|t| t.r#type),
            tokens.get(i + 2).map(|t| t.r#type),
        );
        match (token.r#type, next_two) {
            (
                RobotTokenType::Method | RobotTokenType::Action,
                (Some(RobotTokenType::ParenOpen), Some(RobotTokenType::ParenClose)),
            ) => {
                rows.push(RobotRow {
                    label: format!("{}()", token.lexeme),
                    kind: token.r#type.description(),
                    value: "".to_string(),
                    has_param: HasParam::No,
                });
                i += 2;
            }
            (
                RobotTokenType::Method,
                (Some(RobotTokenType::Equals), Some(RobotTokenType::Number)),
            ) => {
                rows.push(RobotRow {
                    label: token.lexeme.clone(),
                    kind: token.r#type.description(),
                    value: tokens[i + 2].lexeme.clone(),
                    has_param: HasParam::Yes,
                });
                i += 2;
            }
            (RobotTokenType::Dot, _) => {}
            _ => rows.push(RobotRow {
                label: token.lexeme.clone(),
                kind: token.r#type.description(),
                value: token.value.clone().unwrap_or_default(),
                has_param: HasParam::NotApplicable,
            }),
        }
        i += 1;
    }
    rows
}

/// Rows for the C-family token table, one per token.
pub fn project_generic(tokens: &[GenericToken]) -> Vec<GenericRow> {
    tokens
        .iter()
        .map(|token| GenericRow {
            label: token.lexeme.clone(),
            kind: token.r#type.description(),
            line: token.line,
        })
        .collect()
}
