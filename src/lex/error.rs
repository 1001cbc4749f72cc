use ecow::EcoString;
use std::fmt;

use super::position::Position;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LexicalError {
    pub error: Type,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Type {
    IllegalCharacter { character: char },
    UnterminatedString,
    InvalidNumberFormat { literal: EcoString },
}

impl LexicalError {
    #[must_use]
    pub fn get_description(&self) -> &'static str {
        match &self.error {
            Type::IllegalCharacter { .. } => "illegal character",
            Type::UnterminatedString => "unterminated string",
            Type::InvalidNumberFormat { .. } => "invalid number format",
        }
    }

    fn name(&self) -> &'static str {
        match &self.error {
            Type::IllegalCharacter { .. } => "Illegal Character",
            Type::UnterminatedString => "Unterminated String",
            Type::InvalidNumberFormat { .. } => "Invalid Number Format",
        }
    }

    fn details(&self) -> String {
        match &self.error {
            Type::IllegalCharacter { character } => format!("'{character}'"),
            Type::UnterminatedString => "expected closing '\"'".to_owned(),
            Type::InvalidNumberFormat { literal } => format!("'{literal}'"),
        }
    }
}

/// The fixed two-line report consumed by the REPL:
///
/// ```text
/// <name>: <details>
/// File <source name>, line <1-based line>
/// ```
impl fmt::Display for LexicalError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: {}\nFile {}, line {}",
            self.name(),
            self.details(),
            self.start.source_name,
            self.start.line + 1
        )
    }
}
