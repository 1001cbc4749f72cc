use ecow::EcoString;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Name { value: EcoString },
    IntLiteral { value: i64 },
    FloatLiteral { value: f64 },
    StringLiteral { value: EcoString },
    Plus,             // '+'
    Minus,            // '-'
    Asterisk,         // '*'
    Slash,            // '/'
    LeftParenthesis,  // '('
    RightParenthesis, // ')'
}

impl fmt::Display for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { value } => write!(formatter, "`{value}`"),
            Self::IntLiteral { value } => write!(formatter, "`{value}`"),
            Self::FloatLiteral { value } => write!(formatter, "`{value}`"),
            Self::StringLiteral { value } => write!(formatter, "`\"{value}\"`"),
            Self::Plus => write!(formatter, "`+`"),
            Self::Minus => write!(formatter, "`-`"),
            Self::Asterisk => write!(formatter, "`*`"),
            Self::Slash => write!(formatter, "`/`"),
            Self::LeftParenthesis => write!(formatter, "`(`"),
            Self::RightParenthesis => write!(formatter, "`)`"),
        }
    }
}
