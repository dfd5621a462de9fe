use crate::core::actions::parse_polynomial::tokens::Token;
use std::error::Error;
use std::fmt;

/// Positions are byte offsets into the source expression.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    UnexpectedCharacter { character: char, position: usize },
    InvalidNumber { literal: String, position: usize },
    UnexpectedToken { token: Token, position: usize },
    UnexpectedEnd,
    UnresolvedIdentifier { name: String, position: usize },
    NonIntegerExponent { value: f64, position: usize },
    ExponentTooLarge { value: f64, position: usize },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter {
                character,
                position,
            } => {
                write!(f, "unexpected character '{}' at {}", character, position)
            }
            Self::InvalidNumber { literal, position } => {
                write!(f, "malformed number '{}' at {}", literal, position)
            }
            Self::UnexpectedToken { token, position } => {
                write!(f, "unexpected {} at {}", token, position)
            }
            Self::UnexpectedEnd => {
                write!(f, "expression ended unexpectedly")
            }
            Self::UnresolvedIdentifier { name, position } => {
                write!(f, "unresolved identifier '{}' at {}", name, position)
            }
            Self::NonIntegerExponent { value, position } => {
                write!(f, "exponent {} at {} is not an integer", value, position)
            }
            Self::ExponentTooLarge { value, position } => {
                write!(f, "exponent {} at {} is too large", value, position)
            }
        }
    }
}

impl Error for ParseError {}
