use crate::core::actions::parse_polynomial::errors::ParseError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Star,
    Caret,
    OpenParen,
    CloseParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {}", value),
            Self::Identifier(name) => write!(f, "identifier '{}'", name),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Caret => write!(f, "'^'"),
            Self::OpenParen => write!(f, "'('"),
            Self::CloseParen => write!(f, "')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpannedToken {
    pub token: Token,
    pub position: usize,
}

pub fn tokenize(expression: &str) -> Result<Vec<SpannedToken>, ParseError> {
    let mut tokens = Vec::new();
    let mut characters = expression.char_indices().peekable();

    while let Some(&(position, character)) = characters.peek() {
        let token = match character {
            _ if character.is_whitespace() => {
                characters.next();
                continue;
            }
            '+' => single(&mut characters, Token::Plus),
            '-' => single(&mut characters, Token::Minus),
            '*' => single(&mut characters, Token::Star),
            '^' => single(&mut characters, Token::Caret),
            '(' => single(&mut characters, Token::OpenParen),
            ')' => single(&mut characters, Token::CloseParen),
            _ if character.is_ascii_digit() || character == '.' => {
                let literal = take_while(&mut characters, |c| c.is_ascii_digit() || c == '.');
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidNumber {
                        literal: literal.clone(),
                        position,
                    })?;
                Token::Number(value)
            }
            _ if character.is_alphabetic() || character == '_' => {
                let name = take_while(&mut characters, |c| c.is_alphanumeric() || c == '_');
                Token::Identifier(name)
            }
            _ => {
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
        };

        tokens.push(SpannedToken { token, position });
    }

    Ok(tokens)
}

fn single(
    characters: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    token: Token,
) -> Token {
    characters.next();
    token
}

fn take_while(
    characters: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    accept: impl Fn(char) -> bool,
) -> String {
    let mut collected = String::new();

    while let Some(&(_, character)) = characters.peek() {
        if !accept(character) {
            break;
        }

        collected.push(character);
        characters.next();
    }

    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_the_default_polynomial() {
        let tokens = tokenize("z^3 - 1").unwrap();

        assert_eq!(
            tokens,
            vec![
                SpannedToken {
                    token: Token::Identifier("z".to_string()),
                    position: 0
                },
                SpannedToken {
                    token: Token::Caret,
                    position: 1
                },
                SpannedToken {
                    token: Token::Number(3.0),
                    position: 2
                },
                SpannedToken {
                    token: Token::Minus,
                    position: 4
                },
                SpannedToken {
                    token: Token::Number(1.0),
                    position: 6
                },
            ]
        );
    }

    #[test]
    fn tokenizes_decimal_numbers() {
        let tokens = tokenize("0.5").unwrap();

        assert_eq!(tokens[0].token, Token::Number(0.5));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert_eq!(tokenize("   ").unwrap(), vec![]);
    }

    #[test]
    fn reports_unexpected_characters_with_position() {
        assert_eq!(
            tokenize("z # 1"),
            Err(ParseError::UnexpectedCharacter {
                character: '#',
                position: 2
            })
        );
    }

    #[test]
    fn reports_malformed_numbers() {
        assert_eq!(
            tokenize("1.2.3"),
            Err(ParseError::InvalidNumber {
                literal: "1.2.3".to_string(),
                position: 0
            })
        );
    }
}
