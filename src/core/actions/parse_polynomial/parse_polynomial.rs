use crate::core::actions::parse_polynomial::errors::ParseError;
use crate::core::actions::parse_polynomial::tokens::{SpannedToken, Token, tokenize};
use crate::core::data::complex::Complex;
use crate::core::data::polynomial::Polynomial;
use std::collections::HashMap;

/// Largest accepted integer exponent. Anything bigger is far outside what
/// the per-pixel kernel can evaluate anyway.
pub const MAX_EXPONENT: u32 = 64;

/// Parses a polynomial expression in the free variable `z`.
///
/// Identifiers other than `z` are resolved through `bindings` as real
/// constants; `z` always denotes the free variable, even if a binding
/// shadows the name. Operators are `+ - * ^` with non-negative integer
/// exponents, plus parentheses and unary minus.
pub fn parse_polynomial(
    expression: &str,
    bindings: &HashMap<String, f64>,
) -> Result<Polynomial, ParseError> {
    let tokens = tokenize(expression)?;
    let mut parser = Parser {
        tokens: &tokens,
        index: 0,
        bindings,
    };

    let polynomial = parser.expression()?;

    match parser.peek() {
        None => Ok(polynomial),
        Some(spanned) => Err(ParseError::UnexpectedToken {
            token: spanned.token.clone(),
            position: spanned.position,
        }),
    }
}

struct Parser<'a> {
    tokens: &'a [SpannedToken],
    index: usize,
    bindings: &'a HashMap<String, f64>,
}

impl Parser<'_> {
    fn peek(&self) -> Option<&SpannedToken> {
        self.tokens.get(self.index)
    }

    fn peek_token(&self) -> Option<Token> {
        self.peek().map(|spanned| spanned.token.clone())
    }

    fn bump(&mut self) -> Option<SpannedToken> {
        let spanned = self.tokens.get(self.index).cloned();

        if spanned.is_some() {
            self.index += 1;
        }

        spanned
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<Polynomial, ParseError> {
        let mut sum = self.term()?;

        loop {
            match self.peek_token() {
                Some(Token::Plus) => {
                    self.index += 1;
                    sum = sum + self.term()?;
                }
                Some(Token::Minus) => {
                    self.index += 1;
                    sum = sum - self.term()?;
                }
                _ => return Ok(sum),
            }
        }
    }

    // term := factor ('*' factor)*
    fn term(&mut self) -> Result<Polynomial, ParseError> {
        let mut product = self.factor()?;

        while self.peek_token() == Some(Token::Star) {
            self.index += 1;
            product = product * self.factor()?;
        }

        Ok(product)
    }

    // factor := '-' factor | primary ('^' exponent)?
    fn factor(&mut self) -> Result<Polynomial, ParseError> {
        if self.peek_token() == Some(Token::Minus) {
            self.index += 1;
            return Ok(-self.factor()?);
        }

        let base = self.primary()?;

        if self.peek_token() == Some(Token::Caret) {
            self.index += 1;
            let exponent = self.exponent()?;
            return Ok(base.pow(exponent));
        }

        Ok(base)
    }

    // primary := number | identifier | '(' expression ')'
    fn primary(&mut self) -> Result<Polynomial, ParseError> {
        let Some(spanned) = self.bump() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match spanned.token {
            Token::Number(value) => Ok(Polynomial::constant(Complex::new(value, 0.0))),
            Token::Identifier(name) => {
                if name == "z" {
                    return Ok(Polynomial::variable());
                }

                match self.bindings.get(&name) {
                    Some(&value) => Ok(Polynomial::constant(Complex::new(value, 0.0))),
                    None => Err(ParseError::UnresolvedIdentifier {
                        name,
                        position: spanned.position,
                    }),
                }
            }
            Token::OpenParen => {
                let inner = self.expression()?;

                match self.bump() {
                    Some(SpannedToken {
                        token: Token::CloseParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ParseError::UnexpectedToken {
                        token: other.token,
                        position: other.position,
                    }),
                    None => Err(ParseError::UnexpectedEnd),
                }
            }
            token => Err(ParseError::UnexpectedToken {
                token,
                position: spanned.position,
            }),
        }
    }

    fn exponent(&mut self) -> Result<u32, ParseError> {
        let Some(spanned) = self.bump() else {
            return Err(ParseError::UnexpectedEnd);
        };

        match spanned.token {
            Token::Number(value) => {
                if value.fract() != 0.0 {
                    return Err(ParseError::NonIntegerExponent {
                        value,
                        position: spanned.position,
                    });
                }

                if value < 0.0 || value > f64::from(MAX_EXPONENT) {
                    return Err(ParseError::ExponentTooLarge {
                        value,
                        position: spanned.position,
                    });
                }

                Ok(value as u32)
            }
            token => Err(ParseError::UnexpectedToken {
                token,
                position: spanned.position,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn real(value: f64) -> Complex {
        Complex::new(value, 0.0)
    }

    fn no_bindings() -> HashMap<String, f64> {
        HashMap::new()
    }

    #[test]
    fn parses_the_default_polynomial() {
        let polynomial = parse_polynomial("z^3 - 1", &no_bindings()).unwrap();

        assert_eq!(
            polynomial.coefficients(),
            &[real(-1.0), real(0.0), real(0.0), real(1.0)]
        );
    }

    #[test]
    fn parses_a_constant() {
        let polynomial = parse_polynomial("42", &no_bindings()).unwrap();

        assert_eq!(polynomial.coefficients(), &[real(42.0)]);
    }

    #[test]
    fn parses_products_and_sums() {
        // 2*z*z + 3*z - 0.5
        let polynomial = parse_polynomial("2*z*z + 3*z - 0.5", &no_bindings()).unwrap();

        assert_eq!(
            polynomial.coefficients(),
            &[real(-0.5), real(3.0), real(2.0)]
        );
    }

    #[test]
    fn parses_parenthesized_subexpressions() {
        // (z - 1)*(z + 1) = z^2 - 1
        let polynomial = parse_polynomial("(z - 1)*(z + 1)", &no_bindings()).unwrap();

        assert_eq!(
            polynomial.coefficients(),
            &[real(-1.0), real(0.0), real(1.0)]
        );
    }

    #[test]
    fn parses_unary_minus() {
        let polynomial = parse_polynomial("-z^2", &no_bindings()).unwrap();

        assert_eq!(
            polynomial.coefficients(),
            &[real(0.0), real(0.0), real(-1.0)]
        );
    }

    #[test]
    fn resolves_identifiers_through_bindings() {
        let bindings = HashMap::from([("a".to_string(), 2.5)]);
        let polynomial = parse_polynomial("a*z + a", &bindings).unwrap();

        assert_eq!(polynomial.coefficients(), &[real(2.5), real(2.5)]);
    }

    #[test]
    fn the_free_variable_shadows_bindings() {
        let bindings = HashMap::from([("z".to_string(), 7.0)]);
        let polynomial = parse_polynomial("z", &bindings).unwrap();

        assert_eq!(polynomial.coefficients(), &[real(0.0), real(1.0)]);
    }

    #[test]
    fn reports_unresolved_identifiers() {
        assert_eq!(
            parse_polynomial("z + b", &no_bindings()),
            Err(ParseError::UnresolvedIdentifier {
                name: "b".to_string(),
                position: 4
            })
        );
    }

    #[test]
    fn rejects_fractional_exponents() {
        assert_eq!(
            parse_polynomial("z^1.5", &no_bindings()),
            Err(ParseError::NonIntegerExponent {
                value: 1.5,
                position: 2
            })
        );
    }

    #[test]
    fn rejects_negative_exponents() {
        assert_eq!(
            parse_polynomial("z^-1", &no_bindings()),
            Err(ParseError::UnexpectedToken {
                token: Token::Minus,
                position: 2
            })
        );
    }

    #[test]
    fn rejects_oversized_exponents() {
        assert_eq!(
            parse_polynomial("z^65", &no_bindings()),
            Err(ParseError::ExponentTooLarge {
                value: 65.0,
                position: 2
            })
        );
    }

    #[test]
    fn rejects_truncated_input() {
        assert_eq!(
            parse_polynomial("z +", &no_bindings()),
            Err(ParseError::UnexpectedEnd)
        );
    }

    #[test]
    fn rejects_trailing_tokens() {
        assert_eq!(
            parse_polynomial("z 1", &no_bindings()),
            Err(ParseError::UnexpectedToken {
                token: Token::Number(1.0),
                position: 2
            })
        );
    }

    #[test]
    fn rejects_unbalanced_parentheses() {
        assert_eq!(
            parse_polynomial("(z + 1", &no_bindings()),
            Err(ParseError::UnexpectedEnd)
        );
    }

    #[test]
    fn exponent_zero_collapses_to_one() {
        let polynomial = parse_polynomial("z^0", &no_bindings()).unwrap();

        assert_eq!(polynomial.coefficients(), &[real(1.0)]);
    }
}
