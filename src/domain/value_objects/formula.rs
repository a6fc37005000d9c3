//! Closed-form formula evaluation for catalog skills
//!
//! Catalog skills may derive their starting value from an attribute
//! expression such as `DEX/2` or `EDU`. The grammar is deliberately tiny:
//! integer literals, the eight attribute keys, `+ - * /`, unary minus and
//! parentheses. Division truncates toward zero.

use thiserror::Error;

use crate::domain::value_objects::{AttributeKey, AttributeSet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("unexpected character '{0}' in formula")]
    UnexpectedChar(char),

    #[error("unknown attribute '{0}' in formula")]
    UnknownAttribute(String),

    #[error("formula ended unexpectedly")]
    UnexpectedEnd,

    #[error("expected ')' in formula")]
    MissingParen,

    #[error("division by zero in formula")]
    DivisionByZero,

    #[error("unexpected trailing input '{0}' in formula")]
    TrailingInput(String),
}

/// Evaluate a formula against a complete attribute set.
pub fn evaluate(formula: &str, attributes: &AttributeSet) -> Result<i64, FormulaError> {
    let mut parser = Parser {
        chars: formula.chars().collect(),
        pos: 0,
        attributes,
    };
    let value = parser.expression()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        let rest: String = parser.chars[parser.pos..].iter().collect();
        return Err(FormulaError::TrailingInput(rest));
    }
    Ok(value)
}

struct Parser<'a> {
    chars: Vec<char>,
    pos: usize,
    attributes: &'a AttributeSet,
}

impl Parser<'_> {
    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<i64, FormulaError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('+') => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some('-') => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<i64, FormulaError> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('*') => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.pos += 1;
                    let divisor = self.factor()?;
                    if divisor == 0 {
                        return Err(FormulaError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    // factor := '-' factor | '(' expression ')' | integer | attribute
    fn factor(&mut self) -> Result<i64, FormulaError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(FormulaError::UnexpectedEnd),
            Some('-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some('(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.skip_whitespace();
                if self.peek() != Some(')') {
                    return Err(FormulaError::MissingParen);
                }
                self.pos += 1;
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() => Ok(self.integer()),
            Some(c) if c.is_ascii_alphabetic() => self.attribute(),
            Some(c) => Err(FormulaError::UnexpectedChar(c)),
        }
    }

    fn integer(&mut self) -> i64 {
        let mut value: i64 = 0;
        while let Some(c) = self.peek() {
            match c.to_digit(10) {
                Some(digit) => {
                    value = value * 10 + i64::from(digit);
                    self.pos += 1;
                }
                None => break,
            }
        }
        value
    }

    fn attribute(&mut self) -> Result<i64, FormulaError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        let name: String = self.chars[start..self.pos].iter().collect();
        match AttributeKey::from_name(&name) {
            Some(key) => Ok(self.attributes.get(key)),
            None => Err(FormulaError::UnknownAttribute(name)),
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }
}
