//! Recursive-descent parser for the topology notation.

use super::lexer::{parse_value, Lexer, Token, TokenKind};
use crate::circuit::Node;
use crate::error::{OhmdrawError, Result};

/// Parser for a topology segment.
///
/// The whole topology is read as one implicit parallel group, so a plain
/// chain comes out wrapped in a single-branch group. Normalization removes
/// the wrapper.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parse the entire topology into a raw (unnormalized) tree.
    pub fn parse(&mut self) -> Result<Node> {
        let root = self.parse_group()?;

        if self.current.kind != TokenKind::Eof {
            return Err(OhmdrawError::malformed(
                self.current.position,
                format!("unexpected '{}' after the circuit was closed", self.current.text),
            ));
        }

        Ok(root)
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    /// group := series (',' series)* (';' | EOF)
    fn parse_group(&mut self) -> Result<Node> {
        let mut branches = Vec::new();

        loop {
            branches.push(self.parse_series()?);

            match self.current.kind {
                TokenKind::Comma => self.advance(),
                TokenKind::Semicolon => {
                    self.advance();
                    break;
                }
                TokenKind::Eof => break,
                _ => {
                    return Err(OhmdrawError::malformed(
                        self.current.position,
                        format!("expected ',' or ';', got '{}'", self.current.text),
                    ));
                }
            }
        }

        Ok(Node::parallel(branches))
    }

    /// series := element ('.'? element)*
    fn parse_series(&mut self) -> Result<Node> {
        let start = self.current.position;
        let mut elements = Vec::new();

        loop {
            match self.current.kind {
                TokenKind::Value => {
                    elements.push(self.parse_resistor()?);
                }
                TokenKind::Colon => {
                    self.advance();
                    elements.push(self.parse_group()?);
                }
                TokenKind::Dot => {
                    if elements.is_empty() {
                        return Err(OhmdrawError::malformed(
                            self.current.position,
                            "'.' must follow a resistor or group",
                        ));
                    }
                    self.advance();
                    if !matches!(self.current.kind, TokenKind::Value | TokenKind::Colon) {
                        return Err(OhmdrawError::malformed(
                            self.current.position,
                            "expected a resistor or group after '.'",
                        ));
                    }
                }
                TokenKind::Comma | TokenKind::Semicolon | TokenKind::Eof => break,
            }
        }

        Node::chain(elements)
            .ok_or_else(|| OhmdrawError::malformed(start, "expected a resistor value"))
    }

    fn parse_resistor(&mut self) -> Result<Node> {
        let token = self.current.clone();
        self.advance();

        let resistance = parse_value(&token.text).ok_or_else(|| {
            OhmdrawError::malformed(
                token.position,
                format!("invalid resistance '{}'", token.text),
            )
        })?;

        if !resistance.is_finite() || resistance < 0.0 {
            return Err(OhmdrawError::malformed(
                token.position,
                format!("resistance '{}' must be a non-negative number", token.text),
            ));
        }

        Ok(Node::resistor(resistance))
    }
}
