//! Lexer (tokenizer) for the topology segment of the circuit notation.

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text
    pub text: String,
    /// Byte offset of the token in the notation line
    pub position: usize,
}

/// Token types in the topology notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A resistor value, possibly with a unit suffix (`150`, `10k`)
    Value,
    /// `.` - next element in the same chain
    Dot,
    /// `:` - open a nested parallel group
    Colon,
    /// `,` - next branch of the innermost group
    Comma,
    /// `;` - close the innermost group
    Semicolon,
    /// End of input
    Eof,
}

impl TokenKind {
    fn separator(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Dot),
            ':' => Some(Self::Colon),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            _ => None,
        }
    }
}

/// Lexer for tokenizing a topology string.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    input_len: usize,
    offset: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given topology.
    ///
    /// `offset` is the byte position of the topology within the full
    /// notation line and is added to every reported token position.
    pub fn new(input: &'a str, offset: usize) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            input_len: input.len(),
            offset,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let (pos, ch) = match self.chars.peek().copied() {
            Some(entry) => entry,
            None => {
                return Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    position: self.offset + self.input_len,
                };
            }
        };

        if let Some(kind) = TokenKind::separator(ch) {
            self.chars.next();
            return Token {
                kind,
                text: ch.to_string(),
                position: self.offset + pos,
            };
        }

        Token {
            kind: TokenKind::Value,
            text: self.read_value(),
            position: self.offset + pos,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    /// Read up to the next separator. Inner whitespace stays in the value
    /// so that `10 20` is rejected as one term.
    fn read_value(&mut self) -> String {
        let mut text = String::new();
        while let Some(&(_, ch)) = self.chars.peek() {
            if TokenKind::separator(ch).is_some() {
                break;
            }
            text.push(ch);
            self.chars.next();
        }
        text.truncate(text.trim_end().len());
        text
    }
}

/// Parse a number string with optional unit suffix.
pub fn parse_value(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let (num_str, multiplier) = if let Some(last) = text.chars().last() {
        let mult = match last {
            'p' => 1e-12,
            'n' => 1e-9,
            'u' | 'µ' => 1e-6,
            'm' => 1e-3,
            'k' | 'K' => 1e3,
            'M' => 1e6,
            'G' => 1e9,
            _ => 1.0,
        };
        if mult != 1.0 {
            (&text[..text.len() - last.len_utf8()], mult)
        } else {
            (text, 1.0)
        }
    } else {
        (text, 1.0)
    };

    num_str.parse::<f64>().ok().map(|v| v * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input, 0);
        let mut out = Vec::new();
        loop {
            let tok = lexer.next_token();
            out.push(tok.kind);
            if tok.kind == TokenKind::Eof {
                return out;
            }
        }
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("300"), Some(300.0));
        assert_eq!(parse_value("10k"), Some(10_000.0));
        assert_eq!(parse_value("2M"), Some(2_000_000.0));
        assert_eq!(parse_value("1e3"), Some(1000.0));
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value(""), None);
    }

    #[test]
    fn test_lexer_separators() {
        use TokenKind::*;
        assert_eq!(
            kinds("100.100:100,100;100"),
            vec![Value, Dot, Value, Colon, Value, Comma, Value, Semicolon, Value, Eof]
        );
    }

    #[test]
    fn test_lexer_positions_include_offset() {
        let mut lexer = Lexer::new("300.150", 12);
        let tok = lexer.next_token();
        assert_eq!(tok.text, "300");
        assert_eq!(tok.position, 12);
        let tok = lexer.next_token();
        assert_eq!(tok.kind, TokenKind::Dot);
        assert_eq!(tok.position, 15);
        let tok = lexer.next_token();
        assert_eq!(tok.text, "150");
        assert_eq!(lexer.next_token().position, 19);
    }

    #[test]
    fn test_lexer_whitespace_stays_inside_value() {
        assert_eq!(kinds(" 10 20 "), vec![TokenKind::Value, TokenKind::Eof]);

        let mut lexer = Lexer::new(" 10 20 ", 0);
        let tok = lexer.next_token();
        assert_eq!(tok.text, "10 20");
        assert_eq!(tok.position, 1);
        assert_eq!(parse_value(&tok.text), None);
    }

    #[test]
    fn test_lexer_trims_around_separators() {
        let mut lexer = Lexer::new("100 . 150", 0);
        assert_eq!(lexer.next_token().text, "100");
        assert_eq!(lexer.next_token().kind, TokenKind::Dot);
        let tok = lexer.next_token();
        assert_eq!(tok.text, "150");
        assert_eq!(tok.position, 6);
    }
}
