//! Character-level scanner: raw text to tokens, one token per call.
//!
//! Positions are 0-based character offsets. The scanner never backtracks,
//! and once the input is exhausted it returns EOF on every call.
//!
//! Two loose policies are kept on purpose: an unterminated string yields
//! its partial content, and number lexemes are not shape-checked here
//! (the validation pass rejects `012`, `1.`, etc.).

use crate::error::LexicalError;
use crate::token::{Token, TokenKind};

pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    pub fn new(text: &str) -> Self {
        Scanner {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current(), Some(' ' | '\t' | '\n' | '\r')) {
            self.advance();
        }
    }

    fn error(&self) -> LexicalError {
        LexicalError {
            position: self.pos,
            character: self.current(),
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_whitespace();

        let c = match self.current() {
            Some(c) => c,
            None => return Ok(Token::eof()),
        };

        let punct = match c {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ',' => Some(TokenKind::Comma),
            ':' => Some(TokenKind::Colon),
            _ => None,
        };
        if let Some(kind) = punct {
            self.advance();
            return Ok(Token::simple(kind));
        }

        match c {
            't' => self.literal(TokenKind::True),
            'f' => self.literal(TokenKind::False),
            'n' => self.literal(TokenKind::Null),
            '"' => Ok(self.string()),
            '-' => Ok(self.number()),
            c if c.is_ascii_digit() => Ok(self.number()),
            _ => Err(self.error()),
        }
    }

    /// Scan everything up to (not including) EOF.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.kind == TokenKind::Eof {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }

    /// A partial match is an error at the first mismatching character,
    /// not a fallthrough to another rule.
    fn literal(&mut self, kind: TokenKind) -> Result<Token, LexicalError> {
        let expected = kind.literal().unwrap_or_default();
        for want in expected.chars() {
            if self.current() != Some(want) {
                return Err(self.error());
            }
            self.advance();
        }
        Ok(Token::simple(kind))
    }

    fn string(&mut self) -> Token {
        self.advance(); // opening quote
        let mut text = String::new();
        while let Some(c) = self.current() {
            if c == '"' {
                break;
            }
            text.push(c);
            self.advance();
        }
        self.advance(); // closing quote, if any
        Token::string(text)
    }

    fn number(&mut self) -> Token {
        let mut text = String::new();
        if self.current() == Some('-') {
            text.push('-');
            self.advance();
        }
        while let Some(c) = self.current() {
            if !(c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E')) {
                break;
            }
            text.push(c);
            self.advance();
        }
        Token::number(text)
    }
}
