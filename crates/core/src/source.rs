//! Token source abstraction for scanner-independent parsing.
//!
//! The [`TokenSource`] trait is what the parser pulls from. [`Scanner`]
//! produces tokens from raw text; [`TokenStream`] replays tokens that were
//! produced elsewhere (a token dump, a test fixture).

use crate::error::LexicalError;
use crate::scanner::Scanner;
use crate::token::Token;
use std::collections::VecDeque;

/// Pull-based supplier of tokens.
///
/// Implementations return EOF once exhausted and keep returning it on
/// every later call.
pub trait TokenSource {
    fn next_token(&mut self) -> Result<Token, LexicalError>;
}

impl TokenSource for Scanner {
    fn next_token(&mut self) -> Result<Token, LexicalError> {
        Scanner::next_token(self)
    }
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    fn next_token(&mut self) -> Result<Token, LexicalError> {
        (**self).next_token()
    }
}

/// In-memory token sequence. Never fails.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens: tokens.into(),
        }
    }

    /// Tokens not yet handed out.
    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Result<Token, LexicalError> {
        Ok(self.tokens.pop_front().unwrap_or_else(Token::eof))
    }
}
