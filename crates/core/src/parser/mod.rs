//! Grammar layer: recursive descent over
//!
//! ```text
//! document := (labeledValue | value)*      labeledValue := STRING ':' value
//! value    := list | dict | STRING | NUMBER | TRUE | FALSE | NULL
//! list     := '[' value (',' value)* ']'
//! dict     := '{' pair (',' pair)* '}'
//! pair     := STRING ':' value
//! ```
//!
//! The tree returned here is not validated; see `crate::validate`.

use crate::error::{Error, SyntaxError};
use crate::source::TokenSource;
use crate::token::{Token, TokenKind};
use crate::tree::{Leaf, Node, Rule};

mod values;

// ──────────────────────────────────────────────
// Parser
// ──────────────────────────────────────────────

/// Deepest list/dict nesting the parser accepts. Every later stage walks
/// the tree recursively, so the bound also caps their stack use.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Single-token-lookahead parser pulling from a [`TokenSource`].
pub struct Parser<S> {
    source: S,
    current: Token,
    depth: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Primes the lookahead with the first token.
    pub fn new(mut source: S) -> Result<Self, Error> {
        let current = source.next_token()?;
        Ok(Parser {
            source,
            current,
            depth: 0,
        })
    }

    pub fn peek(&self) -> TokenKind {
        self.current.kind
    }

    pub fn at_end(&self) -> bool {
        self.peek() == TokenKind::Eof
    }

    fn advance(&mut self) -> Result<Token, Error> {
        let next = self.source.next_token()?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consume the current token if it has the expected kind.
    fn eat(&mut self, expected: TokenKind) -> Result<Token, Error> {
        if self.peek() == expected {
            self.advance()
        } else {
            Err(SyntaxError::Expected {
                expected,
                actual: self.peek(),
            }
            .into())
        }
    }

    /// Consume the expected token and turn it into a leaf. `expected` is
    /// never EOF: callers pass punctuation or a value kind.
    fn eat_leaf(&mut self, expected: TokenKind) -> Result<Node, Error> {
        let token = self.eat(expected)?;
        match Leaf::from_token(token) {
            Some(leaf) => Ok(Node::Leaf(leaf)),
            None => unreachable!("EOF is never consumed as a leaf"),
        }
    }

    /// Run a collection production one nesting level deeper.
    fn nested(&mut self, rule: fn(&mut Self) -> Result<Node, Error>) -> Result<Node, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(SyntaxError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }
            .into());
        }
        self.depth += 1;
        let node = rule(self);
        self.depth -= 1;
        node
    }

    // -- Document -------------------------------------------

    /// Parse the whole input into a `root` node. Succeeds only when the
    /// token source is drained to EOF.
    pub fn parse_document(&mut self) -> Result<Node, Error> {
        let mut items = Vec::new();
        while let Some(item) = self.parse_item()? {
            items.push(item);
        }
        Ok(Node::branch(Rule::Root, items))
    }

    /// Parse one top-level item, or return `None` at EOF.
    ///
    /// A leading STRING followed by `:` is a labeled value and becomes a
    /// `value` node with children `STRING ":" value`.
    pub fn parse_item(&mut self) -> Result<Option<Node>, Error> {
        match self.peek() {
            TokenKind::Eof => Ok(None),
            TokenKind::String => {
                let label = self.eat_leaf(TokenKind::String)?;
                let mut children = vec![label];
                if self.peek() == TokenKind::Colon {
                    children.push(self.eat_leaf(TokenKind::Colon)?);
                    children.push(self.value()?);
                }
                Ok(Some(Node::branch(Rule::Value, children)))
            }
            _ => self.value().map(Some),
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
