//! Token model shared by the scanner, token sources and the parser.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    String,
    Number,
    True,
    False,
    Null,
    #[serde(rename = "LBRACKET")]
    LBracket,
    #[serde(rename = "RBRACKET")]
    RBracket,
    #[serde(rename = "LBRACE")]
    LBrace,
    #[serde(rename = "RBRACE")]
    RBrace,
    Comma,
    Colon,
    Eof,
}

impl TokenKind {
    /// Upper-case kind name used in diagnostics (`Expected token COLON, got EOF`).
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Null => "NULL",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Eof => "EOF",
        }
    }

    /// Literal text fixed by the kind itself, if any.
    pub fn literal(self) -> Option<&'static str> {
        match self {
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::Null => Some("null"),
            _ => None,
        }
    }

    pub fn is_punctuation(self) -> bool {
        matches!(
            self,
            TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Comma
                | TokenKind::Colon
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexical unit.
///
/// NUMBER tokens keep their source lexeme verbatim: numeric shape checks
/// (leading zeros, decimal parts) run against the text, not the parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexeme: Option<String>,
}

impl Token {
    /// Token whose content is fully determined by its kind: punctuation,
    /// `true`/`false`/`null` and EOF.
    pub fn simple(kind: TokenKind) -> Self {
        Token {
            kind,
            lexeme: kind.literal().map(str::to_owned),
        }
    }

    pub fn string(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::String,
            lexeme: Some(text.into()),
        }
    }

    pub fn number(text: impl Into<String>) -> Self {
        Token {
            kind: TokenKind::Number,
            lexeme: Some(text.into()),
        }
    }

    pub fn eof() -> Self {
        Token::simple(TokenKind::Eof)
    }

    pub fn text(&self) -> Option<&str> {
        self.lexeme.as_deref()
    }

    /// Numeric value of a NUMBER token. `None` for other kinds and for
    /// lexemes that do not convert (`-`, `1e`, `1.2.3`).
    pub fn numeric(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number => self.lexeme.as_deref()?.parse().ok(),
            _ => None,
        }
    }
}

/// Token-dump form, one token per line: `<str, a>`, `<num, 1>`, `<[>`, `<TRUE>`.
///
/// String text is escaped so the token stays on one line: `\` becomes
/// `\\`, and line feed and carriage return become `\n` and `\r`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text().unwrap_or_default();
        match self.kind {
            TokenKind::String => {
                f.write_str("<str, ")?;
                for c in text.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str(">")
            }
            TokenKind::Number => write!(f, "<num, {}>", text),
            TokenKind::LBrace => f.write_str("<{>"),
            TokenKind::RBrace => f.write_str("<}>"),
            TokenKind::LBracket => f.write_str("<[>"),
            TokenKind::RBracket => f.write_str("<]>"),
            TokenKind::Comma => f.write_str("<,>"),
            TokenKind::Colon => f.write_str("<:>"),
            other => write!(f, "<{}>", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_kinds_carry_their_text() {
        assert_eq!(Token::simple(TokenKind::True).text(), Some("true"));
        assert_eq!(Token::simple(TokenKind::Null).text(), Some("null"));
        assert_eq!(Token::simple(TokenKind::Comma).text(), None);
        assert_eq!(Token::eof().text(), None);
    }

    #[test]
    fn numeric_conversion_is_lazy_and_lossy() {
        assert_eq!(Token::number("012").numeric(), Some(12.0));
        assert_eq!(Token::number("-2.5e1").numeric(), Some(-25.0));
        assert_eq!(Token::number("-").numeric(), None);
        assert_eq!(Token::string("1").numeric(), None);
        // The lexeme survives the conversion untouched.
        assert_eq!(Token::number("012").text(), Some("012"));
    }

    #[test]
    fn display_uses_dump_form() {
        assert_eq!(Token::string("a b").to_string(), "<str, a b>");
        assert_eq!(Token::number("1.5").to_string(), "<num, 1.5>");
        assert_eq!(Token::simple(TokenKind::LBracket).to_string(), "<[>");
        assert_eq!(Token::simple(TokenKind::False).to_string(), "<FALSE>");
        assert_eq!(Token::eof().to_string(), "<EOF>");
    }

    #[test]
    fn display_keeps_strings_on_one_line() {
        assert_eq!(Token::string("a\nb").to_string(), r"<str, a\nb>");
        assert_eq!(Token::string("c\r").to_string(), r"<str, c\r>");
        assert_eq!(Token::string(r"x\n").to_string(), r"<str, x\\n>");
    }
}
