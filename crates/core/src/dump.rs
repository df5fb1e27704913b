//! Token dump codec.
//!
//! A dump lists one token per line in its `Display` form: `<str, key>`,
//! `<num, 12>`, `<{>`, `<TRUE>`. Lines not wrapped in angle brackets are
//! ignored. Long tag names (`STRING`, `LBRACE`, ...) are accepted too.
//!
//! String values use `\\`, `\n` and `\r` escapes so that every token is
//! one line. A backslash before any other character is kept as written.

use crate::error::DumpError;
use crate::token::{Token, TokenKind};

/// Read a dump. An `<EOF>` line ends the token list.
pub fn read_dump(text: &str) -> Result<Vec<Token>, DumpError> {
    let mut tokens = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        let inner = match line.strip_prefix('<').and_then(|l| l.strip_suffix('>')) {
            Some(inner) => inner,
            None => continue,
        };
        let (tag, value) = match inner.split_once(", ") {
            Some((tag, value)) => (tag.trim(), Some(value)),
            None => (inner.trim(), None),
        };
        let kind = tag_kind(tag).ok_or_else(|| DumpError::UnknownTag {
            line: idx + 1,
            tag: tag.to_owned(),
        })?;
        let token = match kind {
            TokenKind::String => Token::string(unescape(require(value, tag, idx)?)),
            TokenKind::Number => Token::number(require(value, tag, idx)?.trim()),
            TokenKind::Eof => break,
            other => Token::simple(other),
        };
        tokens.push(token);
    }
    Ok(tokens)
}

/// Inverse of [`read_dump`]: one token per line.
pub fn write_dump(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

fn require<'a>(value: Option<&'a str>, tag: &str, idx: usize) -> Result<&'a str, DumpError> {
    value.ok_or_else(|| DumpError::MissingValue {
        line: idx + 1,
        tag: tag.to_owned(),
    })
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

fn tag_kind(tag: &str) -> Option<TokenKind> {
    let kind = match tag {
        "str" | "STRING" => TokenKind::String,
        "num" | "NUMBER" => TokenKind::Number,
        "{" | "LBRACE" => TokenKind::LBrace,
        "}" | "RBRACE" => TokenKind::RBrace,
        "[" | "LBRACKET" => TokenKind::LBracket,
        "]" | "RBRACKET" => TokenKind::RBracket,
        "," | "COMMA" => TokenKind::Comma,
        ":" | "COLON" => TokenKind::Colon,
        "TRUE" => TokenKind::True,
        "FALSE" => TokenKind::False,
        "NULL" => TokenKind::Null,
        "EOF" => TokenKind::Eof,
        _ => return None,
    };
    Some(kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Scanner;

    #[test]
    fn reads_short_and_long_tags() {
        let dump = "<{>\n<str, name>\n<COLON>\n<num, 12>\n<}>\n";
        let tokens = read_dump(dump).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::simple(TokenKind::LBrace),
                Token::string("name"),
                Token::simple(TokenKind::Colon),
                Token::number("12"),
                Token::simple(TokenKind::RBrace),
            ]
        );
    }

    #[test]
    fn string_values_keep_inner_spacing_and_separators() {
        let tokens = read_dump("<str,  padded >\n<str, a, b>\n<str, >").unwrap();
        assert_eq!(tokens[0], Token::string(" padded "));
        assert_eq!(tokens[1], Token::string("a, b"));
        assert_eq!(tokens[2], Token::string(""));
    }

    #[test]
    fn unbracketed_lines_are_skipped_and_eof_stops() {
        let dump = "# tokens\n\n   <TRUE>   \n<EOF>\n<NULL>\n";
        assert_eq!(read_dump(dump).unwrap(), vec![Token::simple(TokenKind::True)]);
    }

    #[test]
    fn unknown_tag_reports_line() {
        let err = read_dump("<[>\n<bogus>\n").unwrap_err();
        assert_eq!(
            err,
            DumpError::UnknownTag {
                line: 2,
                tag: "bogus".into()
            }
        );
    }

    #[test]
    fn valued_tag_without_value_is_rejected() {
        let err = read_dump("<num>").unwrap_err();
        assert!(matches!(err, DumpError::MissingValue { line: 1, .. }));
    }

    #[test]
    fn string_escapes_are_decoded() {
        let tokens = read_dump(r"<str, a\nb\rc\\d>").unwrap();
        assert_eq!(tokens, vec![Token::string("a\nb\rc\\d")]);
        // Unknown escapes and a trailing backslash are literal.
        let tokens = read_dump(r"<str, C:\tmp\>").unwrap();
        assert_eq!(tokens, vec![Token::string(r"C:\tmp\")]);
    }

    #[test]
    fn line_breaks_inside_strings_survive_a_dump() {
        let tokens = Scanner::new("[\"a\nb\", \"c\r\nd\", \"\\n\"]")
            .tokenize()
            .unwrap();
        let dump = write_dump(&tokens);
        assert_eq!(dump.lines().count(), tokens.len());
        assert_eq!(read_dump(&dump).unwrap(), tokens);
    }

    #[test]
    fn scanner_output_survives_a_dump() {
        let tokens = Scanner::new(r#"{"k": -1.5, "z": "a, b"} [true, null]"#)
            .tokenize()
            .unwrap();
        assert_eq!(read_dump(&write_dump(&tokens)).unwrap(), tokens);
    }
}
