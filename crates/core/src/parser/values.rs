use super::Parser;
use crate::error::{Error, SyntaxError};
use crate::source::TokenSource;
use crate::token::TokenKind;
use crate::tree::{Node, Rule};

impl<S: TokenSource> Parser<S> {
    // -- Value ----------------------------------------------

    pub(super) fn value(&mut self) -> Result<Node, Error> {
        let child = match self.peek() {
            TokenKind::LBracket => self.nested(Self::list)?,
            TokenKind::LBrace => self.nested(Self::dict)?,
            kind @ (TokenKind::String
            | TokenKind::Number
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null) => self.eat_leaf(kind)?,
            actual => return Err(SyntaxError::UnexpectedValue { actual }.into()),
        };
        Ok(Node::branch(Rule::Value, vec![child]))
    }

    // -- Collections ----------------------------------------

    fn list(&mut self) -> Result<Node, Error> {
        let mut children = vec![self.eat_leaf(TokenKind::LBracket)?];
        children.push(self.value()?);
        while self.peek() == TokenKind::Comma {
            children.push(self.eat_leaf(TokenKind::Comma)?);
            children.push(self.value()?);
        }
        children.push(self.eat_leaf(TokenKind::RBracket)?);
        Ok(Node::branch(Rule::List, children))
    }

    fn dict(&mut self) -> Result<Node, Error> {
        let mut children = vec![self.eat_leaf(TokenKind::LBrace)?];
        children.push(self.pair()?);
        while self.peek() == TokenKind::Comma {
            children.push(self.eat_leaf(TokenKind::Comma)?);
            children.push(self.pair()?);
        }
        children.push(self.eat_leaf(TokenKind::RBrace)?);
        Ok(Node::branch(Rule::Dict, children))
    }

    fn pair(&mut self) -> Result<Node, Error> {
        let key = self.eat_leaf(TokenKind::String)?;
        let colon = self.eat_leaf(TokenKind::Colon)?;
        let value = self.value()?;
        Ok(Node::branch(Rule::Pair, vec![key, colon, value]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::MAX_NESTING_DEPTH;
    use crate::scanner::Scanner;
    use crate::tree::LeafKind;

    fn value_of(src: &str) -> Node {
        let root = Parser::new(Scanner::new(src))
            .and_then(|mut p| p.parse_document())
            .expect("should parse");
        root.children()[0].clone()
    }

    fn labels(node: &Node) -> Vec<&'static str> {
        node.children().iter().map(Node::label).collect()
    }

    #[test]
    fn list_children_mirror_the_production() {
        let value = value_of("[1, 2, 3]");
        let list = &value.children()[0];
        assert_eq!(
            labels(list),
            vec!["[", "value", ",", "value", ",", "value", "]"]
        );
        assert_eq!(list.children()[3].children()[0].text(), Some("2"));
    }

    #[test]
    fn dict_children_mirror_the_production() {
        let value = value_of(r#"{"a": 1, "b": "x"}"#);
        let dict = &value.children()[0];
        assert_eq!(labels(dict), vec!["{", "pair", ",", "pair", "}"]);
        let pair = &dict.children()[1];
        assert_eq!(labels(pair), vec!["STRING", ":", "value"]);
        assert_eq!(pair.children()[0].text(), Some("a"));
    }

    #[test]
    fn literals_become_bool_and_null_leaves() {
        let value = value_of("[true, false, null]");
        let list = &value.children()[0];
        let leaves: Vec<_> = [1, 3, 5]
            .iter()
            .map(|&i| &list.children()[i].children()[0])
            .collect();
        assert_eq!(leaves[0].label(), LeafKind::Bool.label());
        assert_eq!(leaves[0].text(), Some("true"));
        assert_eq!(leaves[1].text(), Some("false"));
        assert_eq!(leaves[2].label(), "NULL");
        assert_eq!(leaves[2].text(), Some("null"));
    }

    #[test]
    fn nested_collections() {
        let value = value_of(r#"[[1], [2, 3]]"#);
        assert_eq!(value.value_kind(), Some("list"));
        assert_eq!(value.value_leaf_count(), 3);
    }

    fn nest(open: &str, close: &str, depth: usize) -> String {
        format!("{}1{}", open.repeat(depth), close.repeat(depth))
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        let src = nest("[", "]", MAX_NESTING_DEPTH);
        let root = Parser::new(Scanner::new(&src))
            .and_then(|mut p| p.parse_document())
            .unwrap();
        assert_eq!(root.value_leaf_count(), 1);
    }

    #[test]
    fn nesting_past_the_limit_is_an_error() {
        let too_deep = SyntaxError::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        };
        let src = nest("[", "]", MAX_NESTING_DEPTH + 1);
        let err = Parser::new(Scanner::new(&src))
            .and_then(|mut p| p.parse_document())
            .unwrap_err();
        assert_eq!(err, Error::Syntax(too_deep.clone()));

        // Far past the limit the parser still returns instead of recursing on.
        let src = nest(r#"{"k": ["#, "]}", 200_000);
        let err = Parser::new(Scanner::new(&src))
            .and_then(|mut p| p.parse_document())
            .unwrap_err();
        assert_eq!(err, Error::Syntax(too_deep));
    }

    #[test]
    fn depth_is_released_between_siblings() {
        let deep = nest("[", "]", MAX_NESTING_DEPTH - 1);
        let src = format!("[{deep}, {deep}] {deep}");
        let root = Parser::new(Scanner::new(&src))
            .and_then(|mut p| p.parse_document())
            .unwrap();
        assert_eq!(root.value_leaf_count(), 3);
    }

    #[test]
    fn trailing_comma_needs_a_value() {
        let err = Parser::new(Scanner::new("[1,]"))
            .and_then(|mut p| p.parse_document())
            .unwrap_err();
        assert_eq!(
            err,
            Error::Syntax(SyntaxError::UnexpectedValue {
                actual: TokenKind::RBracket
            })
        );
    }
}
