//! Parse tree: one branch per grammar-rule application, one leaf per
//! consumed terminal (punctuation included), in source order.

use crate::token::{Token, TokenKind};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Grammar rules that produce branch nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Root,
    Value,
    List,
    Dict,
    Pair,
}

impl Rule {
    pub fn label(self) -> &'static str {
        match self {
            Rule::Root => "root",
            Rule::Value => "value",
            Rule::List => "list",
            Rule::Dict => "dict",
            Rule::Pair => "pair",
        }
    }
}

/// Terminal classification of a leaf. `true` and `false` both land in `Bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    String,
    Number,
    Bool,
    Null,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
}

impl LeafKind {
    pub fn label(self) -> &'static str {
        match self {
            LeafKind::String => "STRING",
            LeafKind::Number => "NUMBER",
            LeafKind::Bool => "BOOL",
            LeafKind::Null => "NULL",
            LeafKind::LBracket => "[",
            LeafKind::RBracket => "]",
            LeafKind::LBrace => "{",
            LeafKind::RBrace => "}",
            LeafKind::Comma => ",",
            LeafKind::Colon => ":",
        }
    }

    pub fn is_punctuation(self) -> bool {
        !matches!(
            self,
            LeafKind::String | LeafKind::Number | LeafKind::Bool | LeafKind::Null
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    pub kind: LeafKind,
    /// Literal text for STRING/NUMBER/BOOL/NULL; `None` for punctuation.
    pub text: Option<String>,
}

impl Leaf {
    /// Leaf for a consumed token. EOF never becomes a leaf.
    pub fn from_token(token: Token) -> Option<Leaf> {
        let kind = match token.kind {
            TokenKind::String => LeafKind::String,
            TokenKind::Number => LeafKind::Number,
            TokenKind::True | TokenKind::False => LeafKind::Bool,
            TokenKind::Null => LeafKind::Null,
            TokenKind::LBracket => LeafKind::LBracket,
            TokenKind::RBracket => LeafKind::RBracket,
            TokenKind::LBrace => LeafKind::LBrace,
            TokenKind::RBrace => LeafKind::RBrace,
            TokenKind::Comma => LeafKind::Comma,
            TokenKind::Colon => LeafKind::Colon,
            TokenKind::Eof => return None,
        };
        let text = match token.kind {
            TokenKind::True => Some("true".to_owned()),
            TokenKind::False => Some("false".to_owned()),
            _ => token.lexeme,
        };
        Some(Leaf { kind, text })
    }

    /// The token this leaf was built from.
    pub fn to_token(&self) -> Token {
        let text = self.text.clone().unwrap_or_default();
        match self.kind {
            LeafKind::String => Token::string(text),
            LeafKind::Number => Token::number(text),
            LeafKind::Bool if text == "true" => Token::simple(TokenKind::True),
            LeafKind::Bool => Token::simple(TokenKind::False),
            LeafKind::Null => Token::simple(TokenKind::Null),
            LeafKind::LBracket => Token::simple(TokenKind::LBracket),
            LeafKind::RBracket => Token::simple(TokenKind::RBracket),
            LeafKind::LBrace => Token::simple(TokenKind::LBrace),
            LeafKind::RBrace => Token::simple(TokenKind::RBrace),
            LeafKind::Comma => Token::simple(TokenKind::Comma),
            LeafKind::Colon => Token::simple(TokenKind::Colon),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub rule: Rule,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Branch(Branch),
}

impl Node {
    pub fn branch(rule: Rule, children: Vec<Node>) -> Node {
        Node::Branch(Branch { rule, children })
    }

    pub fn punct(kind: LeafKind) -> Node {
        Node::Leaf(Leaf { kind, text: None })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Node::Leaf(leaf) => leaf.kind.label(),
            Node::Branch(branch) => branch.rule.label(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    pub fn rule(&self) -> Option<Rule> {
        match self {
            Node::Branch(branch) => Some(branch.rule),
            Node::Leaf(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Branch(branch) => &branch.children,
            Node::Leaf(_) => &[],
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.text.as_deref(),
            Node::Branch(_) => None,
        }
    }

    /// Leaf-kind label of a `value` node: the label of its first child
    /// (`STRING`, `NUMBER`, `BOOL`, `NULL`, `list`, `dict`).
    pub fn value_kind(&self) -> Option<&'static str> {
        match self {
            Node::Branch(Branch {
                rule: Rule::Value,
                children,
            }) => children.first().map(Node::label),
            _ => None,
        }
    }

    /// All leaves, depth-first, in source order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Leaf>) {
        match self {
            Node::Leaf(leaf) => out.push(leaf),
            Node::Branch(branch) => {
                for child in &branch.children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    /// Leaves with semantic content (everything but punctuation).
    pub fn value_leaf_count(&self) -> usize {
        self.leaves()
            .iter()
            .filter(|leaf| !leaf.kind.is_punctuation())
            .count()
    }

    /// The consumed token sequence, rebuilt from the leaves.
    pub fn terminals(&self) -> Vec<Token> {
        self.leaves().into_iter().map(Leaf::to_token).collect()
    }

    /// Indentation-by-depth rendering, two spaces per level. A leaf with
    /// non-empty text prints as `LABEL: text`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(0, &mut out);
        out
    }

    fn render_into(&self, depth: usize, out: &mut String) {
        out.extend(std::iter::repeat(' ').take(depth));
        out.push_str(self.label());
        match self {
            Node::Leaf(leaf) => {
                if let Some(text) = leaf.text.as_deref().filter(|t| !t.is_empty()) {
                    out.push_str(": ");
                    out.push_str(text);
                }
                out.push('\n');
            }
            Node::Branch(branch) => {
                out.push('\n');
                for child in &branch.children {
                    child.render_into(depth + 2, out);
                }
            }
        }
    }
}

/// Serialized as `{"label", "value"}` for leaves and `{"label", "children"}`
/// for branches.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(leaf) => {
                let mut s = serializer.serialize_struct("Leaf", 2)?;
                s.serialize_field("label", leaf.kind.label())?;
                s.serialize_field("value", &leaf.text)?;
                s.end()
            }
            Node::Branch(branch) => {
                let mut s = serializer.serialize_struct("Branch", 2)?;
                s.serialize_field("label", branch.rule.label())?;
                s.serialize_field("children", &branch.children)?;
                s.end()
            }
        }
    }
}
