//! Semantic pass: content rules the grammar does not express.
//!
//! Nodes are checked in source order, so the reported error is the first
//! violation a left-to-right reading would hit: inside a pair the key is
//! checked before its value, and a collection element is checked fully
//! before it is compared with the first element.

mod key;
mod number;

use crate::error::{Collection, SemanticError};
use crate::tree::{LeafKind, Node, Rule};
use std::collections::HashSet;

/// Validate any subtree (root, value, list, dict or pair).
pub fn validate(node: &Node) -> Result<(), SemanticError> {
    match node {
        Node::Leaf(leaf) if leaf.kind == LeafKind::Number => {
            number::validate_number(leaf.text.as_deref().unwrap_or_default())
        }
        Node::Leaf(_) => Ok(()),
        Node::Branch(branch) => match branch.rule {
            Rule::Root | Rule::Value => branch.children.iter().try_for_each(validate),
            Rule::List => validate_list(&branch.children),
            Rule::Dict => validate_dict(&branch.children),
            Rule::Pair => validate_pair(&branch.children).map(|_| ()),
        },
    }
}

/// Every element must share the first element's leaf-kind label.
fn validate_list(children: &[Node]) -> Result<(), SemanticError> {
    let mut first: Option<&'static str> = None;
    for element in children.iter().filter(|c| c.rule() == Some(Rule::Value)) {
        validate(element)?;
        let kind = element.value_kind().unwrap_or_default();
        check_homogeneous(Collection::List, &mut first, kind)?;
    }
    Ok(())
}

/// Unique keys; all pair values share the first value's leaf-kind label.
fn validate_dict(children: &[Node]) -> Result<(), SemanticError> {
    let mut keys: HashSet<&str> = HashSet::new();
    let mut first: Option<&'static str> = None;
    for pair in children.iter().filter(|c| c.rule() == Some(Rule::Pair)) {
        let (key, kind) = validate_pair(pair.children())?;
        if !keys.insert(key) {
            return Err(SemanticError::DuplicateKey {
                key: key.to_owned(),
            });
        }
        check_homogeneous(Collection::Dict, &mut first, kind)?;
    }
    Ok(())
}

/// Checks one `STRING ':' value` pair and returns its key text and the
/// value's leaf-kind label.
fn validate_pair(children: &[Node]) -> Result<(&str, &'static str), SemanticError> {
    let key = children.first().and_then(Node::text).unwrap_or_default();
    key::validate_key(key)?;

    let value = children.iter().find(|c| c.rule() == Some(Rule::Value));
    let kind = match value {
        Some(value) => {
            validate(value)?;
            value.value_kind().unwrap_or_default()
        }
        None => "",
    };
    if !matches!(kind, "STRING" | "NUMBER") {
        return Err(SemanticError::PairValueKind { actual: kind });
    }
    Ok((key, kind))
}

fn check_homogeneous(
    collection: Collection,
    first: &mut Option<&'static str>,
    kind: &'static str,
) -> Result<(), SemanticError> {
    match *first {
        None => {
            *first = Some(kind);
            Ok(())
        }
        Some(expected) if expected == kind => Ok(()),
        Some(expected) => Err(SemanticError::Heterogeneous {
            collection,
            expected,
            actual: kind,
        }),
    }
}
