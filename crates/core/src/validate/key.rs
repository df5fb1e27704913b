//! Dictionary key rules.

use crate::error::SemanticError;

const RESERVED_KEYS: [&str; 2] = ["true", "false"];

/// Rejects blank keys (rule 2) and the reserved words `true`/`false`
/// (rule 4). The reserved-word test is on key text only; keys are always
/// STRING tokens.
pub(super) fn validate_key(key: &str) -> Result<(), SemanticError> {
    if key.trim().is_empty() {
        return Err(SemanticError::EmptyKey {
            key: key.to_owned(),
        });
    }
    if RESERVED_KEYS.contains(&key) {
        return Err(SemanticError::ReservedKey {
            key: key.to_owned(),
        });
    }
    Ok(())
}
