//! Numeric literal shape (rules 1 and 3), checked on the lexeme text.

use crate::error::SemanticError;

pub(super) fn validate_number(literal: &str) -> Result<(), SemanticError> {
    if literal.contains('.') {
        let parts: Vec<&str> = literal.split('.').collect();
        if parts.len() != 2 || !parts.iter().all(|p| is_digits(p)) {
            return Err(SemanticError::InvalidDecimal {
                literal: literal.to_owned(),
            });
        }
    }

    let mut chars = literal.chars();
    let leading_zero =
        chars.next() == Some('0') && chars.next().is_some_and(|c| c.is_ascii_digit());
    let bare_plus = literal.starts_with('+') && !literal.contains(['e', 'E']);
    if leading_zero || bare_plus {
        return Err(SemanticError::InvalidNumber {
            literal: literal.to_owned(),
        });
    }
    Ok(())
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(lit: &str) -> Result<(), SemanticError> {
        Err(SemanticError::InvalidDecimal {
            literal: lit.into(),
        })
    }

    fn number(lit: &str) -> Result<(), SemanticError> {
        Err(SemanticError::InvalidNumber {
            literal: lit.into(),
        })
    }

    #[test]
    fn well_shaped() {
        for lit in ["0", "7", "10", "0.5", "12.25", "-3", "-0", "1e5", "2E10", "+1e5"] {
            assert_eq!(validate_number(lit), Ok(()), "{lit}");
        }
    }

    #[test]
    fn decimal_parts_must_be_digits() {
        for lit in [".5", "1.", "1.2.3", "-0.5", "1.5e3", "."] {
            assert_eq!(validate_number(lit), decimal(lit), "{lit}");
        }
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(validate_number("012"), number("012"));
        assert_eq!(validate_number("00"), number("00"));
        assert_eq!(validate_number("00.5"), number("00.5"));
        // Sign first: the zero is not leading.
        assert_eq!(validate_number("-012"), Ok(()));
    }

    #[test]
    fn plus_only_with_exponent() {
        assert_eq!(validate_number("+1"), number("+1"));
        // A signed decimal fails the decimal rule first.
        assert_eq!(validate_number("+1.5"), decimal("+1.5"));
        assert_eq!(validate_number("+2e3"), Ok(()));
    }
}
