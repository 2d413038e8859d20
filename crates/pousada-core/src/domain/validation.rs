//! Field validators shared by the input types.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

use pousada_shared::constants::ZIP_CODE_LENGTHS;

pub(crate) static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("static regex"));

pub(crate) static SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("static regex"));

/// CEP is accepted with or without the hyphen: `01000000` or `01000-000`.
/// Blank values pass; the column is optional.
pub(crate) fn validate_zip_code(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 || ZIP_CODE_LENGTHS.contains(&len) {
        return Ok(());
    }
    let mut err = ValidationError::new("zip_code_length");
    err.message = Some("Postal code must have 8 or 9 characters".into());
    Err(err)
}

pub(crate) fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut err = ValidationError::new("negative_amount");
        err.message = Some("Amount cannot be negative".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("01000000", true)]
    #[case("01000-000", true)]
    #[case("", true)]
    #[case("0100000", false)]
    #[case("01000-0000", false)]
    #[case("1", false)]
    fn test_zip_code_lengths(#[case] zip: &str, #[case] ok: bool) {
        assert_eq!(validate_zip_code(zip).is_ok(), ok);
    }

    #[test]
    fn test_hex_color() {
        assert!(HEX_COLOR.is_match("#1A2b3C"));
        assert!(!HEX_COLOR.is_match("1A2B3C"));
        assert!(!HEX_COLOR.is_match("#FFF"));
    }

    #[test]
    fn test_amounts() {
        assert!(validate_non_negative(&dec!(0)).is_ok());
        assert!(validate_non_negative(&dec!(200.00)).is_ok());
        assert!(validate_non_negative(&dec!(-0.01)).is_err());
    }
}
