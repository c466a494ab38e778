//! Field validators shared by the supplier entities.
//!
//! Each validator reports a stable error code so callers can tell a missing
//! value (`required`) from a malformed one (`url`, `email`) or an out of range
//! decimal (`cost_precision`). Length limits use the stock `length` code.

use rust_decimal::Decimal;
use std::borrow::Cow;
use url::Url;
use validator::{validate_email, ValidationError};

/// Digits after the decimal point stored for a price break cost.
pub const COST_DECIMAL_PLACES: u32 = 3;

/// Total significant digits stored for a price break cost.
pub const COST_MAX_DIGITS: u32 = 10;

const URL_SCHEMES: [&str; 4] = ["http", "https", "ftp", "ftps"];

fn rejection(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Rejects empty and whitespace-only values.
pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rejection("required", "This field is required"));
    }
    Ok(())
}

/// Accepts an empty string or an absolute http(s)/ftp(s) URL with a host.
pub fn validate_optional_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    match Url::parse(value) {
        Ok(parsed) if URL_SCHEMES.contains(&parsed.scheme()) && parsed.has_host() => Ok(()),
        _ => Err(rejection("url", "Enter a valid URL")),
    }
}

/// Accepts an empty string or a well-formed e-mail address.
pub fn validate_optional_email(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || validate_email(value) {
        Ok(())
    } else {
        Err(rejection("email", "Enter a valid email address"))
    }
}

/// Enforces the `decimal(10, 3)` storage shape of a cost.
///
/// The value is checked as given: `12.5000` carries four decimal places and
/// is rejected even though it is numerically equal to `12.500`.
pub fn validate_cost(cost: &Decimal) -> Result<(), ValidationError> {
    if cost.scale() > COST_DECIMAL_PLACES {
        return Err(rejection(
            "cost_precision",
            format!(
                "Ensure that there are no more than {} decimal places",
                COST_DECIMAL_PLACES
            ),
        ));
    }

    let max_whole_digits = COST_MAX_DIGITS - COST_DECIMAL_PLACES;
    if integer_digits(cost) > max_whole_digits {
        return Err(rejection(
            "cost_precision",
            format!(
                "Ensure that there are no more than {} digits before the decimal point",
                max_whole_digits
            ),
        ));
    }

    Ok(())
}

/// Digits left of the decimal point, counting a bare zero as one digit.
fn integer_digits(value: &Decimal) -> u32 {
    let mantissa = value.mantissa().unsigned_abs();
    let total = mantissa.checked_ilog10().map_or(1, |d| d + 1);
    total.saturating_sub(value.scale())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_values_are_missing(#[case] value: &str) {
        let err = validate_required(value).unwrap_err();
        assert_eq!(err.code, "required");
    }

    #[test]
    fn non_blank_value_is_present() {
        assert!(validate_required("Acme").is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("https://example.com")]
    #[case("http://parts.example.com/catalog?item=42")]
    #[case("ftp://files.example.org/datasheets")]
    fn acceptable_urls(#[case] value: &str) {
        assert!(validate_optional_url(value).is_ok(), "{value} should pass");
    }

    #[rstest]
    #[case("not a url")]
    #[case("example.com")]
    #[case("mailto:sales@example.com")]
    #[case("javascript:alert(1)")]
    fn rejected_urls(#[case] value: &str) {
        let err = validate_optional_url(value).unwrap_err();
        assert_eq!(err.code, "url");
    }

    #[test]
    fn email_accepts_empty_and_valid() {
        assert!(validate_optional_email("").is_ok());
        assert!(validate_optional_email("sales@acme.example").is_ok());
        assert_eq!(
            validate_optional_email("sales at acme").unwrap_err().code,
            "email"
        );
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(0.001))]
    #[case(dec!(12.500))]
    #[case(dec!(9999999.999))]
    #[case(dec!(-1234567.5))]
    fn costs_within_precision(#[case] cost: Decimal) {
        assert!(validate_cost(&cost).is_ok(), "{cost} should pass");
    }

    #[rstest]
    #[case(dec!(0.0001))]
    #[case(dec!(12.5000))]
    #[case(dec!(10000000))]
    #[case(dec!(12345678.1))]
    #[case(dec!(-10000000.000))]
    fn costs_outside_precision(#[case] cost: Decimal) {
        let err = validate_cost(&cost).unwrap_err();
        assert_eq!(err.code, "cost_precision");
    }

    #[test]
    fn integer_digits_ignores_fraction() {
        assert_eq!(integer_digits(&dec!(0.5)), 0);
        assert_eq!(integer_digits(&dec!(0)), 1);
        assert_eq!(integer_digits(&dec!(12.500)), 2);
        assert_eq!(integer_digits(&dec!(-1234567)), 7);
    }
}
