//! # Shared Utility Functions
//!
//! Common utility functions used by the dashboard client before talking to
//! the backend.
//!
//! ## Phone Normalization
//!
//! The backend stores phone numbers in a single canonical, country-code
//! prefixed form. [`normalize_phone`] is applied client-side to registration
//! and OTP payloads so differently formatted inputs collapse to one shape.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::normalize_phone;
//!
//! assert_eq!(normalize_phone("98765 43210"), "+919876543210");
//! ```

/// Canonicalize a phone number to the `+91`-prefixed wire form.
///
/// A pure formatting function with no state:
/// - inputs already starting with `+` are returned unchanged (trimmed),
/// - all non-digits are stripped, then leading zeros are dropped,
/// - a bare `91` country prefix on an 11+ digit number is kept and only
///   the `+` is added,
/// - anything else gets the `+91` prefix.
///
/// # Examples
///
/// ```rust
/// use shared::utils::normalize_phone;
///
/// assert_eq!(normalize_phone("9876543210"), "+919876543210");
/// assert_eq!(normalize_phone("0987654321"), "+91987654321");
/// assert_eq!(normalize_phone("+919876543210"), "+919876543210");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('+') {
        return trimmed.to_string();
    }

    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    let d = digits.trim_start_matches('0');
    if d.is_empty() {
        return trimmed.to_string();
    }

    // 91XXXXXXXXXX already carries the country code
    if d.len() >= 11 && d.starts_with("91") {
        return format!("+{d}");
    }

    format!("+91{d}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ten_digit_number_gets_prefix() {
        assert_eq!(normalize_phone("9876543210"), "+919876543210");
    }

    #[test]
    fn test_leading_zero_stripped_then_prefixed() {
        assert_eq!(normalize_phone("0987654321"), "+91987654321");
    }

    #[test]
    fn test_already_canonical_is_unchanged() {
        assert_eq!(normalize_phone("+919876543210"), "+919876543210");
    }

    #[test]
    fn test_separators_are_stripped() {
        assert_eq!(normalize_phone("98765-43210"), "+919876543210");
        assert_eq!(normalize_phone("98765 43210"), "+919876543210");
    }

    #[test]
    fn test_bare_country_code_kept() {
        assert_eq!(normalize_phone("919876543210"), "+919876543210");
    }

    #[test]
    fn test_empty_and_non_numeric_pass_through() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("   "), "");
        assert_eq!(normalize_phone("n/a"), "n/a");
    }
}
