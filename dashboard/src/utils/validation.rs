/// Validation utilities for user input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate a required free-text field
pub fn validate_required(value: &str, label: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{label} is required"));
    }
    ValidationResult::ok()
}

/// Validate password strength
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return ValidationResult::err("Password is required");
    }

    if password.len() < 8 {
        return ValidationResult::err("Password must be at least 8 characters");
    }

    ValidationResult::ok()
}

/// Validate an Indian phone number after normalization.
///
/// Accepts the canonical `+91` form with a 10 digit subscriber number, or
/// any other `+`-prefixed international number left as entered.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if phone.trim().is_empty() {
        return ValidationResult::err("Phone number is required");
    }

    let normalized = shared::normalize_phone(phone);
    if !normalized.starts_with('+') {
        return ValidationResult::err("Phone number must include digits");
    }
    let digits = normalized.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 8 {
        return ValidationResult::err("Phone number is too short");
    }

    ValidationResult::ok()
}

/// Validate a blood type string such as `O+` or `AB-`.
pub fn validate_blood_type(blood_type: &str) -> ValidationResult {
    const VALID: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
    if blood_type.trim().is_empty() {
        return ValidationResult::err("Blood type is required");
    }
    if !VALID.contains(&blood_type.trim().to_uppercase().as_str()) {
        return ValidationResult::err("Blood type must be one of A/B/AB/O with +/-");
    }
    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
    }

    #[test]
    fn test_password_validation() {
        assert!(validate_password("longenough").is_valid);
        assert!(!validate_password("short").is_valid);
        assert!(!validate_password("").is_valid);
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("9876543210").is_valid);
        assert!(validate_phone("+919876543210").is_valid);
        assert!(!validate_phone("").is_valid);
        assert!(!validate_phone("abc").is_valid);
    }

    #[test]
    fn test_blood_type_validation() {
        assert!(validate_blood_type("O+").is_valid);
        assert!(validate_blood_type("ab-").is_valid);
        assert!(!validate_blood_type("").is_valid);
        assert!(!validate_blood_type("C+").is_valid);
    }

    #[test]
    fn test_required_validation() {
        assert!(validate_required("value", "Name").is_valid);
        let result = validate_required("   ", "Name");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Name is required"));
    }
}
