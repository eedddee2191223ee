//! Input-format validation for phone numbers and passwords.
//!
//! Pure functions; all policy rules live here so the handlers stay free of
//! format logic.

/// Phone numbers must carry this country prefix.
const PHONE_PREFIX: &str = "+62";

/// Allowed length of the phone number after the prefix, inclusive.
const PHONE_REST_LEN: std::ops::RangeInclusive<usize> = 10..=13;

/// Allowed password length, inclusive.
const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 6..=64;

/// A broken input-format rule. Client-facing and specific.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("phone number must have prefix +62")]
    PhonePrefix,

    #[error("phone number must be 10 to 13 characters after the +62 prefix")]
    PhoneLength,

    #[error("password must be between 6 and 64 characters")]
    PasswordLength,

    #[error("password must contain at least 1 capital letter, 1 number and 1 special character")]
    PasswordClasses,
}

/// Check phone number syntax: literal `+62` prefix, remainder length in
/// [10,13].
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let rest = phone
        .strip_prefix(PHONE_PREFIX)
        .ok_or(ValidationError::PhonePrefix)?;
    if !PHONE_REST_LEN.contains(&rest.len()) {
        return Err(ValidationError::PhoneLength);
    }
    Ok(())
}

/// Check password policy: length in [6,64] plus at least one uppercase
/// letter, one digit, and one character that is neither letter nor digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if !PASSWORD_LEN.contains(&password.len()) {
        return Err(ValidationError::PasswordLength);
    }

    let mut has_capital = false;
    let mut has_number = false;
    let mut has_special = false;

    for c in password.chars() {
        if c.is_uppercase() {
            has_capital = true;
        }
        if c.is_numeric() {
            has_number = true;
        }
        if !c.is_alphabetic() && !c.is_numeric() {
            has_special = true;
        }

        if has_capital && has_number && has_special {
            break;
        }
    }

    if !has_capital || !has_number || !has_special {
        return Err(ValidationError::PasswordClasses);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_accepts_valid_numbers() {
        assert_eq!(validate_phone("+6281234567890"), Ok(()));
        assert_eq!(validate_phone("+6282213770600"), Ok(()));
        // Boundary lengths: 10 and 13 digits after the prefix
        assert_eq!(validate_phone("+621234567890"), Ok(()));
        assert_eq!(validate_phone("+621234567890123"), Ok(()));
    }

    #[test]
    fn test_phone_rejects_missing_prefix() {
        assert_eq!(
            validate_phone("81234567890"),
            Err(ValidationError::PhonePrefix)
        );
        assert_eq!(
            validate_phone("+6581234567890"),
            Err(ValidationError::PhonePrefix)
        );
        assert_eq!(validate_phone(""), Err(ValidationError::PhonePrefix));
    }

    #[test]
    fn test_phone_rejects_bad_length() {
        // 9 digits after prefix
        assert_eq!(
            validate_phone("+62123456789"),
            Err(ValidationError::PhoneLength)
        );
        // 14 digits after prefix
        assert_eq!(
            validate_phone("+6212345678901234"),
            Err(ValidationError::PhoneLength)
        );
        // Bare prefix
        assert_eq!(validate_phone("+62"), Err(ValidationError::PhoneLength));
    }

    #[test]
    fn test_password_accepts_all_classes() {
        assert_eq!(validate_password("T3stv@lid"), Ok(()));
        assert_eq!(validate_password("Aa1!xx"), Ok(()));
    }

    #[test]
    fn test_password_rejects_missing_class() {
        // No digit
        assert_eq!(
            validate_password("Testv@lid"),
            Err(ValidationError::PasswordClasses)
        );
        // No uppercase
        assert_eq!(
            validate_password("t3stv@lid"),
            Err(ValidationError::PasswordClasses)
        );
        // No special character
        assert_eq!(
            validate_password("T3stvalid"),
            Err(ValidationError::PasswordClasses)
        );
    }

    #[test]
    fn test_password_rejects_bad_length() {
        // 5 characters, all classes present
        assert_eq!(
            validate_password("Aa1!x"),
            Err(ValidationError::PasswordLength)
        );
        // 65 characters
        let long = format!("Aa1!{}", "x".repeat(61));
        assert_eq!(validate_password(&long), Err(ValidationError::PasswordLength));
        // Exactly 64 passes
        let max = format!("Aa1!{}", "x".repeat(60));
        assert_eq!(validate_password(&max), Ok(()));
    }
}
