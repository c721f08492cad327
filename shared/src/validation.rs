//! Input validation helpers
//!
//! All validation runs before any record is persisted; a failed check means
//! nothing was written.

use rust_decimal::Decimal;

/// Validate that a dimension or quantity is strictly positive
pub fn validate_positive(value: Decimal) -> Result<(), &'static str> {
    if value > Decimal::ZERO {
        Ok(())
    } else {
        Err("must be greater than zero")
    }
}

/// Validate that a mass may be zero but never negative (waste can be zero)
pub fn validate_non_negative(value: Decimal) -> Result<(), &'static str> {
    if value >= Decimal::ZERO {
        Ok(())
    } else {
        Err("cannot be negative")
    }
}

/// Validate a piece count
pub fn validate_positive_count(value: i32) -> Result<(), &'static str> {
    if value > 0 {
        Ok(())
    } else {
        Err("must be at least 1")
    }
}

/// Validate a username (3-32 word characters)
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return Err("username may contain letters, digits, '_' and '.' only");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("password must be at least 8 characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(validate_positive(Decimal::from_str("0.01").unwrap()).is_ok());
        assert!(validate_positive(Decimal::ZERO).is_err());
        assert!(validate_positive(Decimal::from_str("-1").unwrap()).is_err());
    }

    #[test]
    fn non_negative_allows_zero() {
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::from_str("-0.5").unwrap()).is_err());
    }

    #[test]
    fn count_must_be_at_least_one() {
        assert!(validate_positive_count(1).is_ok());
        assert!(validate_positive_count(0).is_err());
        assert!(validate_positive_count(-5).is_err());
    }

    #[test]
    fn username_rules() {
        assert!(validate_username("fabrika.admin").is_ok());
        assert!(validate_username("ab").is_err());
        assert!(validate_username("has space").is_err());
    }
}
