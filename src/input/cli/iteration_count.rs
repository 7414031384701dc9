use thiserror::Error;

/// Default number of chaos-game iterations offered to users.
pub const DEFAULT_ITERATION_COUNT: u64 = 50_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("the number of points is required")]
    Empty,
    #[error("`{0}` is not a positive whole number")]
    NotAPositiveInteger(String),
    #[error("the number of points must be greater than zero")]
    NotPositive,
    #[error("`{0}` is too large")]
    OutOfRange(String),
}

/// Parses a user-entered point count.
///
/// Accepts `^[1-9][0-9]*$` after trimming whitespace. Anything else is
/// rejected before it can reach the generator, which itself accepts zero.
pub fn parse_iteration_count(input: &str) -> Result<u64, ValidationError> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ValidationError::NotAPositiveInteger(trimmed.to_owned()));
    }

    if trimmed.bytes().all(|byte| byte == b'0') {
        return Err(ValidationError::NotPositive);
    }

    if trimmed.starts_with('0') {
        return Err(ValidationError::NotAPositiveInteger(trimmed.to_owned()));
    }

    trimmed
        .parse::<u64>()
        .map_err(|_| ValidationError::OutOfRange(trimmed.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_numbers() {
        assert_eq!(parse_iteration_count("1"), Ok(1));
        assert_eq!(parse_iteration_count("50000"), Ok(50_000));
        assert_eq!(parse_iteration_count("  1000\n"), Ok(1000));
    }

    #[test]
    fn test_accepts_u64_max() {
        assert_eq!(parse_iteration_count("18446744073709551615"), Ok(u64::MAX));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert_eq!(parse_iteration_count(""), Err(ValidationError::Empty));
        assert_eq!(parse_iteration_count("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_rejects_zero() {
        assert_eq!(parse_iteration_count("0"), Err(ValidationError::NotPositive));
        assert_eq!(parse_iteration_count("000"), Err(ValidationError::NotPositive));
    }

    #[test]
    fn test_rejects_non_digits() {
        for input in ["-5", "+5", "1.5", "1e3", "abc", "12 34", "0x10"] {
            assert_eq!(
                parse_iteration_count(input),
                Err(ValidationError::NotAPositiveInteger(input.to_owned())),
                "{input}"
            );
        }
    }

    #[test]
    fn test_rejects_leading_zero() {
        assert_eq!(
            parse_iteration_count("007"),
            Err(ValidationError::NotAPositiveInteger("007".to_owned()))
        );
    }

    #[test]
    fn test_rejects_overflow() {
        assert_eq!(
            parse_iteration_count("18446744073709551616"),
            Err(ValidationError::OutOfRange("18446744073709551616".to_owned()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ValidationError::Empty.to_string(), "the number of points is required");
        assert_eq!(
            ValidationError::NotPositive.to_string(),
            "the number of points must be greater than zero"
        );
    }
}
