/// Shown by the prompt whenever a width or height is rejected.
pub const INVALID_DIMENSION_MESSAGE: &str = "Enter a valid positive integer number";

/// Largest accepted dimension; keeps the value usable as a screen coordinate.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DimensionError {
    #[error("Dimension is empty")]
    Empty,

    #[error("'{input}' is not a base-10 integer")]
    NotAnInteger { input: String },

    #[error("'{input}' is not positive")]
    NotPositive { input: String },

    #[error("'{input}' exceeds the largest supported dimension")]
    TooLarge { input: String },
}

/// Parse a user-entered width or height.
///
/// Accepts base-10 digits with an optional `+` sign and surrounding
/// whitespace. The value must be in `1..=MAX_DIMENSION`.
pub fn parse_dimension(input: &str) -> Result<u32, DimensionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DimensionError::Empty);
    }

    let (negative, digits) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DimensionError::NotAnInteger {
            input: trimmed.to_string(),
        });
    }

    let all_zero = digits.bytes().all(|b| b == b'0');
    if negative || all_zero {
        return Err(DimensionError::NotPositive {
            input: trimmed.to_string(),
        });
    }

    match digits.parse::<u32>() {
        Ok(value) if value <= MAX_DIMENSION => Ok(value),
        _ => Err(DimensionError::TooLarge {
            input: trimmed.to_string(),
        }),
    }
}

/// Prompt validator: accepts exactly what [`parse_dimension`] accepts.
pub fn validate_dimension(input: &str) -> Result<(), String> {
    parse_dimension(input)
        .map(|_| ())
        .map_err(|_| INVALID_DIMENSION_MESSAGE.to_string())
}
