use std::error::Error;

/// Base trait for all winsize errors
pub trait WinsizeError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error is caused by the user rather than the system
    fn is_user_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("probe")]
    struct Probe;

    impl WinsizeError for Probe {
        fn error_code(&self) -> &'static str {
            "PROBE"
        }
    }

    #[test]
    fn test_default_is_not_user_error() {
        assert!(!Probe.is_user_error());
        assert_eq!(Probe.error_code(), "PROBE");
    }
}
