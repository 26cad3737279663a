use crate::errors::WinsizeError;

#[derive(Debug, thiserror::Error)]
pub enum SelectorError {
    #[error("No windows found to resize")]
    NoWindows,

    #[error("Selection cancelled")]
    Cancelled,

    #[error("Prompt returned index {index} for {count} choices")]
    InvalidChoice { index: usize, count: usize },

    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },
}

impl From<inquire::InquireError> for SelectorError {
    fn from(error: inquire::InquireError) -> Self {
        match error {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => SelectorError::Cancelled,
            other => SelectorError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

impl WinsizeError for SelectorError {
    fn error_code(&self) -> &'static str {
        match self {
            SelectorError::NoWindows => "SELECTOR_NO_WINDOWS",
            SelectorError::Cancelled => "SELECTOR_CANCELLED",
            SelectorError::InvalidChoice { .. } => "SELECTOR_INVALID_CHOICE",
            SelectorError::PromptFailed { .. } => "SELECTOR_PROMPT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, SelectorError::NoWindows | SelectorError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_maps_to_cancelled() {
        let error: SelectorError = inquire::InquireError::OperationInterrupted.into();
        assert!(matches!(error, SelectorError::Cancelled));
        assert_eq!(error.error_code(), "SELECTOR_CANCELLED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_escape_maps_to_cancelled() {
        let error: SelectorError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(error, SelectorError::Cancelled));
    }

    #[test]
    fn test_not_tty_maps_to_prompt_failed() {
        let error: SelectorError = inquire::InquireError::NotTTY.into();
        assert!(matches!(error, SelectorError::PromptFailed { .. }));
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_no_windows_display() {
        assert_eq!(
            SelectorError::NoWindows.to_string(),
            "No windows found to resize"
        );
    }
}
