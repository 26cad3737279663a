use crate::errors::WinsizeError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("Failed to enumerate windows: {message}")]
    EnumerationFailed { message: String },

    #[error("Failed to read windows of process {pid} (AXError: {code})")]
    ApplicationWindowsUnavailable { pid: i32, code: i32 },

    #[error("Failed to set window {attribute} (AXError: {code})")]
    SetBoundsFailed { attribute: &'static str, code: i32 },

    #[error("Failed to bring window to front: {reason}")]
    RaiseFailed { reason: String },

    #[error("Window management is not supported on {os}")]
    UnsupportedPlatform { os: String },
}

impl WinsizeError for WindowError {
    fn error_code(&self) -> &'static str {
        match self {
            WindowError::EnumerationFailed { .. } => "WINDOW_ENUMERATION_FAILED",
            WindowError::ApplicationWindowsUnavailable { .. } => {
                "WINDOW_APPLICATION_WINDOWS_UNAVAILABLE"
            }
            WindowError::SetBoundsFailed { .. } => "WINDOW_SET_BOUNDS_FAILED",
            WindowError::RaiseFailed { .. } => "WINDOW_RAISE_FAILED",
            WindowError::UnsupportedPlatform { .. } => "WINDOW_UNSUPPORTED_PLATFORM",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, WindowError::UnsupportedPlatform { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_bounds_failed_display() {
        let error = WindowError::SetBoundsFailed {
            attribute: "AXSize",
            code: -25200,
        };
        assert_eq!(
            error.to_string(),
            "Failed to set window AXSize (AXError: -25200)"
        );
        assert_eq!(error.error_code(), "WINDOW_SET_BOUNDS_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_unsupported_platform_is_user_error() {
        let error = WindowError::UnsupportedPlatform {
            os: "linux".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Window management is not supported on linux"
        );
        assert!(error.is_user_error());
    }
}
