use crate::window::Bounds;

/// How a session ended without error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Screen capture is not granted; nothing was listed or prompted.
    PermissionDenied,
    /// The chosen window was resized and raised.
    Resized { label: String, bounds: Bounds },
}
