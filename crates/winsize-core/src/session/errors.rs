use crate::errors::WinsizeError;
use crate::selector::SelectorError;
use crate::window::WindowError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Selector(#[from] SelectorError),
}

impl WinsizeError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::Window(e) => e.error_code(),
            SessionError::Selector(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SessionError::Window(e) => e.is_user_error(),
            SessionError::Selector(e) => e.is_user_error(),
        }
    }
}
