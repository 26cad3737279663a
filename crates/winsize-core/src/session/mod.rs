pub mod errors;
pub mod handler;
pub mod types;

pub use errors::SessionError;
pub use handler::run_session;
pub use types::SessionOutcome;
