//! winsize-core: window enumeration, selection and resizing for the winsize CLI
//!
//! The orchestration in [`session`] is platform-agnostic. It talks to the
//! operating system only through the [`permissions::PermissionGate`],
//! [`window::WindowSource`] and [`selector::Prompter`] seams.

pub mod errors;
pub mod events;
pub mod logging;
pub mod naming;
pub mod permissions;
pub mod resize;
pub mod selector;
pub mod session;
pub mod window;

#[cfg(test)]
pub(crate) mod test_support;

pub use logging::init_logging;
pub use permissions::{PERMISSIONS_BANNER, PermissionGate};
pub use session::{SessionError, SessionOutcome, run_session};
pub use window::{Bounds, WindowHandle, WindowSource};
