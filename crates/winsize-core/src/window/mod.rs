pub mod errors;
pub mod types;

mod path;

#[cfg(target_os = "macos")]
mod macos;

pub use errors::WindowError;
pub use path::application_path;
pub use types::{Bounds, WindowHandle, WindowSource};

#[cfg(target_os = "macos")]
pub use macos::{MacosWindow, MacosWindowSource};

/// Window source for the platform this binary was built for.
#[cfg(target_os = "macos")]
pub fn platform_source() -> MacosWindowSource {
    MacosWindowSource::new()
}

/// Window source for the platform this binary was built for.
#[cfg(not(target_os = "macos"))]
pub fn platform_source() -> UnsupportedWindowSource {
    UnsupportedWindowSource
}

/// Window source for platforms without a window adapter.
#[cfg(not(target_os = "macos"))]
#[derive(Debug, Default)]
pub struct UnsupportedWindowSource;

#[cfg(not(target_os = "macos"))]
impl WindowSource for UnsupportedWindowSource {
    type Window = UnsupportedWindow;

    fn list_windows(&self) -> Result<Vec<Self::Window>, WindowError> {
        tracing::warn!(
            event = "core.window.list_unsupported",
            os = std::env::consts::OS
        );
        Err(WindowError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        })
    }
}

/// Never constructed; exists so the unsupported source has a window type.
#[cfg(not(target_os = "macos"))]
#[derive(Debug)]
pub enum UnsupportedWindow {}

#[cfg(not(target_os = "macos"))]
impl WindowHandle for UnsupportedWindow {
    fn path(&self) -> &str {
        match *self {}
    }

    fn title(&self) -> String {
        match *self {}
    }

    fn set_bounds(&self, _bounds: Bounds) -> Result<(), WindowError> {
        match *self {}
    }

    fn bring_to_top(&self) -> Result<(), WindowError> {
        match *self {}
    }
}
