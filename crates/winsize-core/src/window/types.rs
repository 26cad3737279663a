use super::errors::WindowError;

/// On-screen position and size of a window, in screen points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width, self.height, self.x, self.y
        )
    }
}

/// A live top-level window owned by another application.
///
/// Handles are only valid for the run that enumerated them. The handle
/// passed to [`WindowHandle::set_bounds`] is the one the source returned,
/// never one looked up again by name.
pub trait WindowHandle {
    /// Path of the owning application (bundle or executable)
    fn path(&self) -> &str;

    /// Current window title, empty when the window has none
    fn title(&self) -> String;

    /// Move and resize the window in one call
    fn set_bounds(&self, bounds: Bounds) -> Result<(), WindowError>;

    /// Raise the window above others and bring its application forward
    fn bring_to_top(&self) -> Result<(), WindowError>;
}

/// Enumerates the currently open top-level windows.
pub trait WindowSource {
    type Window: WindowHandle;

    fn list_windows(&self) -> Result<Vec<Self::Window>, WindowError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_display() {
        let bounds = Bounds::new(10, 20, 800, 600);
        assert_eq!(bounds.to_string(), "800x600 at (10, 20)");
    }
}
