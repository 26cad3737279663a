#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacosPermissionGate;

/// Printed before anything else so the user knows which permissions to grant.
pub const PERMISSIONS_BANNER: &str = "
  In order to query and resize macOS windows, this application requires accessibility and screen capture permissions.
  Please grant these permissions to the application or else it won't work. The application DOES NOT capture your screen.
";

/// OS permissions needed before windows can be listed and moved.
pub trait PermissionGate {
    /// Ask the OS for accessibility control.
    ///
    /// Fire-and-forget: may show a system dialog on first use and returns
    /// immediately whatever the user answers.
    fn request_accessibility(&self);

    /// Whether screen capture (needed to read window titles) is granted.
    fn has_screen_capture_permission(&self) -> bool;
}

/// Permission gate for the platform this binary was built for.
#[cfg(target_os = "macos")]
pub fn platform_gate() -> MacosPermissionGate {
    MacosPermissionGate
}

/// Permission gate for the platform this binary was built for.
#[cfg(not(target_os = "macos"))]
pub fn platform_gate() -> UnsupportedPermissionGate {
    UnsupportedPermissionGate
}

/// Gate for platforms without window control; never grants access.
#[cfg(not(target_os = "macos"))]
#[derive(Debug, Default)]
pub struct UnsupportedPermissionGate;

#[cfg(not(target_os = "macos"))]
impl PermissionGate for UnsupportedPermissionGate {
    fn request_accessibility(&self) {
        tracing::info!(
            event = "core.permissions.accessibility_unsupported",
            os = std::env::consts::OS
        );
    }

    fn has_screen_capture_permission(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_text() {
        let expected = concat!(
            "\n",
            "  In order to query and resize macOS windows, this application requires ",
            "accessibility and screen capture permissions.\n",
            "  Please grant these permissions to the application or else it won't work. ",
            "The application DOES NOT capture your screen.\n",
        );
        assert_eq!(PERMISSIONS_BANNER, expected);
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_unsupported_gate_denies() {
        let gate = platform_gate();
        gate.request_accessibility();
        assert!(!gate.has_screen_capture_permission());
    }
}
