use accessibility_sys::{AXIsProcessTrustedWithOptions, kAXTrustedCheckOptionPrompt};
use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;
use tracing::info;

use super::PermissionGate;

// SAFETY: FFI declaration for CGPreflightScreenCaptureAccess from the macOS CoreGraphics
// framework (10.15+). Reports the current grant without showing any prompt.
#[link(name = "CoreGraphics", kind = "framework")]
unsafe extern "C" {
    fn CGPreflightScreenCaptureAccess() -> bool;
}

/// Accessibility and screen capture checks through the macOS system APIs.
#[derive(Debug, Default)]
pub struct MacosPermissionGate;

impl PermissionGate for MacosPermissionGate {
    fn request_accessibility(&self) {
        // SAFETY: kAXTrustedCheckOptionPrompt is a static CFStringRef owned by the
        // framework; wrap_under_get_rule retains it for the dictionary.
        let prompt_key = unsafe { CFString::wrap_under_get_rule(kAXTrustedCheckOptionPrompt) };
        let options = CFDictionary::from_CFType_pairs(&[(prompt_key, CFBoolean::true_value())]);

        // SAFETY: options is a valid CFDictionary for the duration of the call.
        let trusted = unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) };

        info!(
            event = "core.permissions.accessibility_requested",
            trusted = trusted
        );
    }

    fn has_screen_capture_permission(&self) -> bool {
        // SAFETY: No arguments; returns false when access has not been granted.
        let granted = unsafe { CGPreflightScreenCaptureAccess() };

        info!(
            event = "core.permissions.screen_capture_checked",
            granted = granted
        );

        granted
    }
}
