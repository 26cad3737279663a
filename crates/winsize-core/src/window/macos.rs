use std::collections::HashSet;
use std::ffi::c_void;
use std::path::Path;
use std::ptr;

use accessibility_sys::{
    AXError, AXUIElementCopyAttributeValue, AXUIElementCreateApplication,
    AXUIElementPerformAction, AXUIElementRef, AXUIElementSetAttributeValue,
    AXUIElementSetMessagingTimeout, AXValueCreate, AXValueType, kAXErrorFailure, kAXErrorSuccess,
    kAXPositionAttribute, kAXRaiseAction, kAXSizeAttribute, kAXTitleAttribute,
    kAXValueTypeCGPoint, kAXValueTypeCGSize, kAXWindowsAttribute,
};
use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::{CFType, CFTypeRef, TCFType};
use core_foundation::string::CFString;
use core_graphics::geometry::{CGPoint, CGSize};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::{debug, info, warn};

use super::errors::WindowError;
use super::path::application_path;
use super::types::{Bounds, WindowHandle, WindowSource};

/// Timeout for AX messaging (seconds)
const AX_MESSAGING_TIMEOUT: f32 = 1.0;

/// Window source backed by Core Graphics enumeration (via xcap) and the
/// macOS Accessibility API.
#[derive(Debug, Default)]
pub struct MacosWindowSource;

impl MacosWindowSource {
    pub fn new() -> Self {
        Self
    }
}

/// A window of another application, held as a retained AX element.
///
/// The element is retained for the lifetime of the handle, so every call acts
/// on the window that was enumerated even if titles change or repeat.
#[derive(Debug)]
pub struct MacosWindow {
    element: CFType,
    pid: i32,
    path: String,
}

impl MacosWindow {
    fn element_ref(&self) -> AXUIElementRef {
        self.element.as_CFTypeRef() as AXUIElementRef
    }

    /// Wrap `value` in an AXValue and assign it to `attribute`.
    fn set_value_attribute<T>(
        &self,
        attribute: &'static str,
        value_type: AXValueType,
        value: &T,
    ) -> Result<(), WindowError> {
        // SAFETY: `value` is a live CGPoint/CGSize matching `value_type`; AXValueCreate
        // copies it. The result is +1 retained (Create Rule).
        let ax_value = unsafe { AXValueCreate(value_type, value as *const T as *const c_void) };
        if ax_value.is_null() {
            return Err(WindowError::SetBoundsFailed {
                attribute,
                code: kAXErrorFailure,
            });
        }

        // SAFETY: ax_value is a non-null +1 retained CF object; CFType releases it on drop.
        let ax_value: CFType = unsafe { TCFType::wrap_under_create_rule(ax_value as CFTypeRef) };
        let cf_attr = CFString::new(attribute);

        // SAFETY: Setting attribute value on a retained window element.
        let code = unsafe {
            AXUIElementSetAttributeValue(
                self.element_ref(),
                cf_attr.as_concrete_TypeRef(),
                ax_value.as_CFTypeRef(),
            )
        };

        if code != kAXErrorSuccess {
            warn!(
                event = "core.window.set_attribute_failed",
                pid = self.pid,
                attribute = attribute,
                ax_error = code
            );
            return Err(WindowError::SetBoundsFailed { attribute, code });
        }

        Ok(())
    }
}

impl WindowHandle for MacosWindow {
    fn path(&self) -> &str {
        &self.path
    }

    fn title(&self) -> String {
        ax_get_string_attribute(self.element_ref(), kAXTitleAttribute).unwrap_or_default()
    }

    fn set_bounds(&self, bounds: Bounds) -> Result<(), WindowError> {
        debug!(
            event = "core.window.set_bounds_started",
            pid = self.pid,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height
        );

        let position = CGPoint::new(f64::from(bounds.x), f64::from(bounds.y));
        let size = CGSize::new(f64::from(bounds.width), f64::from(bounds.height));

        self.set_value_attribute(kAXPositionAttribute, kAXValueTypeCGPoint, &position)?;
        self.set_value_attribute(kAXSizeAttribute, kAXValueTypeCGSize, &size)?;

        debug!(event = "core.window.set_bounds_completed", pid = self.pid);
        Ok(())
    }

    fn bring_to_top(&self) -> Result<(), WindowError> {
        debug!(event = "core.window.raise_started", pid = self.pid);

        let raised = ax_raise(self.element_ref());
        if let Err(reason) = &raised {
            // Activation still brings the app forward, though not necessarily this window
            warn!(
                event = "core.window.raise_ax_failed_fallback",
                pid = self.pid,
                reason = %reason
            );
        }

        let activated = activate_process(self.pid);
        let result = combine_raise_results(self.pid, raised, activated);

        if result.is_ok() {
            debug!(event = "core.window.raise_completed", pid = self.pid);
        }
        result
    }
}

impl WindowSource for MacosWindowSource {
    type Window = MacosWindow;

    fn list_windows(&self) -> Result<Vec<MacosWindow>, WindowError> {
        info!(event = "core.window.list_started");

        let owners = on_screen_owners()?;

        let sys_pids: Vec<Pid> = owners.iter().map(|(pid, _)| Pid::from_u32(*pid)).collect();
        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&sys_pids),
            true,
            ProcessRefreshKind::nothing().with_exe(UpdateKind::OnlyIfNotSet),
        );

        let mut skipped_count = 0;
        let mut result = Vec::new();

        for (pid, app_name) in owners {
            // xcap returns u32 PIDs, but macOS Accessibility API uses i32.
            let ax_pid = match i32::try_from(pid) {
                Ok(p) => p,
                Err(e) => {
                    warn!(
                        event = "core.window.pid_conversion_failed",
                        pid_u32 = pid,
                        error = %e
                    );
                    skipped_count += 1;
                    continue;
                }
            };

            let exe = system
                .process(Pid::from_u32(pid))
                .and_then(|process| process.exe());
            let path = resolve_path(exe, app_name);

            match application_windows(ax_pid) {
                Ok(elements) => {
                    debug!(
                        event = "core.window.application_windows_found",
                        pid = ax_pid,
                        path = %path,
                        count = elements.len()
                    );
                    result.extend(elements.into_iter().map(|element| MacosWindow {
                        element,
                        pid: ax_pid,
                        path: path.clone(),
                    }));
                }
                Err(e) => {
                    debug!(
                        event = "core.window.application_windows_skipped",
                        pid = ax_pid,
                        path = %path,
                        error = %e
                    );
                    skipped_count += 1;
                }
            }
        }

        if skipped_count > 0 {
            warn!(
                event = "core.window.list_incomplete",
                skipped_count = skipped_count,
                returned_count = result.len()
            );
        }

        info!(event = "core.window.list_completed", count = result.len());
        Ok(result)
    }
}

/// Application path for a window owner: its bundle when the executable is
/// known, otherwise the app name reported by the window server.
fn resolve_path(executable: Option<&Path>, app_name: String) -> String {
    executable
        .map(|exe| application_path(exe).to_string_lossy().into_owned())
        .unwrap_or(app_name)
}

/// Perform the AXRaise action on a window element.
fn ax_raise(element: AXUIElementRef) -> Result<(), String> {
    let cf_action = CFString::new(kAXRaiseAction);

    // SAFETY: Performing an action on a retained window element.
    let code = unsafe { AXUIElementPerformAction(element, cf_action.as_concrete_TypeRef()) };

    if code != kAXErrorSuccess {
        return Err(format!("AXRaise failed (AXError: {})", code));
    }
    Ok(())
}

/// Raising succeeds when either the AX raise or the app activation worked.
///
/// A failed activation after a successful raise only leaves the app behind
/// the current one, so it is logged rather than returned.
fn combine_raise_results(
    pid: i32,
    raised: Result<(), String>,
    activated: Result<(), WindowError>,
) -> Result<(), WindowError> {
    match (raised, activated) {
        (Ok(()), Ok(())) | (Err(_), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => {
            warn!(
                event = "core.window.activate_skipped",
                pid = pid,
                error = %e
            );
            Ok(())
        }
        (Err(reason), Err(e)) => Err(WindowError::RaiseFailed {
            reason: format!("{}; {}", reason, e),
        }),
    }
}

/// Owners of on-screen windows as `(pid, app_name)`, deduplicated in first-seen
/// order. Our own process is left out.
fn on_screen_owners() -> Result<Vec<(u32, String)>, WindowError> {
    let windows = xcap::Window::all().map_err(|e| WindowError::EnumerationFailed {
        message: e.to_string(),
    })?;

    let own_pid = std::process::id();
    let mut seen = HashSet::new();
    let mut owners = Vec::new();

    for w in windows {
        let pid = match w.pid() {
            Ok(pid) => pid,
            Err(e) => {
                debug!(
                    event = "core.window.property_access_failed",
                    property = "pid",
                    error = %e
                );
                continue;
            }
        };

        if pid == own_pid || !seen.insert(pid) {
            continue;
        }

        let app_name = w.app_name().ok().unwrap_or_default();
        owners.push((pid, app_name));
    }

    Ok(owners)
}

/// Retain every AX window element of the application with `pid`.
fn application_windows(pid: i32) -> Result<Vec<CFType>, WindowError> {
    // SAFETY: AXUIElementCreateApplication creates a +1 retained AXUIElementRef.
    let app_element = unsafe { AXUIElementCreateApplication(pid) };
    if app_element.is_null() {
        return Err(WindowError::ApplicationWindowsUnavailable {
            pid,
            code: kAXErrorFailure,
        });
    }

    // SAFETY: app_element is non-null and +1 retained; CFType releases it on drop.
    let app: CFType = unsafe { TCFType::wrap_under_create_rule(app_element as CFTypeRef) };

    // SAFETY: app_element is a valid AXUIElementRef kept alive by `app`.
    unsafe {
        AXUIElementSetMessagingTimeout(app_element, AX_MESSAGING_TIMEOUT);
    }

    let cf_windows_attr = CFString::new(kAXWindowsAttribute);
    let mut windows_value: CFTypeRef = ptr::null();

    // SAFETY: Standard AXUIElementCopyAttributeValue call (Copy Rule: +1 retained ref).
    let code = unsafe {
        AXUIElementCopyAttributeValue(
            app.as_CFTypeRef() as AXUIElementRef,
            cf_windows_attr.as_concrete_TypeRef(),
            &mut windows_value,
        )
    };

    if code != kAXErrorSuccess || windows_value.is_null() {
        return Err(WindowError::ApplicationWindowsUnavailable { pid, code });
    }

    // SAFETY: windows_value is a +1 retained CFArrayRef from CopyAttributeValue.
    // wrap_under_create_rule takes ownership and releases it when dropped.
    let cf_array: CFArray<CFType> =
        unsafe { CFArray::wrap_under_create_rule(windows_value as CFArrayRef) };

    // Cloning retains each element so it outlives the array.
    Ok(cf_array.iter().map(|item| CFType::clone(&item)).collect())
}

/// Get a string attribute from an AX element.
fn ax_get_string_attribute(element: AXUIElementRef, attribute: &str) -> Option<String> {
    let cf_attr = CFString::new(attribute);
    let mut value: CFTypeRef = ptr::null();

    // SAFETY: Standard AXUIElementCopyAttributeValue (Copy Rule: +1 retained on success).
    let result = unsafe {
        AXUIElementCopyAttributeValue(element, cf_attr.as_concrete_TypeRef(), &mut value)
    };

    if result != kAXErrorSuccess as AXError || value.is_null() {
        return None;
    }

    // SAFETY: value is a +1 retained CFTypeRef. wrap_under_create_rule takes ownership.
    let cf_type: CFType = unsafe { TCFType::wrap_under_create_rule(value) };

    cf_type.downcast::<CFString>().map(|s| s.to_string())
}

/// Bring the process with `pid` to the foreground via System Events.
fn activate_process(pid: i32) -> Result<(), WindowError> {
    let script = format!(
        r#"tell application "System Events" to set frontmost of (first process whose unix id is {}) to true"#,
        pid
    );

    match std::process::Command::new("osascript")
        .arg("-e")
        .arg(&script)
        .output()
    {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let hint = if stderr.contains("not allowed") || stderr.contains("permission") {
                " (check System Settings > Privacy & Security > Automation)"
            } else {
                ""
            };
            warn!(
                event = "core.window.activate_failed",
                pid = pid,
                stderr = %stderr
            );
            Err(WindowError::RaiseFailed {
                reason: format!("Failed to activate process {}: {}{}", pid, stderr, hint),
            })
        }
        Err(e) => {
            warn!(
                event = "core.window.activate_error",
                pid = pid,
                error = %e
            );
            Err(WindowError::RaiseFailed {
                reason: format!("Failed to run osascript for process {}: {}", pid, e),
            })
        }
    }
}
