use tracing::info;

use super::errors::SessionError;
use super::types::SessionOutcome;
use crate::permissions::PermissionGate;
use crate::resize::apply_resize;
use crate::selector::{Prompter, select_window_and_size};
use crate::window::WindowSource;

/// Run one interactive resize session.
///
/// Permissions are checked first. Without screen capture access the session
/// ends quietly before any window is listed or any prompt is shown.
pub fn run_session<G, S, P>(
    gate: &G,
    source: &S,
    prompter: &mut P,
) -> Result<SessionOutcome, SessionError>
where
    G: PermissionGate + ?Sized,
    S: WindowSource + ?Sized,
    P: Prompter + ?Sized,
{
    info!(event = "core.session.started");

    gate.request_accessibility();

    if !gate.has_screen_capture_permission() {
        info!(event = "core.session.permission_denied");
        return Ok(SessionOutcome::PermissionDenied);
    }

    let windows = source.list_windows()?;
    let selection = select_window_and_size(windows, prompter)?;
    let bounds = apply_resize(&selection.window, selection.width, selection.height)?;

    info!(
        event = "core.session.completed",
        label = %selection.label,
        bounds = %bounds
    );

    Ok(SessionOutcome::Resized {
        label: selection.label,
        bounds,
    })
}
