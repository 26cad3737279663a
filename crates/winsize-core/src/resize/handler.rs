use tracing::info;

use crate::window::{Bounds, WindowError, WindowHandle};

/// Bounds applied for an entered width and height.
///
/// The entered numbers are also used as the window origin: `x` takes the
/// width and `y` the height. Dimensions are capped at `i32::MAX` by
/// validation, so the casts are lossless.
pub fn bounds_for(width: u32, height: u32) -> Bounds {
    Bounds::new(width as i32, height as i32, width, height)
}

/// Set the window's bounds once, then raise it. No read-back, no retry.
pub fn apply_resize<W: WindowHandle + ?Sized>(
    window: &W,
    width: u32,
    height: u32,
) -> Result<Bounds, WindowError> {
    let bounds = bounds_for(width, height);

    info!(
        event = "core.resize.apply_started",
        path = window.path(),
        x = bounds.x,
        y = bounds.y,
        width = bounds.width,
        height = bounds.height
    );

    window.set_bounds(bounds)?;
    window.bring_to_top()?;

    info!(event = "core.resize.apply_completed", path = window.path());
    Ok(bounds)
}
