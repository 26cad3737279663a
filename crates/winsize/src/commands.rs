use clap::ArgMatches;
use tracing::{error, info};

use winsize_core::errors::WinsizeError;
use winsize_core::events;
use winsize_core::permissions::platform_gate;
use winsize_core::selector::InquirePrompter;
use winsize_core::window::platform_source;
use winsize_core::{PERMISSIONS_BANNER, SessionOutcome, run_session};

/// Rows shown at once in the window picker
const PICKER_PAGE_SIZE: usize = 15;

pub fn run_command(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    println!("{}", PERMISSIONS_BANNER);

    let gate = platform_gate();
    let source = platform_source();
    let mut prompter = InquirePrompter::new().with_page_size(PICKER_PAGE_SIZE);

    info!(event = "cli.session_started");

    match run_session(&gate, &source, &mut prompter) {
        Ok(SessionOutcome::PermissionDenied) => {
            info!(event = "cli.session_skipped", reason = "screen_capture_denied");
            events::log_app_shutdown();
            Ok(())
        }
        Ok(SessionOutcome::Resized { label, bounds }) => {
            info!(
                event = "cli.session_completed",
                label = %label,
                bounds = %bounds
            );
            events::log_app_shutdown();
            Ok(())
        }
        Err(e) => {
            eprintln!("Failed to resize window: {}", e);
            error!(
                event = "cli.session_failed",
                error = %e,
                error_code = e.error_code(),
                user_error = e.is_user_error()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
