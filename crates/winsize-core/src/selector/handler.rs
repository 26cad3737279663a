use tracing::{debug, info};

use super::errors::SelectorError;
use super::prompter::Prompter;
use super::types::{Choice, Selection};
use super::validation::{parse_dimension, validate_dimension};
use crate::naming::{build_label, compare_labels};
use crate::window::WindowHandle;

const SELECT_MESSAGE: &str = "Select application to resize (input name to filter results)";
const WIDTH_MESSAGE: &str = "Width";
const HEIGHT_MESSAGE: &str = "Height";

/// Label every window and sort the labels for display.
pub fn build_choices<W: WindowHandle>(windows: Vec<W>) -> Vec<Choice<W>> {
    let mut choices: Vec<Choice<W>> = windows
        .into_iter()
        .map(|window| Choice {
            label: build_label(window.path(), &window.title()),
            window,
        })
        .collect();

    choices.sort_by(|a, b| compare_labels(&a.label, &b.label));
    choices
}

/// Run the three prompts: window, width, then height (defaulting to width).
///
/// The returned window is moved out of the enumerated list by index, so it is
/// the same handle the source produced.
pub fn select_window_and_size<W, P>(
    windows: Vec<W>,
    prompter: &mut P,
) -> Result<Selection<W>, SelectorError>
where
    W: WindowHandle,
    P: Prompter + ?Sized,
{
    if windows.is_empty() {
        return Err(SelectorError::NoWindows);
    }

    let mut choices = build_choices(windows);
    let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();

    info!(event = "core.selector.prompt_started", choices = labels.len());

    let index = prompter.select(SELECT_MESSAGE, &labels)?;
    if index >= choices.len() {
        return Err(SelectorError::InvalidChoice {
            index,
            count: choices.len(),
        });
    }
    let Choice { label, window } = choices.swap_remove(index);
    debug!(event = "core.selector.window_selected", label = %label);

    let width_input = prompter.text(WIDTH_MESSAGE, None, validate_dimension)?;
    let width = parse_answer(&width_input)?;

    let height_input = prompter.text(HEIGHT_MESSAGE, Some(&width_input), validate_dimension)?;
    let height = parse_answer(&height_input)?;

    info!(
        event = "core.selector.prompt_completed",
        label = %label,
        width = width,
        height = height
    );

    Ok(Selection {
        label,
        window,
        width,
        height,
    })
}

/// The prompt only returns validated answers; a rejection here means the
/// prompter skipped its validator.
fn parse_answer(input: &str) -> Result<u32, SelectorError> {
    parse_dimension(input).map_err(|e| SelectorError::PromptFailed {
        message: format!("prompt returned an invalid dimension: {}", e),
    })
}
