//! Display labels for enumerated windows.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use tracing::warn;

/// Suffix carried by macOS application bundle directories
const BUNDLE_SUFFIX: &str = ".app";

/// Extract the application name from an application path.
///
/// Takes the last `/`-separated segment and drops a trailing `.app`
/// (case-insensitive). A path without separators is used whole.
pub fn app_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);

    let split_at = segment.len().saturating_sub(BUNDLE_SUFFIX.len());
    match segment.get(split_at..) {
        Some(suffix) if split_at > 0 && suffix.eq_ignore_ascii_case(BUNDLE_SUFFIX) => {
            &segment[..split_at]
        }
        _ => segment,
    }
}

/// Build the label shown in the window picker.
///
/// `"{app} ({title})"` when the title adds information, otherwise just `app`.
pub fn build_label(path: &str, title: &str) -> String {
    let app = app_name(path);
    if !title.is_empty() && title != app {
        format!("{} ({})", app, title)
    } else {
        app.to_string()
    }
}

/// Root-locale collator; `None` only if the bundled collation data fails to load.
static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|e| {
            warn!(
                event = "core.naming.collator_unavailable",
                error = %e
            );
        })
        .ok()
});

/// Compare two labels the way a user expects them listed.
///
/// Uses Unicode collation for the root locale at tertiary strength: accents
/// and case only break ties, and lowercase sorts before uppercase. Byte order
/// settles labels the collator considers equal.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    let collated = match COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    };

    collated.then_with(|| a.cmp(b))
}
