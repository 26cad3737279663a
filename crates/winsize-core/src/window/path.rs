use std::path::{Path, PathBuf};

/// Resolve an executable path to the application that owns it.
///
/// Returns the innermost `*.app` bundle enclosing the executable, so helper
/// processes nested inside another bundle keep their own name. Executables
/// outside any bundle are returned unchanged.
pub fn application_path(executable: &Path) -> PathBuf {
    executable
        .ancestors()
        .skip(1)
        .find(|ancestor| {
            ancestor
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("app"))
        })
        .unwrap_or(executable)
        .to_path_buf()
}
