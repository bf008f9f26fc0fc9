//! Input path helpers

use std::path::{Path, PathBuf};

/// Path argument meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Expand `~`, `$VAR` and `${VAR}` in a path string.
///
/// Needed for paths taken from environment variables, which the shell does not expand.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

/// Expand a user-supplied input path.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(expand_env_vars(&path.to_string_lossy()))
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}
