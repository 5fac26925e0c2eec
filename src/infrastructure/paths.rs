//! Paths inside the Zellij plugin sandbox.
//!
//! The sandbox mounts the host filesystem under `/host` (the cwd of the last
//! focused terminal, normally the user's home), so `~` in user-supplied paths
//! is rewritten to that mount.

use std::path::PathBuf;

const HOST_ROOT: &str = "/host";

/// Directory holding the plugin's trace file:
/// `/host/.local/share/zellij/restloop`.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("restloop")
}

/// Expands a leading `~` to the sandbox host mount.
///
/// ```
/// use restloop::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dusk.toml"), "/host/themes/dusk.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/dusk.toml"), "/etc/dusk.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
