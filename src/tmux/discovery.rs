use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;

const FIXED_CANDIDATES: [&str; 3] = [
    "/opt/homebrew/bin/tmux",
    "/usr/local/bin/tmux",
    "/usr/bin/tmux",
];

/// Prefix prepended to the inherited PATH for every subprocess, so Homebrew
/// installs are found even when the launching environment has a bare PATH.
const SUBPROCESS_PATH_PREFIX: &str = "/opt/homebrew/bin:/usr/local/bin:/usr/bin:/bin";

/// Locates the tmux executable, probing the fixed install locations before
/// falling back to a `which` lookup. Cached for the process lifetime.
pub fn find_tmux_path() -> Option<PathBuf> {
    static CACHED: OnceLock<Option<PathBuf>> = OnceLock::new();
    CACHED.get_or_init(discover_tmux_path).clone()
}

fn discover_tmux_path() -> Option<PathBuf> {
    for candidate in FIXED_CANDIDATES {
        let path = Path::new(candidate);
        if is_executable_file(path) {
            return Some(path.to_path_buf());
        }
    }
    which_tmux()
}

fn which_tmux() -> Option<PathBuf> {
    let output = Command::new("which")
        .arg("tmux")
        .env("PATH", subprocess_path_env())
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!path.is_empty()).then(|| PathBuf::from(path))
}

pub(super) fn subprocess_path_env() -> String {
    let inherited = std::env::var("PATH").unwrap_or_default();
    format!("{SUBPROCESS_PATH_PREFIX}:{inherited}")
}

#[cfg(unix)]
fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable_file(path: &Path) -> bool {
    path.is_file()
}
