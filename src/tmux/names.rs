use std::sync::OnceLock;

use regex::Regex;

pub const MAX_SESSION_NAME_LEN: usize = 256;

/// Allow-list check applied before any rename/create is sent to tmux. The
/// character set keeps names safe to substitute into shell and AppleScript
/// string literals.
pub fn is_valid_session_name(name: &str) -> bool {
    name.len() <= MAX_SESSION_NAME_LEN && name_pattern().is_match(name)
}

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new("^[A-Za-z0-9_-]+$").expect("session name pattern should compile")
    })
}
