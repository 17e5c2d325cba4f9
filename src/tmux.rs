use crate::domain::Session;

mod attach;
mod discovery;
mod names;
mod parser;
mod system;

pub use attach::{attach_script, shell_safe_name};
pub use discovery::find_tmux_path;
pub use names::{MAX_SESSION_NAME_LEN, is_valid_session_name};
pub use parser::{apply_pane_counts, parse_pane_counts, parse_sessions};
pub use system::SystemTmuxAdapter;

/// Listing format handed to `tmux list-sessions -F`. Names cannot contain
/// `|` by construction, so the delimiter is safe for the first three fields.
const SESSION_FORMAT: &str =
    "#{session_name}|#{session_windows}|#{session_attached}|#{session_created}";

/// One line per pane; tallied per session to override the window count.
const PANE_SESSION_FORMAT: &str = "#{session_name}";

pub trait TmuxAdapter {
    fn list_sessions(&self) -> Result<Vec<Session>, String>;
    fn create_session(&self, name: Option<&str>) -> Result<(), String>;
    fn rename_session(&self, current: &str, new_name: &str) -> Result<(), String>;
    fn kill_session(&self, name: &str) -> Result<(), String>;
    fn attach_session(&self, name: &str) -> Result<(), String>;
}
