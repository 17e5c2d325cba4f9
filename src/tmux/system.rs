use std::path::PathBuf;
use std::process::Command;

use crate::config::AppConfig;
use crate::domain::Session;

use super::discovery::{find_tmux_path, subprocess_path_env};
use super::parser::{apply_pane_counts, parse_pane_counts, parse_sessions};
use super::{PANE_SESSION_FORMAT, SESSION_FORMAT, TmuxAdapter, attach};

/// Adapter over the system tmux binary. All calls are synchronous; a missing
/// binary degrades every operation to a no-op with empty output.
#[derive(Clone, Debug)]
pub struct SystemTmuxAdapter {
    socket_name: Option<String>,
    tmux_path: Option<PathBuf>,
    terminal_app: String,
}

impl SystemTmuxAdapter {
    pub fn new(socket_name: Option<String>) -> Self {
        Self {
            socket_name,
            tmux_path: find_tmux_path(),
            terminal_app: "Terminal".to_string(),
        }
    }

    pub fn from_config(socket_name: Option<String>, config: &AppConfig) -> Self {
        let mut adapter = Self::new(socket_name);
        let tmux_override = config.tmux_path.trim();
        if !tmux_override.is_empty() {
            adapter.tmux_path = Some(PathBuf::from(tmux_override));
        }
        let terminal_app = config.terminal_app.trim();
        if !terminal_app.is_empty() {
            adapter.terminal_app = terminal_app.to_string();
        }
        adapter
    }

    pub fn tmux_available(&self) -> bool {
        self.tmux_path.is_some()
    }

    fn run_tmux(&self, args: &[&str]) -> Result<String, String> {
        let Some(tmux) = &self.tmux_path else {
            return Ok(String::new());
        };
        let mut command = Command::new(tmux);
        if let Some(socket) = &self.socket_name {
            command.args(["-L", socket]);
        }
        command.args(args);
        command.env("PATH", subprocess_path_env());

        // A launch failure is indistinguishable from "nothing to report":
        // empty output, and the next poll reflects reality.
        let output = match command.output() {
            Ok(output) => output,
            Err(_) => return Ok(String::new()),
        };
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(format!("tmux {:?} failed: {}", args, stderr.trim()));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl TmuxAdapter for SystemTmuxAdapter {
    fn list_sessions(&self) -> Result<Vec<Session>, String> {
        let stdout = match self.run_tmux(&["list-sessions", "-F", SESSION_FORMAT]) {
            Ok(stdout) => stdout,
            Err(err) if is_tmux_no_server_error(&err) => return Ok(Vec::new()),
            Err(err) => return Err(err),
        };
        let mut sessions = parse_sessions(&stdout);
        if sessions.is_empty() {
            return Ok(sessions);
        }
        // Live pane tally overrides the tool-reported window count; if the
        // second call fails the window count from the first call stands.
        if let Ok(pane_output) = self.run_tmux(&["list-panes", "-a", "-F", PANE_SESSION_FORMAT]) {
            apply_pane_counts(&mut sessions, &parse_pane_counts(&pane_output));
        }
        Ok(sessions)
    }

    fn create_session(&self, name: Option<&str>) -> Result<(), String> {
        let mut args = vec!["new-session", "-d"];
        if let Some(name) = name.filter(|name| !name.is_empty()) {
            args.extend(["-s", name]);
        }
        self.run_tmux(&args).map(|_| ())
    }

    fn rename_session(&self, current: &str, new_name: &str) -> Result<(), String> {
        self.run_tmux(&["rename-session", "-t", current, new_name])
            .map(|_| ())
    }

    fn kill_session(&self, name: &str) -> Result<(), String> {
        self.run_tmux(&["kill-session", "-t", name]).map(|_| ())
    }

    fn attach_session(&self, name: &str) -> Result<(), String> {
        attach::open_in_terminal(&self.terminal_app, self.socket_name.as_deref(), name)
    }
}

pub(super) fn is_tmux_no_server_error(error: &str) -> bool {
    let normalized = error.to_ascii_lowercase();
    normalized.contains("no server running")
        || normalized.contains("no sessions")
        || normalized.contains("error connecting")
}
