use chrono::{Local, TimeZone};

/// One tmux session as observed by a single poll. Re-derived wholesale on
/// every listing; identity is the name, so a rename produces a new record.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    pub name: String,
    pub pane_count: i64,
    pub attached: bool,
    /// Unix epoch seconds as reported by tmux, kept string-encoded because
    /// the format belongs to tmux, not to us.
    pub created_at: String,
}

impl Session {
    pub fn display_title(&self) -> String {
        let marker = if self.attached { " ●" } else { "" };
        format!(
            "{}  ({} pane{}){}",
            self.name,
            self.pane_count,
            if self.pane_count == 1 { "" } else { "s" },
            marker
        )
    }
}

/// Renders a tmux creation timestamp for display, falling back to the raw
/// value when it is not a plausible epoch.
pub fn format_created_timestamp(created_at: &str) -> String {
    created_at
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|epoch| Local.timestamp_opt(epoch, 0).single())
        .map(|value| value.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| created_at.to_string())
}
