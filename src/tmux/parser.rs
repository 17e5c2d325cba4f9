use std::collections::HashMap;

use crate::domain::Session;

/// Parses `list-sessions` output produced with [`super::SESSION_FORMAT`].
/// Malformed lines are dropped individually; they never abort the listing.
pub fn parse_sessions(output: &str) -> Vec<Session> {
    output
        .lines()
        .filter_map(|line| parse_session_line(line.trim()))
        .collect()
}

fn parse_session_line(line: &str) -> Option<Session> {
    if line.is_empty() {
        return None;
    }
    // At most three splits, so a stray `|` past the third field stays inside
    // the creation timestamp instead of shifting fields.
    let parts: Vec<&str> = line.splitn(4, '|').collect();
    if parts.len() != 4 {
        return None;
    }
    let pane_count = parts[1].parse::<i64>().ok()?;
    let attached = parts[2].parse::<i64>().ok()?;
    Some(Session {
        name: parts[0].to_string(),
        pane_count,
        attached: attached != 0,
        created_at: parts[3].to_string(),
    })
}

/// Tallies `list-panes -a` output (one session name per pane line) into a
/// per-session pane count.
pub fn parse_pane_counts(output: &str) -> HashMap<String, i64> {
    let mut counts = HashMap::new();
    for name in output.lines().map(str::trim).filter(|name| !name.is_empty()) {
        *counts.entry(name.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Overrides each session's count with its live pane tally. A session with
/// no tallied panes gets 1.
pub fn apply_pane_counts(sessions: &mut [Session], counts: &HashMap<String, i64>) {
    for session in sessions {
        session.pane_count = counts.get(&session.name).copied().unwrap_or(1);
    }
}
