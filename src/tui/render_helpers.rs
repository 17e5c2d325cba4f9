use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::domain::{Session, format_created_timestamp};

use super::{AppModel, Overlay};

pub(super) fn session_line(session: &Session, position: usize) -> Line<'static> {
    let dot_style = if session.attached {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let shortcut = if position < 9 {
        format!("{} ", position + 1)
    } else {
        "  ".to_string()
    };
    Line::from(vec![
        Span::styled(shortcut, Style::default().fg(Color::DarkGray)),
        Span::styled("● ", dot_style),
        Span::raw(format!(
            "{}  ({} pane{})",
            session.name,
            session.pane_count,
            if session.pane_count == 1 { "" } else { "s" }
        )),
    ])
}

pub(super) fn placeholder_line(model: &AppModel) -> Line<'static> {
    let text = if model.tmux_available() {
        "No sessions running"
    } else {
        "tmux not found"
    };
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

pub(super) fn detail_lines(session: &Session) -> Vec<Line<'static>> {
    let label_style = Style::default().fg(Color::DarkGray);
    vec![
        Line::from(vec![
            Span::styled("name      ", label_style),
            Span::styled(
                session.name.clone(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("panes     ", label_style),
            Span::raw(session.pane_count.to_string()),
        ]),
        Line::from(vec![
            Span::styled("attached  ", label_style),
            if session.attached {
                Span::styled("yes", Style::default().fg(Color::Green))
            } else {
                Span::raw("no")
            },
        ]),
        Line::from(vec![
            Span::styled("created   ", label_style),
            Span::raw(format_created_timestamp(&session.created_at)),
        ]),
    ]
}

pub(super) fn build_app_bar_text(model: &AppModel) -> String {
    let selected = model
        .selected_session()
        .map(Session::display_title)
        .unwrap_or_else(|| "none".to_string());
    let mut text = format!(
        " muxmenu  |  sessions: {}  |  selected: {} ",
        model.sessions().len(),
        selected
    );
    if let Some(message) = model.status_message() {
        text.push_str("| ");
        text.push_str(message);
        text.push(' ');
    }
    text
}

pub(super) fn shortcut_hints(model: &AppModel) -> &'static str {
    match model.overlay() {
        Some(Overlay::ConfirmKill { .. }) => "[y] kill  [n/esc] cancel",
        Some(Overlay::RenameInput { .. }) | Some(Overlay::NewSessionInput { .. }) => {
            "[enter] submit  [backspace] edit  [esc] cancel"
        }
        None => "[j/k] move  [enter/a] attach  [n] new  [r] rename  [x] kill  [R] refresh  [q] quit",
    }
}

pub(super) fn overlay_title_and_lines(overlay: &Overlay) -> (&'static str, Vec<Line<'static>>) {
    match overlay {
        Overlay::ConfirmKill { name } => (
            " Kill Session ",
            vec![
                Line::from(format!("Kill session '{name}'?")),
                Line::from(Span::styled(
                    "This cannot be undone.",
                    Style::default().fg(Color::Red),
                )),
            ],
        ),
        Overlay::RenameInput { current, buffer } => (
            " Rename Session ",
            vec![
                Line::from(format!("New name for session '{current}':")),
                input_line(buffer),
            ],
        ),
        Overlay::NewSessionInput { buffer } => (
            " New Session ",
            vec![
                Line::from("Name (leave empty for an unnamed session):"),
                input_line(buffer),
            ],
        ),
    }
}

fn input_line(buffer: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            buffer.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("▏", Style::default().fg(Color::Green)),
    ])
}

pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}
