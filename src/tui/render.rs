use ratatui::backend::TestBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use super::render_helpers::{
    build_app_bar_text, centered_rect, detail_lines, overlay_title_and_lines, placeholder_line,
    session_line, shortcut_hints,
};
use super::AppModel;

pub(super) fn render_to_string(model: &AppModel, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal should construct");
    terminal
        .draw(|frame| render(frame, model))
        .expect("test draw should succeed");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect::<Vec<_>>()
        .join("")
}

pub(super) fn render(frame: &mut Frame<'_>, model: &AppModel) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());
    let body = root[0];
    let status_bar = root[1];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);

    render_sessions_pane(frame, model, columns[0]);
    render_details_pane(frame, model, columns[1]);
    render_status_bar(frame, model, status_bar);

    if let Some(overlay) = model.overlay() {
        let (title, lines) = overlay_title_and_lines(overlay);
        let area = centered_rect(frame.area(), 48, lines.len() as u16 + 2);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(Text::from(lines)), inner);
    }
}

fn render_sessions_pane(frame: &mut Frame<'_>, model: &AppModel, area: Rect) {
    let block = Block::default()
        .title(" Tmux Sessions ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if model.sessions().is_empty() {
        frame.render_widget(Paragraph::new(placeholder_line(model)), inner);
        return;
    }

    let items: Vec<ListItem<'_>> = model
        .sessions()
        .iter()
        .enumerate()
        .map(|(position, session)| ListItem::new(session_line(session, position)))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(35, 60, 35))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default();
    list_state.select(Some(model.selected_index()));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

fn render_details_pane(frame: &mut Frame<'_>, model: &AppModel, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let details = match model.selected_session() {
        Some(session) => Text::from(detail_lines(session)),
        None => Text::from("No session selected"),
    };
    frame.render_widget(Paragraph::new(details), inner);
}

fn render_status_bar(frame: &mut Frame<'_>, model: &AppModel, area: Rect) {
    let app_bar_text = build_app_bar_text(model);
    let shortcuts = shortcut_hints(model);
    let shortcuts_width = shortcuts.len().min(u16::MAX as usize) as u16;
    let status_style = Style::default().fg(Color::Black).bg(Color::Green);

    if area.width > shortcuts_width + 1 {
        let bar_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(shortcuts_width)])
            .split(area);
        frame.render_widget(
            Paragraph::new(app_bar_text).style(status_style),
            bar_chunks[0],
        );
        frame.render_widget(Paragraph::new(shortcuts).style(status_style), bar_chunks[1]);
    } else {
        frame.render_widget(Paragraph::new(shortcuts).style(status_style), area);
    }
}
