use std::io::{self, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::AppConfig;
use crate::tmux::{SystemTmuxAdapter, TmuxAdapter};

use super::render::render;
use super::{AppEventResult, AppModel, SessionAction};

pub(super) fn run_tui(socket: Option<String>, config: AppConfig) -> Result<(), String> {
    enable_raw_mode().map_err(|err| format!("failed to enable raw mode: {err}"))?;
    execute!(stdout(), EnterAlternateScreen)
        .map_err(|err| format!("failed to enter alternate screen: {err}"))?;
    let _guard = TerminalGuard;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|err| format!("failed to create terminal: {err}"))?;

    let adapter = SystemTmuxAdapter::from_config(socket, &config);
    let initial_sessions = match adapter.list_sessions() {
        Ok(sessions) => sessions,
        Err(_) => Vec::new(),
    };
    let mut model = AppModel::new(initial_sessions, adapter.tmux_available());

    let refresh_interval = Duration::from_millis(config.refresh_interval_ms());
    let ui_tick = Duration::from_millis(50);
    let mut last_refresh = Instant::now();

    loop {
        terminal
            .draw(|frame| render(frame, &model))
            .map_err(|err| format!("failed to draw frame: {err}"))?;

        let timeout = refresh_interval
            .saturating_sub(last_refresh.elapsed())
            .min(ui_tick);
        if event::poll(timeout).map_err(|err| format!("event poll failed: {err}"))?
            && let Event::Key(key) =
                event::read().map_err(|err| format!("event read failed: {err}"))?
        {
            if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                continue;
            }
            if model.handle_key(key) == AppEventResult::Quit {
                break;
            }
            if let Some(action) = model.take_pending_action() {
                dispatch_session_action(&adapter, &mut model, action);
                last_refresh = Instant::now();
            }
        }

        if last_refresh.elapsed() >= refresh_interval {
            refresh_sessions(&adapter, &mut model, false);
            last_refresh = Instant::now();
        }
    }

    Ok(())
}

/// Maps a user intent onto the adapter, then forces a refresh so the menu
/// reflects whatever actually happened; there is no other success check.
pub(super) fn dispatch_session_action<A: TmuxAdapter>(
    adapter: &A,
    model: &mut AppModel,
    action: SessionAction,
) {
    let result = match &action {
        SessionAction::Attach(name) => adapter
            .attach_session(name)
            .map(|_| format!("attaching {name}")),
        SessionAction::Create(name) => adapter
            .create_session(name.as_deref())
            .map(|_| "session created".to_string()),
        SessionAction::Rename { current, new_name } => adapter
            .rename_session(current, new_name)
            .map(|_| format!("renamed {current} to {new_name}")),
        SessionAction::Kill(name) => adapter
            .kill_session(name)
            .map(|_| format!("killed {name}")),
        SessionAction::Refresh => Ok("refreshed".to_string()),
    };
    match result {
        Ok(message) => model.set_status_message(message),
        Err(err) => {
            model.set_status_message(err);
            return;
        }
    }
    refresh_sessions(adapter, model, true);
}

fn refresh_sessions<A: TmuxAdapter>(adapter: &A, model: &mut AppModel, force: bool) {
    match adapter.list_sessions() {
        Ok(sessions) => {
            if force {
                model.force_set_sessions(sessions);
            } else {
                model.apply_sessions(sessions);
            }
        }
        Err(err) => model.set_status_message(format!("refresh error: {err}")),
    }
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}
