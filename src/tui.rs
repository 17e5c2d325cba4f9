use crate::config::AppConfig;
use crate::tmux::TmuxAdapter;

mod key_handling;
mod model;
mod render;
mod render_helpers;
mod runtime_loop;

pub use model::{AppEventResult, AppModel, Overlay, SessionAction};

pub fn run_tui(socket: Option<String>, config: AppConfig) -> Result<(), String> {
    runtime_loop::run_tui(socket, config)
}

/// Sends a pending user action through the adapter and forces a refresh.
/// Exposed so tests can drive dispatch with a fake adapter.
pub fn dispatch_session_action<A: TmuxAdapter>(
    adapter: &A,
    model: &mut AppModel,
    action: SessionAction,
) {
    runtime_loop::dispatch_session_action(adapter, model, action)
}

pub fn render_to_string(model: &AppModel, width: u16, height: u16) -> String {
    render::render_to_string(model, width, height)
}
