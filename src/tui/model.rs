use crate::domain::Session;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Overlay {
    ConfirmKill { name: String },
    RenameInput { current: String, buffer: String },
    NewSessionInput { buffer: String },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SessionAction {
    Attach(String),
    Create(Option<String>),
    Rename { current: String, new_name: String },
    Kill(String),
    Refresh,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AppEventResult {
    Continue,
    Quit,
}

/// Owns the last-known session list and all transient UI state. The list is
/// only replaced here, from the event loop, never shared.
#[derive(Clone, Debug)]
pub struct AppModel {
    sessions: Vec<Session>,
    selected: usize,
    overlay: Option<Overlay>,
    status_message: Option<String>,
    tmux_available: bool,
    pending_action: Option<SessionAction>,
}

impl AppModel {
    pub fn new(sessions: Vec<Session>, tmux_available: bool) -> Self {
        Self {
            sessions,
            selected: 0,
            overlay: None,
            status_message: None,
            tmux_available,
            pending_action: None,
        }
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.sessions.get(self.selected)
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn tmux_available(&self) -> bool {
        self.tmux_available
    }

    pub fn set_tmux_available(&mut self, available: bool) {
        self.tmux_available = available;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn take_pending_action(&mut self) -> Option<SessionAction> {
        self.pending_action.take()
    }

    /// Replaces the list only when it differs element-wise from the current
    /// one; an unchanged poll leaves the model (selection included) alone.
    pub fn apply_sessions(&mut self, sessions: Vec<Session>) -> bool {
        if sessions == self.sessions {
            return false;
        }
        self.replace_sessions(sessions);
        true
    }

    /// Manual-refresh path; bypasses the equality check.
    pub fn force_set_sessions(&mut self, sessions: Vec<Session>) {
        self.replace_sessions(sessions);
    }

    fn replace_sessions(&mut self, sessions: Vec<Session>) {
        let selected_name = self.selected_session().map(|session| session.name.clone());
        self.sessions = sessions;
        self.selected = selected_name
            .and_then(|name| self.sessions.iter().position(|session| session.name == name))
            .unwrap_or_else(|| self.selected.min(self.sessions.len().saturating_sub(1)));
    }

    pub(super) fn select_next(&mut self) {
        if !self.sessions.is_empty() {
            self.selected = (self.selected + 1).min(self.sessions.len() - 1);
        }
    }

    pub(super) fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn jump_to_first(&mut self) {
        self.selected = 0;
    }

    pub(super) fn jump_to_last(&mut self) {
        self.selected = self.sessions.len().saturating_sub(1);
    }

    pub(super) fn set_pending_action(&mut self, action: SessionAction) {
        self.pending_action = Some(action);
    }

    pub(super) fn open_confirm_kill(&mut self) {
        if let Some(session) = self.selected_session() {
            self.overlay = Some(Overlay::ConfirmKill {
                name: session.name.clone(),
            });
        }
    }

    pub(super) fn open_rename_input(&mut self) {
        if let Some(session) = self.selected_session() {
            self.overlay = Some(Overlay::RenameInput {
                current: session.name.clone(),
                buffer: session.name.clone(),
            });
        }
    }

    pub(super) fn open_new_session_input(&mut self) {
        self.overlay = Some(Overlay::NewSessionInput {
            buffer: String::new(),
        });
    }

    pub(super) fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub(super) fn restore_overlay(&mut self, overlay: Overlay) {
        self.overlay = Some(overlay);
    }

    /// Position-based quick attach for the 1-9 shortcut keys.
    pub(super) fn quick_attach(&mut self, index: usize) {
        if let Some(session) = self.sessions.get(index) {
            let name = session.name.clone();
            self.selected = index;
            self.set_pending_action(SessionAction::Attach(name));
        }
    }
}
