use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tmux::is_valid_session_name;

use super::{AppEventResult, AppModel, Overlay, SessionAction};

impl AppModel {
    pub fn handle_key(&mut self, key: KeyEvent) -> AppEventResult {
        if self.is_overlay_open() {
            self.handle_overlay_key(key);
            return AppEventResult::Continue;
        }

        match key.code {
            KeyCode::Char('q') => return AppEventResult::Quit,
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('g') | KeyCode::Home => self.jump_to_first(),
            KeyCode::Char('G') | KeyCode::End => self.jump_to_last(),
            KeyCode::Enter | KeyCode::Char('a') => {
                if let Some(session) = self.selected_session() {
                    let name = session.name.clone();
                    self.set_pending_action(SessionAction::Attach(name));
                }
            }
            KeyCode::Char('n') => self.open_new_session_input(),
            KeyCode::Char('r') => self.open_rename_input(),
            KeyCode::Char('x') | KeyCode::Delete => self.open_confirm_kill(),
            KeyCode::Char('R') => self.set_pending_action(SessionAction::Refresh),
            KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                let index = c.to_digit(10).unwrap_or(1) as usize - 1;
                self.quick_attach(index);
            }
            _ => {}
        }
        AppEventResult::Continue
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) {
        let Some(overlay) = self.take_overlay() else {
            return;
        };
        match overlay {
            Overlay::ConfirmKill { name } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.set_pending_action(SessionAction::Kill(name));
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {}
                _ => self.restore_overlay(Overlay::ConfirmKill { name }),
            },
            Overlay::RenameInput { current, buffer } => {
                self.handle_rename_input_key(key, current, buffer)
            }
            Overlay::NewSessionInput { buffer } => self.handle_new_session_input_key(key, buffer),
        }
    }

    fn handle_rename_input_key(&mut self, key: KeyEvent, current: String, mut buffer: String) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                let new_name = buffer.trim().to_string();
                if new_name.is_empty() || new_name == current {
                    return;
                }
                if !is_valid_session_name(&new_name) {
                    self.set_status_message(format!("invalid name: {}", crate::cli::name_rules()));
                    self.restore_overlay(Overlay::RenameInput { current, buffer });
                    return;
                }
                self.clear_status_message();
                self.set_pending_action(SessionAction::Rename { current, new_name });
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.restore_overlay(Overlay::RenameInput { current, buffer });
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) => {
                buffer.push(c);
                self.restore_overlay(Overlay::RenameInput { current, buffer });
            }
            _ => self.restore_overlay(Overlay::RenameInput { current, buffer }),
        }
    }

    fn handle_new_session_input_key(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                let name = buffer.trim().to_string();
                if name.is_empty() {
                    self.set_pending_action(SessionAction::Create(None));
                    return;
                }
                if !is_valid_session_name(&name) {
                    self.set_status_message(format!("invalid name: {}", crate::cli::name_rules()));
                    self.restore_overlay(Overlay::NewSessionInput { buffer });
                    return;
                }
                self.clear_status_message();
                self.set_pending_action(SessionAction::Create(Some(name)));
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.restore_overlay(Overlay::NewSessionInput { buffer });
            }
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) => {
                buffer.push(c);
                self.restore_overlay(Overlay::NewSessionInput { buffer });
            }
            _ => self.restore_overlay(Overlay::NewSessionInput { buffer }),
        }
    }

    fn take_overlay(&mut self) -> Option<Overlay> {
        let overlay = self.overlay().cloned();
        self.close_overlay();
        overlay
    }
}
