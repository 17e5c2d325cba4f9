use std::cell::RefCell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use muxmenu::domain::Session;
use muxmenu::tmux::TmuxAdapter;
use muxmenu::tui::{
    AppEventResult, AppModel, Overlay, SessionAction, dispatch_session_action, render_to_string,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn session(name: &str, pane_count: i64, attached: bool) -> Session {
    Session {
        name: name.to_string(),
        pane_count,
        attached,
        created_at: "1708770000".to_string(),
    }
}

fn three_sessions() -> Vec<Session> {
    vec![
        session("alpha", 1, false),
        session("beta", 3, true),
        session("gamma", 2, false),
    ]
}

#[derive(Default)]
struct RecordingAdapter {
    calls: RefCell<Vec<String>>,
    listing: Vec<Session>,
}

impl TmuxAdapter for RecordingAdapter {
    fn list_sessions(&self) -> Result<Vec<Session>, String> {
        self.calls.borrow_mut().push("list".to_string());
        Ok(self.listing.clone())
    }

    fn create_session(&self, name: Option<&str>) -> Result<(), String> {
        self.calls
            .borrow_mut()
            .push(format!("create:{}", name.unwrap_or("-")));
        Ok(())
    }

    fn rename_session(&self, current: &str, new_name: &str) -> Result<(), String> {
        self.calls
            .borrow_mut()
            .push(format!("rename:{current}:{new_name}"));
        Ok(())
    }

    fn kill_session(&self, name: &str) -> Result<(), String> {
        self.calls.borrow_mut().push(format!("kill:{name}"));
        Ok(())
    }

    fn attach_session(&self, name: &str) -> Result<(), String> {
        self.calls.borrow_mut().push(format!("attach:{name}"));
        Ok(())
    }
}

#[test]
fn navigation_keys_move_selection_within_bounds() {
    let mut model = AppModel::new(three_sessions(), true);
    assert_eq!(model.selected_index(), 0);

    assert_eq!(model.handle_key(key(KeyCode::Char('j'))), AppEventResult::Continue);
    assert_eq!(model.selected_index(), 1);

    model.handle_key(key(KeyCode::Char('G')));
    assert_eq!(model.selected_index(), 2);

    model.handle_key(key(KeyCode::Char('j')));
    assert_eq!(model.selected_index(), 2, "selection should clamp at the end");

    model.handle_key(key(KeyCode::Char('g')));
    assert_eq!(model.selected_index(), 0);

    model.handle_key(key(KeyCode::Char('k')));
    assert_eq!(model.selected_index(), 0, "selection should clamp at the start");
}

#[test]
fn unchanged_poll_leaves_the_model_untouched() {
    let mut model = AppModel::new(three_sessions(), true);
    model.handle_key(key(KeyCode::Char('j')));

    assert!(!model.apply_sessions(three_sessions()));
    assert_eq!(model.selected_index(), 1);
}

#[test]
fn any_field_or_membership_change_updates_the_model() {
    let mut changed_count = three_sessions();
    changed_count[0].pane_count = 5;
    assert!(AppModel::new(three_sessions(), true).apply_sessions(changed_count));

    let mut changed_attached = three_sessions();
    changed_attached[2].attached = true;
    assert!(AppModel::new(three_sessions(), true).apply_sessions(changed_attached));

    let mut changed_name = three_sessions();
    changed_name[1].name = "beta2".to_string();
    assert!(AppModel::new(three_sessions(), true).apply_sessions(changed_name));

    let mut shrunk = three_sessions();
    shrunk.pop();
    assert!(AppModel::new(three_sessions(), true).apply_sessions(shrunk));
}

#[test]
fn selection_follows_the_session_name_across_updates() {
    let mut model = AppModel::new(three_sessions(), true);
    model.handle_key(key(KeyCode::Char('G')));
    assert_eq!(model.selected_session().map(|s| s.name.as_str()), Some("gamma"));

    // alpha disappears; gamma shifts position but stays selected.
    let updated = vec![session("beta", 3, true), session("gamma", 2, false)];
    assert!(model.apply_sessions(updated));
    assert_eq!(model.selected_session().map(|s| s.name.as_str()), Some("gamma"));
}

#[test]
fn force_set_sessions_bypasses_the_equality_gate() {
    let mut model = AppModel::new(three_sessions(), true);
    assert!(!model.apply_sessions(three_sessions()));
    model.force_set_sessions(three_sessions());
    assert_eq!(model.sessions().len(), 3);
}

#[test]
fn kill_requires_confirmation_before_producing_an_action() {
    let mut model = AppModel::new(three_sessions(), true);
    model.handle_key(key(KeyCode::Char('j')));
    model.handle_key(key(KeyCode::Char('x')));
    assert!(matches!(
        model.overlay(),
        Some(Overlay::ConfirmKill { name }) if name == "beta"
    ));
    assert_eq!(model.take_pending_action(), None);

    model.handle_key(key(KeyCode::Char('y')));
    assert_eq!(
        model.take_pending_action(),
        Some(SessionAction::Kill("beta".to_string()))
    );
    assert!(model.overlay().is_none());
}

#[test]
fn kill_confirmation_can_be_declined() {
    let mut model = AppModel::new(three_sessions(), true);
    model.handle_key(key(KeyCode::Char('x')));
    model.handle_key(key(KeyCode::Esc));
    assert!(model.overlay().is_none());
    assert_eq!(model.take_pending_action(), None);
}

#[test]
fn rename_input_revalidates_against_the_allow_list() {
    let mut model = AppModel::new(three_sessions(), true);
    model.handle_key(key(KeyCode::Char('r')));
    assert!(matches!(
        model.overlay(),
        Some(Overlay::RenameInput { current, buffer })
            if current == "alpha" && buffer == "alpha"
    ));

    model.handle_key(key(KeyCode::Char('.')));
    model.handle_key(key(KeyCode::Enter));
    assert!(model.overlay().is_some(), "invalid name should keep the input open");
    assert!(model.status_message().is_some_and(|m| m.contains("invalid name")));
    assert_eq!(model.take_pending_action(), None);

    model.handle_key(key(KeyCode::Backspace));
    model.handle_key(key(KeyCode::Char('2')));
    model.handle_key(key(KeyCode::Enter));
    assert!(model.overlay().is_none());
    assert_eq!(
        model.take_pending_action(),
        Some(SessionAction::Rename {
            current: "alpha".to_string(),
            new_name: "alpha2".to_string(),
        })
    );
    assert!(model.overlay().is_none());
}

#[test]
fn new_session_input_allows_an_empty_name() {
    let mut model = AppModel::new(Vec::new(), true);
    model.handle_key(key(KeyCode::Char('n')));
    model.handle_key(key(KeyCode::Enter));
    assert_eq!(model.take_pending_action(), Some(SessionAction::Create(None)));

    model.handle_key(key(KeyCode::Char('n')));
    for c in "work".chars() {
        model.handle_key(key(KeyCode::Char(c)));
    }
    model.handle_key(key(KeyCode::Enter));
    assert_eq!(
        model.take_pending_action(),
        Some(SessionAction::Create(Some("work".to_string())))
    );
}

#[test]
fn enter_and_digits_attach_by_selection_and_position() {
    let mut model = AppModel::new(three_sessions(), true);
    model.handle_key(key(KeyCode::Enter));
    assert_eq!(
        model.take_pending_action(),
        Some(SessionAction::Attach("alpha".to_string()))
    );

    model.handle_key(key(KeyCode::Char('3')));
    assert_eq!(model.selected_index(), 2);
    assert_eq!(
        model.take_pending_action(),
        Some(SessionAction::Attach("gamma".to_string()))
    );

    // Out-of-range quick key is a no-op.
    model.handle_key(key(KeyCode::Char('9')));
    assert_eq!(model.take_pending_action(), None);
}

#[test]
fn dispatch_runs_the_adapter_call_and_forces_a_refresh() {
    let adapter = RecordingAdapter {
        listing: vec![session("alpha", 1, false)],
        ..RecordingAdapter::default()
    };
    let mut model = AppModel::new(three_sessions(), true);

    dispatch_session_action(&adapter, &mut model, SessionAction::Kill("beta".to_string()));

    let calls = adapter.calls.borrow();
    assert_eq!(*calls, vec!["kill:beta".to_string(), "list".to_string()]);
    drop(calls);
    assert_eq!(model.sessions().len(), 1, "forced refresh should replace the list");
    assert!(model.status_message().is_some_and(|m| m.contains("killed beta")));

    dispatch_session_action(
        &adapter,
        &mut model,
        SessionAction::Attach("alpha".to_string()),
    );
    assert!(
        adapter
            .calls
            .borrow()
            .iter()
            .any(|call| call == "attach:alpha")
    );
}

#[test]
fn render_shows_sessions_placeholders_and_overlays() {
    let populated = AppModel::new(three_sessions(), true);
    let surface = render_to_string(&populated, 80, 16);
    assert!(surface.contains("Tmux Sessions"));
    assert!(surface.contains("beta"));
    assert!(surface.contains("3 panes"));
    assert!(surface.contains("attach"));

    let empty = AppModel::new(Vec::new(), true);
    assert!(render_to_string(&empty, 80, 16).contains("No sessions running"));

    let no_tmux = AppModel::new(Vec::new(), false);
    assert!(render_to_string(&no_tmux, 80, 16).contains("tmux not found"));

    let mut confirming = AppModel::new(three_sessions(), true);
    confirming.handle_key(key(KeyCode::Char('x')));
    let overlay_surface = render_to_string(&confirming, 80, 16);
    assert!(overlay_surface.contains("Kill Session"));
    assert!(overlay_surface.contains("alpha"));
}
