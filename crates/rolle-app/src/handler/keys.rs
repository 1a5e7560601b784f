//! Keyboard input handling
//!
//! Keys act on the focused panel. Tab-bar and activation keys write tokens
//! through that panel's cursor; the returned [`NavAction`] tells the engine
//! whether anything actually changed. Selection and focus movement are
//! purely local and never touch the token sequence.

use tracing::debug;

use crate::handler::NavAction;
use crate::input_key::InputKey;
use crate::panel::Panel;
use crate::state::AppState;
use crate::tabs::TabView;

/// Handle one key against the current state.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<NavAction> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => {
            debug!("quit requested");
            state.should_quit = true;
            None
        }

        InputKey::Char('b') => Some(NavAction::Back),
        InputKey::Char('f') => Some(NavAction::Forward),

        InputKey::Tab => {
            state.focus_next();
            None
        }
        InputKey::BackTab => {
            state.focus_previous();
            None
        }

        InputKey::Left => select_tab(state, -1),
        InputKey::Right => select_tab(state, 1),

        InputKey::Up => {
            move_selection(state, -1);
            None
        }
        InputKey::Down => {
            move_selection(state, 1);
            None
        }

        InputKey::Enter => {
            let tabs = state.focused_panel().tabs()?;
            tabs.activate_selected().then_some(NavAction::Push)
        }

        _ => None,
    }
}

/// Move the focused panel's active tab by `delta` through its cursor.
fn select_tab(state: &mut AppState, delta: i64) -> Option<NavAction> {
    let tabs = state.focused_panel().tabs()?;
    let target = tabs.active() as i64 + delta;
    if target < 0 {
        return None;
    }
    tabs.select(target as usize).then_some(NavAction::Push)
}

/// Move the focused panel's list selection by `delta`. Local only.
fn move_selection(state: &mut AppState, delta: i64) {
    let Some(list) = state
        .focused_panel_mut()
        .and_then(Panel::tabs_mut)
        .and_then(TabView::list_mut)
    else {
        return;
    };
    if delta < 0 {
        list.select_previous();
    } else {
        list.select_next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctx::UpdateCtx;
    use crate::generators;
    use crate::history::History;
    use rolle_api::{ApiClient, NameId};
    use rolle_core::{Location, TokenStore};
    use tokio::sync::mpsc;

    fn state_for(location: &str) -> AppState {
        let api = ApiClient::from_base_url("http://127.0.0.1:1/").unwrap();
        let (tx, _rx) = mpsc::channel(64);
        let ctx = UpdateCtx::new(api, tx);
        let location = Location::new(location);
        let store = TokenStore::from_location(&location);
        let root = generators::root(store.cursor(), &ctx).unwrap();
        AppState::new(History::new(location), store, root)
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let mut state = state_for("/");
        assert_eq!(handle_key(&mut state, InputKey::Char('q')), None);
        assert!(state.should_quit);

        let mut state = state_for("/");
        handle_key(&mut state, InputKey::CharCtrl('c'));
        assert!(state.should_quit);
    }

    #[tokio::test]
    async fn test_history_keys() {
        let mut state = state_for("/");
        assert_eq!(
            handle_key(&mut state, InputKey::Char('b')),
            Some(NavAction::Back)
        );
        assert_eq!(
            handle_key(&mut state, InputKey::Char('f')),
            Some(NavAction::Forward)
        );
    }

    #[tokio::test]
    async fn test_tab_keys_write_through_cursor() {
        let mut state = state_for("/?state=0");
        assert_eq!(
            handle_key(&mut state, InputKey::Right),
            Some(NavAction::Push)
        );
        assert_eq!(state.store.tokens(), vec!["1"]);

        // Left at the leftmost tab is inert, no push
        let mut state = state_for("/?state=0");
        assert_eq!(handle_key(&mut state, InputKey::Left), None);
        assert_eq!(state.store.tokens(), vec!["0"]);
    }

    #[tokio::test]
    async fn test_selection_keys_are_local() {
        let mut state = state_for("/?state=0");
        state
            .root
            .tabs_mut()
            .unwrap()
            .list_mut()
            .unwrap()
            .load(vec![
                NameId {
                    id: 1,
                    name: "Alice".into(),
                },
                NameId {
                    id: 2,
                    name: "Bob".into(),
                },
            ]);

        assert_eq!(handle_key(&mut state, InputKey::Down), None);
        assert_eq!(state.root.tabs().unwrap().list().unwrap().selected, 1);
        assert_eq!(state.store.tokens(), vec!["0"]);

        handle_key(&mut state, InputKey::Up);
        assert_eq!(state.root.tabs().unwrap().list().unwrap().selected, 0);
    }

    #[tokio::test]
    async fn test_enter_activates_selected_row() {
        let mut state = state_for("/?state=0");
        state
            .root
            .tabs_mut()
            .unwrap()
            .list_mut()
            .unwrap()
            .load(vec![NameId {
                id: 7,
                name: "Alice".into(),
            }]);

        assert_eq!(
            handle_key(&mut state, InputKey::Enter),
            Some(NavAction::Push)
        );
        assert_eq!(state.store.tokens(), vec!["0", "character7"]);
    }

    #[tokio::test]
    async fn test_enter_before_load_is_inert() {
        let mut state = state_for("/?state=0");
        assert_eq!(handle_key(&mut state, InputKey::Enter), None);
        assert_eq!(state.store.tokens(), vec!["0"]);
    }

    #[tokio::test]
    async fn test_focus_keys_clamp_to_chain() {
        let mut state = state_for("/?state=0,place5");
        assert_eq!(state.root.chain_len(), 2);

        handle_key(&mut state, InputKey::Tab);
        assert_eq!(state.focus, 1);
        handle_key(&mut state, InputKey::Tab);
        assert_eq!(state.focus, 1);
        handle_key(&mut state, InputKey::BackTab);
        assert_eq!(state.focus, 0);
        handle_key(&mut state, InputKey::BackTab);
        assert_eq!(state.focus, 0);
    }

    #[tokio::test]
    async fn test_tab_keys_on_character_panel_are_inert() {
        let mut state = state_for("/?state=0,character7");
        state.focus = 1;
        assert_eq!(handle_key(&mut state, InputKey::Right), None);
        assert_eq!(state.store.tokens(), vec!["0", "character7"]);
    }
}
