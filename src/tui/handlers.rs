// File: src/tui/handlers.rs
use crate::screen::ViewStatus;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::AppState;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Status(s) => state.message = s,
        AppEvent::CharactersLoaded(ticket, result) => {
            if !state.list.complete_refresh(ticket, result) {
                return;
            }
            state.clamp_selection();
            state.message = match state.list.status() {
                ViewStatus::Success(chars) => format!("{} characters.", chars.len()),
                ViewStatus::Error(_) => "Refresh failed. Press r to retry.".to_string(),
                ViewStatus::Loading => "Loading...".to_string(),
            };
        }
        AppEvent::EpisodesLoaded(id, titles) => {
            // The detail screen may already be gone, or showing someone else.
            if let Some(detail) = state.detail.as_mut() {
                detail.finish_loading(id, titles);
            }
        }
    }
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if state.in_detail() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                state.close_detail();
                state.message = "Back.".to_string();
            }
            KeyCode::Down | KeyCode::Char('j') => state.next(),
            KeyCode::Up | KeyCode::Char('k') => state.previous(),
            KeyCode::Char('q') => return Some(Action::Quit),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Down | KeyCode::Char('j') => state.next(),
        KeyCode::Up | KeyCode::Char('k') => state.previous(),
        KeyCode::PageDown => state.jump_forward(10),
        KeyCode::PageUp => state.jump_backward(10),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => {
            if state.open_selected() {
                return Some(Action::LoadEpisodes);
            }
        }
        KeyCode::Char('r') => {
            let ticket = state.list.begin_refresh();
            state.message = "Refreshing...".to_string();
            return Some(Action::Refresh(ticket));
        }
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::character;
    use crate::error::ApiError;
    use crate::screen::EpisodeTitles;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        let ticket = state.list.begin_refresh();
        handle_app_event(
            &mut state,
            AppEvent::CharactersLoaded(
                ticket,
                Ok(vec![
                    character(1, "Rick Sanchez", "Male", &["e/1"]),
                    character(2, "Morty Smith", "Male", &["e/1", "e/2"]),
                ]),
            ),
        );
        state
    }

    #[test]
    fn test_characters_loaded_sets_message() {
        let state = loaded_state();
        assert_eq!(state.message, "2 characters.");
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_refresh_key_goes_loading() {
        let mut state = loaded_state();
        let action = handle_key_event(press(KeyCode::Char('r')), &mut state);
        assert!(matches!(action, Some(Action::Refresh(_))));
        assert!(state.list.is_loading());
        assert!(state.get_selected_character().is_none());
    }

    #[test]
    fn test_refresh_failure_shows_error() {
        let mut state = loaded_state();
        let Some(Action::Refresh(ticket)) = handle_key_event(press(KeyCode::Char('r')), &mut state)
        else {
            panic!("expected a refresh");
        };
        handle_app_event(
            &mut state,
            AppEvent::CharactersLoaded(ticket, Err(ApiError::Transport("offline".to_string()))),
        );
        assert_eq!(
            state.list.status(),
            &ViewStatus::Error("Network error: offline".to_string())
        );
    }

    #[test]
    fn test_stale_refresh_ignored() {
        let mut state = loaded_state();
        let Some(Action::Refresh(old)) = handle_key_event(press(KeyCode::Char('r')), &mut state)
        else {
            panic!("expected a refresh");
        };
        let _ = handle_key_event(press(KeyCode::Char('r')), &mut state);

        handle_app_event(&mut state, AppEvent::CharactersLoaded(old, Ok(vec![])));
        assert!(state.list.is_loading());
        assert_eq!(state.message, "Refreshing...");
    }

    #[test]
    fn test_enter_opens_detail_and_esc_returns() {
        let mut state = loaded_state();
        state.next();
        let action = handle_key_event(press(KeyCode::Enter), &mut state);
        assert_eq!(action, Some(Action::LoadEpisodes));
        assert_eq!(state.detail.as_ref().map(|d| d.title()), Some("Morty Smith"));

        handle_app_event(
            &mut state,
            AppEvent::EpisodesLoaded(2, vec!["Pilot".to_string()]),
        );
        assert_eq!(
            state.detail.as_ref().map(|d| d.episodes().clone()),
            Some(EpisodeTitles::Loaded(vec!["Pilot".to_string()]))
        );

        assert_eq!(handle_key_event(press(KeyCode::Esc), &mut state), None);
        assert!(!state.in_detail());
        // Selection survives the round trip.
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_late_episodes_after_back_are_dropped() {
        let mut state = loaded_state();
        handle_key_event(press(KeyCode::Enter), &mut state);
        handle_key_event(press(KeyCode::Esc), &mut state);
        handle_app_event(&mut state, AppEvent::EpisodesLoaded(1, vec!["Pilot".into()]));
        assert!(state.detail.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut state = loaded_state();
        assert_eq!(
            handle_key_event(press(KeyCode::Char('q')), &mut state),
            Some(Action::Quit)
        );
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &mut state
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut state = AppState::new();
        assert_eq!(handle_key_event(press(KeyCode::Enter), &mut state), None);
        assert!(!state.in_detail());
    }
}
