// File: src/tui/state.rs
use crate::model::Character;
use crate::screen::{DetailScreen, ListScreen};
use ratatui::widgets::ListState;

pub struct AppState {
    // Screens
    pub list: ListScreen,
    pub detail: Option<DetailScreen>,

    // UI State
    pub list_state: ListState,
    pub detail_scroll: u16,
    pub message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut l_state = ListState::default();
        l_state.select(Some(0));

        Self {
            list: ListScreen::new(),
            detail: None,
            list_state: l_state,
            detail_scroll: 0,
            message: "Loading...".to_string(),
        }
    }

    pub fn in_detail(&self) -> bool {
        self.detail.is_some()
    }

    /// Keeps the row selection inside the current list after it changed.
    pub fn clamp_selection(&mut self) {
        let len = self.list.characters().len();
        if len == 0 {
            self.list_state.select(None);
        } else {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.min(len - 1)));
        }
    }

    pub fn get_selected_character(&self) -> Option<&Character> {
        self.list_state
            .selected()
            .and_then(|idx| self.list.characters().get(idx))
    }

    // --- NAVIGATION ---
    pub fn next(&mut self) {
        if self.in_detail() {
            self.detail_scroll = self.detail_scroll.saturating_add(1);
            return;
        }
        let len = self.list.characters().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= len - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        if self.in_detail() {
            self.detail_scroll = self.detail_scroll.saturating_sub(1);
            return;
        }
        let len = self.list.characters().len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn jump_forward(&mut self, step: usize) {
        let len = self.list.characters().len();
        if !self.in_detail() && len > 0 {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some((current + step).min(len - 1)));
        }
    }

    pub fn jump_backward(&mut self, step: usize) {
        if !self.in_detail() && !self.list.characters().is_empty() {
            let current = self.list_state.selected().unwrap_or(0);
            self.list_state.select(Some(current.saturating_sub(step)));
        }
    }

    /// Pushes a detail screen for the selected row. Returns `false` if nothing is selected.
    pub fn open_selected(&mut self) -> bool {
        match self.get_selected_character().cloned() {
            Some(character) => {
                self.detail = Some(DetailScreen::new(character));
                self.detail_scroll = 0;
                true
            }
            None => false,
        }
    }

    /// Back to the list. Dropping the detail screen cancels its pending fetches.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.detail_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::character;

    fn loaded_state(n: u32) -> AppState {
        let mut state = AppState::new();
        let ticket = state.list.begin_refresh();
        let chars = (1..=n)
            .map(|i| character(i, &format!("Character {i}"), "Male", &[]))
            .collect();
        state.list.complete_refresh(ticket, Ok(chars));
        state.clamp_selection();
        state
    }

    #[test]
    fn test_navigation_next_wraps() {
        let mut state = loaded_state(3);
        state.list_state.select(Some(0));

        state.next();
        assert_eq!(state.list_state.selected(), Some(1));
        state.next();
        assert_eq!(state.list_state.selected(), Some(2));
        state.next(); // Wrap to 0
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_navigation_previous_wraps() {
        let mut state = loaded_state(3);
        state.list_state.select(Some(0));

        state.previous(); // Wrap to last
        assert_eq!(state.list_state.selected(), Some(2));
        state.previous();
        assert_eq!(state.list_state.selected(), Some(1));
    }

    #[test]
    fn test_navigation_while_loading_is_safe() {
        let mut state = AppState::new();
        state.next();
        state.previous();
        state.jump_forward(10);
        assert!(state.get_selected_character().is_none());
        assert!(!state.open_selected());
    }

    #[test]
    fn test_jumps_clamp() {
        let mut state = loaded_state(5);
        state.jump_forward(10);
        assert_eq!(state.list_state.selected(), Some(4));
        state.jump_backward(10);
        assert_eq!(state.list_state.selected(), Some(0));
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut state = loaded_state(3);
        state.list_state.select(Some(1));
        assert!(state.open_selected());
        assert_eq!(state.detail.as_ref().map(|d| d.title()), Some("Character 2"));

        // Scrolling applies to the detail view, not the list.
        state.next();
        assert_eq!(state.detail_scroll, 1);
        assert_eq!(state.list_state.selected(), Some(1));

        state.close_detail();
        assert!(!state.in_detail());
        assert_eq!(state.detail_scroll, 0);
    }

    #[test]
    fn test_clamp_after_shorter_list() {
        let mut state = loaded_state(5);
        state.list_state.select(Some(4));

        let ticket = state.list.begin_refresh();
        state.clamp_selection();
        assert_eq!(state.list_state.selected(), None);

        state
            .list
            .complete_refresh(ticket, Ok(vec![character(1, "Rick Sanchez", "Male", &[])]));
        state.clamp_selection();
        assert_eq!(state.list_state.selected(), Some(0));
    }
}
