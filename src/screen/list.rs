// File: src/screen/list.rs
use crate::client::CatalogApi;
use crate::error::ApiError;
use crate::model::Character;

pub const LIST_TITLE: &str = "Characters";

/// What the list screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus {
    Loading,
    Error(String),
    Success(Vec<Character>),
}

/// Identifies one refresh. Only the newest ticket may complete a refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

#[derive(Debug)]
pub struct ListScreen {
    status: ViewStatus,
    generation: u64,
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            status: ViewStatus::Loading,
            generation: 0,
        }
    }

    pub fn status(&self) -> &ViewStatus {
        &self.status
    }

    /// Characters on screen; empty unless the last refresh succeeded.
    pub fn characters(&self) -> &[Character] {
        match &self.status {
            ViewStatus::Success(chars) => chars,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    /// Switches to `Loading` and hands out the ticket the fetch must report back with.
    /// Any earlier ticket becomes stale.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.generation += 1;
        self.status = ViewStatus::Loading;
        RefreshTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` (and changes nothing) if a newer
    /// refresh has started since `ticket` was issued.
    pub fn complete_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Character>, ApiError>,
    ) -> bool {
        if ticket.0 != self.generation {
            log::debug!(
                "Dropping stale character list (refresh {} superseded by {})",
                ticket.0,
                self.generation
            );
            return false;
        }

        self.status = match result {
            Ok(characters) => {
                log::debug!("Received {} characters", characters.len());
                ViewStatus::Success(characters)
            }
            Err(e) => {
                log::error!("Error fetching characters: {}", e);
                ViewStatus::Error(e.to_string())
            }
        };
        true
    }

    /// Begin, fetch and complete in one go.
    pub async fn refresh<A: CatalogApi>(&mut self, api: &A) {
        let ticket = self.begin_refresh();
        let result = api.get_all_characters().await;
        self.complete_refresh(ticket, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::{FakeCatalog, character};

    #[test]
    fn test_starts_loading() {
        let screen = ListScreen::new();
        assert!(screen.is_loading());
        assert!(screen.characters().is_empty());
    }

    #[tokio::test]
    async fn test_refresh_success() {
        let api = FakeCatalog::new().push_characters(Ok(vec![
            character(1, "Rick Sanchez", "Male", &[]),
            character(2, "Morty Smith", "Male", &[]),
        ]));
        let mut screen = ListScreen::new();
        screen.refresh(&api).await;

        assert!(matches!(screen.status(), ViewStatus::Success(c) if c.len() == 2));
        assert_eq!(screen.characters()[1].name, "Morty Smith");
    }

    #[tokio::test]
    async fn test_refresh_error_carries_message() {
        let api = FakeCatalog::new().push_characters(Err("There is nothing here"));
        let mut screen = ListScreen::new();
        screen.refresh(&api).await;

        assert_eq!(
            screen.status(),
            &ViewStatus::Error("Server returned 500: There is nothing here".to_string())
        );
        assert!(screen.characters().is_empty());
    }

    #[tokio::test]
    async fn test_failed_refresh_discards_previous_data() {
        let api = FakeCatalog::new()
            .push_characters(Ok(vec![character(1, "Rick Sanchez", "Male", &[])]))
            .push_characters(Err("down"));
        let mut screen = ListScreen::new();
        screen.refresh(&api).await;
        assert_eq!(screen.characters().len(), 1);

        let ticket = screen.begin_refresh();
        assert_eq!(screen.status(), &ViewStatus::Loading);
        assert!(screen.characters().is_empty());

        let result = api.get_all_characters().await;
        assert!(screen.complete_refresh(ticket, result));
        assert!(matches!(screen.status(), ViewStatus::Error(_)));
        assert!(screen.characters().is_empty());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut screen = ListScreen::new();
        let first = screen.begin_refresh();
        let second = screen.begin_refresh();

        // The newer request lands first...
        assert!(screen.complete_refresh(
            second,
            Ok(vec![character(2, "Morty Smith", "Male", &[])])
        ));
        // ...then the older one must not overwrite it.
        assert!(!screen.complete_refresh(
            first,
            Err(ApiError::Timeout(30))
        ));
        assert_eq!(screen.characters()[0].id, 2);
    }

    #[test]
    fn test_completion_after_newer_begin_keeps_loading() {
        let mut screen = ListScreen::new();
        let first = screen.begin_refresh();
        let _second = screen.begin_refresh();

        assert!(!screen.complete_refresh(first, Ok(vec![])));
        assert!(screen.is_loading());
    }
}
