// File: src/tui/action.rs
use crate::error::ApiError;
use crate::model::Character;
use crate::screen::RefreshTicket;

/// What a key press asks the run loop to do.
#[derive(Debug, PartialEq)]
pub enum Action {
    Refresh(RefreshTicket),
    // Start resolving episode titles for the detail screen that was just opened.
    LoadEpisodes,
    Quit,
}

/// Work handed to the network task.
#[derive(Debug, PartialEq)]
pub enum NetworkRequest {
    FetchCharacters(RefreshTicket),
    Shutdown,
}

impl Action {
    /// The part of this action the network task handles, if any. Episode loading
    /// is owned by the detail screen and stays on the UI side.
    pub fn network_request(&self) -> Option<NetworkRequest> {
        match self {
            Action::Refresh(ticket) => Some(NetworkRequest::FetchCharacters(*ticket)),
            Action::Quit => Some(NetworkRequest::Shutdown),
            Action::LoadEpisodes => None,
        }
    }
}

#[derive(Debug)]
pub enum AppEvent {
    CharactersLoaded(RefreshTicket, Result<Vec<Character>, ApiError>),
    EpisodesLoaded(u32, Vec<String>),
    Status(String),
}
