// File: src/screen.rs
//! Per-screen state. Each screen owns its data exclusively and is dropped on exit.
pub mod detail;
pub mod list;

pub use detail::{DetailScreen, EpisodeTitles};
pub use list::{ListScreen, RefreshTicket, ViewStatus};
