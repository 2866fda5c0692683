// File: src/screen/detail.rs
use crate::client::CatalogApi;
use crate::enrich::fetch_episode_titles;
use crate::model::Character;
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const LOADING_EPISODES: &str = "Loading episodes...";
pub const NO_EPISODES: &str = "No episodes found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodeTitles {
    Loading,
    Loaded(Vec<String>),
}

// Aborts the enrichment task when the screen goes away.
#[derive(Debug)]
struct TaskGuard(JoinHandle<()>);

impl Drop for TaskGuard {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// One character's detail view. Owns its episode titles and the task resolving them.
#[derive(Debug)]
pub struct DetailScreen {
    character: Character,
    episodes: EpisodeTitles,
    task: Option<TaskGuard>,
}

impl DetailScreen {
    pub fn new(character: Character) -> Self {
        Self {
            character,
            episodes: EpisodeTitles::Loading,
            task: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.character.name
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn episodes(&self) -> &EpisodeTitles {
        &self.episodes
    }

    pub fn is_loading(&self) -> bool {
        self.episodes == EpisodeTitles::Loading
    }

    /// Text lines for the "Episodes:" section.
    pub fn episode_lines(&self) -> Vec<&str> {
        match &self.episodes {
            EpisodeTitles::Loading => vec![LOADING_EPISODES],
            EpisodeTitles::Loaded(titles) if titles.is_empty() => vec![NO_EPISODES],
            EpisodeTitles::Loaded(titles) => titles.iter().map(String::as_str).collect(),
        }
    }

    /// Resolves the episode titles in place. Does nothing once loaded.
    pub async fn load_episode_titles<A: CatalogApi>(&mut self, api: &A, concurrency: usize) {
        if !self.is_loading() {
            return;
        }
        let titles = fetch_episode_titles(api, &self.character.episodes, concurrency).await;
        self.episodes = EpisodeTitles::Loaded(titles);
    }

    /// Resolves the episode titles on a background task and reports them to
    /// `on_done` with the character id. The task is aborted if this screen is
    /// dropped first. Feed the result back through [`DetailScreen::finish_loading`].
    pub fn start_loading<A, F>(&mut self, api: Arc<A>, concurrency: usize, on_done: F)
    where
        A: CatalogApi + 'static,
        F: FnOnce(u32, Vec<String>) + Send + 'static,
    {
        if self.task.is_some() || !self.is_loading() {
            return;
        }
        let id = self.character.id;
        let urls = self.character.episodes.clone();
        let handle = tokio::spawn(async move {
            let titles = fetch_episode_titles(api.as_ref(), &urls, concurrency).await;
            on_done(id, titles);
        });
        self.task = Some(TaskGuard(handle));
    }

    /// Stores titles from [`DetailScreen::start_loading`]. Ignored if they belong to
    /// another character or titles are already loaded.
    pub fn finish_loading(&mut self, character_id: u32, titles: Vec<String>) -> bool {
        if character_id != self.character.id || !self.is_loading() {
            return false;
        }
        self.episodes = EpisodeTitles::Loaded(titles);
        self.task = None;
        true
    }
}
