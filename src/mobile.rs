// File: ./src/mobile.rs
use crate::client::CatalogClient;
use crate::color::Rgba;
use crate::config::Config;
use crate::enrich::fetch_episode_titles;
use crate::gender::GenderTone;
use crate::model::Character;
use crate::paths::AppPaths;
use crate::screen::{ListScreen, ViewStatus};
use std::sync::Arc;
use tokio::sync::Mutex;

#[cfg(target_os = "android")]
use android_logger::Config as LogConfig;
#[cfg(target_os = "android")]
use log::LevelFilter;

#[derive(Debug, uniffi::Error)]
#[uniffi(flat_error)]
pub enum MobileError {
    Generic(String),
}
impl From<String> for MobileError {
    fn from(e: String) -> Self {
        Self::Generic(e)
    }
}
impl From<&str> for MobileError {
    fn from(e: &str) -> Self {
        Self::Generic(e.to_string())
    }
}
impl From<anyhow::Error> for MobileError {
    fn from(e: anyhow::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
impl From<crate::error::ApiError> for MobileError {
    fn from(e: crate::error::ApiError) -> Self {
        Self::Generic(e.to_string())
    }
}
impl std::fmt::Display for MobileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MobileError::Generic(s) => s,
            }
        )
    }
}
impl std::error::Error for MobileError {}

// --- DTOs ---

#[derive(uniffi::Record)]
pub struct MobileColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub opacity: f32,
}

#[derive(uniffi::Record)]
pub struct MobileGenderColors {
    pub background: MobileColor,
    pub foreground: MobileColor,
}

#[derive(uniffi::Record)]
pub struct MobileCharacter {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    pub kind: String,
    pub gender: String,
    pub image_url: String,
    pub origin: String,
    pub location: String,
    pub episode_urls: Vec<String>,
    pub badge: MobileGenderColors,
}

#[derive(uniffi::Enum)]
pub enum MobileViewStatus {
    Loading,
    Error { message: String },
    Success { characters: Vec<MobileCharacter> },
}

#[derive(uniffi::Record)]
pub struct MobileConfig {
    pub base_url: String,
    pub allow_insecure: bool,
    pub episode_concurrency: u32,
}

fn color_to_mobile(c: Rgba) -> MobileColor {
    MobileColor {
        red: c.r,
        green: c.g,
        blue: c.b,
        opacity: c.a,
    }
}

fn gender_to_mobile(gender: &str) -> MobileGenderColors {
    let tone = GenderTone::from_label(gender);
    MobileGenderColors {
        background: color_to_mobile(tone.background_color()),
        foreground: color_to_mobile(tone.text_color()),
    }
}

fn character_to_mobile(c: &Character) -> MobileCharacter {
    MobileCharacter {
        id: c.id,
        name: c.name.clone(),
        status: c.status.clone(),
        species: c.species.clone(),
        kind: c.kind.clone(),
        gender: c.gender.clone(),
        image_url: c.image.clone(),
        origin: c.origin.name.clone(),
        location: c.location.name.clone(),
        episode_urls: c.episodes.clone(),
        badge: gender_to_mobile(&c.gender),
    }
}

fn concurrency_to_mobile(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn status_to_mobile(status: &ViewStatus) -> MobileViewStatus {
    match status {
        ViewStatus::Loading => MobileViewStatus::Loading,
        ViewStatus::Error(message) => MobileViewStatus::Error {
            message: message.clone(),
        },
        ViewStatus::Success(chars) => MobileViewStatus::Success {
            characters: chars.iter().map(character_to_mobile).collect(),
        },
    }
}

// --- MAIN OBJECT ---

#[derive(uniffi::Object)]
pub struct RmdexMobile {
    client: Arc<Mutex<Option<Arc<CatalogClient>>>>,
    list: Arc<Mutex<ListScreen>>,
}

#[uniffi::export(async_runtime = "tokio")]
impl RmdexMobile {
    #[uniffi::constructor]
    pub fn new(files_dir: String) -> Self {
        #[cfg(target_os = "android")]
        android_logger::init_once(
            LogConfig::default()
                .with_max_level(LevelFilter::Debug)
                .with_tag("RmdexRust"),
        );
        AppPaths::init_mobile_path(files_dir);
        Self {
            client: Arc::new(Mutex::new(None)),
            list: Arc::new(Mutex::new(ListScreen::new())),
        }
    }

    pub fn get_config(&self) -> MobileConfig {
        let c = Config::load().unwrap_or_default();
        MobileConfig {
            base_url: c.base_url,
            allow_insecure: c.allow_insecure_certs,
            episode_concurrency: concurrency_to_mobile(c.episode_concurrency),
        }
    }

    pub async fn save_config(
        &self,
        base_url: String,
        insecure: bool,
        episode_concurrency: u32,
    ) -> Result<(), MobileError> {
        let mut c = Config::load().unwrap_or_default();
        c.base_url = base_url;
        c.allow_insecure_certs = insecure;
        c.episode_concurrency = episode_concurrency as usize;
        c.save().map_err(MobileError::from)?;
        // Rebuilt with the new settings on next use.
        *self.client.lock().await = None;
        Ok(())
    }

    pub fn gender_colors(&self, gender: String) -> MobileGenderColors {
        gender_to_mobile(&gender)
    }

    pub async fn view_status(&self) -> MobileViewStatus {
        status_to_mobile(self.list.lock().await.status())
    }

    /// Pull-to-refresh. Returns the status after this refresh, or the newer
    /// one's if another refresh started meanwhile.
    pub async fn refresh_characters(&self) -> MobileViewStatus {
        let ticket = self.list.lock().await.begin_refresh();
        let result = match self.client().await {
            Ok(client) => client.get_all_characters().await,
            Err(e) => Err(e),
        };
        let mut list = self.list.lock().await;
        list.complete_refresh(ticket, result);
        status_to_mobile(list.status())
    }

    /// Single character lookup, for deep links into a detail screen.
    pub async fn get_character(&self, id: u32) -> Result<MobileCharacter, MobileError> {
        let client = self.client().await?;
        let character = client.get_character(id).await?;
        Ok(character_to_mobile(&character))
    }

    /// Episode names for a detail screen. Failed URLs are left out. Cancelling the
    /// calling coroutine/task drops the pending requests.
    pub async fn load_episode_titles(
        &self,
        episode_urls: Vec<String>,
    ) -> Result<Vec<String>, MobileError> {
        let client = self.client().await?;
        let concurrency = Config::load().unwrap_or_default().effective_concurrency();
        Ok(fetch_episode_titles(client.as_ref(), &episode_urls, concurrency).await)
    }
}

impl RmdexMobile {
    async fn client(&self) -> Result<Arc<CatalogClient>, crate::error::ApiError> {
        let mut guard = self.client.lock().await;
        if let Some(client) = &*guard {
            return Ok(client.clone());
        }
        let config = Config::load().unwrap_or_default();
        let client = Arc::new(CatalogClient::from_config(&config)?);
        *guard = Some(client.clone());
        Ok(client)
    }
}
