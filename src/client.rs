// File: src/client.rs
mod cert;
mod core;

pub use self::core::CatalogClient;

use crate::error::ApiError;
use crate::model::{Character, Episode};
use std::future::Future;

/// The two calls the screens need from the catalog API.
///
/// Screens and the enrichment loop are generic over this so they can be driven
/// by an in-memory fake in tests.
pub trait CatalogApi: Send + Sync {
    /// Every character in the catalog, across all pages, in page order.
    fn get_all_characters(&self) -> impl Future<Output = Result<Vec<Character>, ApiError>> + Send;

    fn get_episode_by_url(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Episode, ApiError>> + Send;
}
