// File: src/enrich.rs
use crate::client::CatalogApi;
use futures::future;
use futures::stream::{self, StreamExt};

/// Resolves episode URLs to episode names.
///
/// Output follows input order. A URL that fails to resolve is logged and left
/// out, it never aborts the rest. At most `concurrency` requests are in flight;
/// `1` (or `0`) fetches strictly one after another.
pub async fn fetch_episode_titles<A: CatalogApi>(
    api: &A,
    urls: &[String],
    concurrency: usize,
) -> Vec<String> {
    let titles: Vec<String> = stream::iter(urls.iter().cloned())
        .map(|url| async move {
            match api.get_episode_by_url(&url).await {
                Ok(episode) => Some(episode.name),
                Err(e) => {
                    log::warn!("Failed to load episode at {}: {}", url, e);
                    None
                }
            }
        })
        .buffered(concurrency.max(1))
        .filter_map(future::ready)
        .collect()
        .await;

    if titles.len() < urls.len() {
        log::info!("Resolved {} of {} episodes", titles.len(), urls.len());
    }
    titles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeCatalog;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_failed_entry_is_dropped_order_kept() {
        let api = FakeCatalog::new()
            .with_episode("A", "Pilot")
            .with_episode("C", "Anatomy Park");

        let titles = fetch_episode_titles(&api, &urls(&["A", "B", "C"]), 1).await;
        assert_eq!(titles, vec!["Pilot", "Anatomy Park"]);
        // No retry of B.
        assert_eq!(api.episode_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_runs_on_spawned_task() {
        let api = Arc::new(
            FakeCatalog::new()
                .with_episode("A", "Pilot")
                .with_episode("B", "Lawnmower Dog"),
        );
        let urls = urls(&["A", "missing", "B"]);

        let handle = tokio::spawn({
            let api = api.clone();
            async move { fetch_episode_titles(api.as_ref(), &urls, 2).await }
        });
        assert_eq!(handle.await.unwrap(), vec!["Pilot", "Lawnmower Dog"]);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let api = FakeCatalog::new();
        let titles = fetch_episode_titles(&api, &[], 1).await;
        assert!(titles.is_empty());
        assert_eq!(api.episode_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_fail() {
        let api = FakeCatalog::new();
        let titles = fetch_episode_titles(&api, &urls(&["X", "Y"]), 1).await;
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_sequential_by_default() {
        let api = FakeCatalog::new()
            .with_episode("A", "a")
            .with_episode("B", "b")
            .with_delay("A", Duration::from_millis(20))
            .with_delay("B", Duration::from_millis(20));

        fetch_episode_titles(&api, &urls(&["A", "B"]), 0).await;
        assert_eq!(api.max_in_flight.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_keeps_input_order() {
        // The first URL is the slowest; its title must still come first.
        let api = FakeCatalog::new()
            .with_episode("A", "first")
            .with_episode("B", "second")
            .with_episode("D", "fourth")
            .with_delay("A", Duration::from_millis(60))
            .with_delay("B", Duration::from_millis(10))
            .with_delay("C", Duration::from_millis(5));

        let titles = fetch_episode_titles(&api, &urls(&["A", "B", "C", "D"]), 3).await;
        assert_eq!(titles, vec!["first", "second", "fourth"]);
        assert!(api.max_in_flight.load(Ordering::SeqCst) > 1);
    }
}
