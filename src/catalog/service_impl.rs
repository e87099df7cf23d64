//! File-backed implementation of the `CatalogService` trait.

use std::sync::Arc;

use super::locator::locate;
use super::navigation::navigate;
use super::pagination::paginate;
use super::service::{CatalogError, CatalogService, EpisodePage, PlayerContext};
use super::store::{EpisodeStore, ScanReport};
use crate::config::Config;
use crate::models::Episode;

pub struct FileCatalogService {
    store: EpisodeStore,
    items_per_page: usize,
}

impl FileCatalogService {
    #[must_use]
    pub fn new(store: EpisodeStore, items_per_page: usize) -> Self {
        Self {
            store,
            items_per_page: items_per_page.max(1),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            EpisodeStore::from_config(&config.catalog),
            config.server.items_per_page,
        )
    }
}

#[async_trait::async_trait]
impl CatalogService for FileCatalogService {
    async fn episodes(&self) -> Result<Arc<Vec<Episode>>, CatalogError> {
        self.store.load_episodes().await
    }

    async fn find_episode(&self, identifier: &str) -> Result<Option<Episode>, CatalogError> {
        let episodes = self.store.load_episodes().await?;
        Ok(locate(identifier, &episodes).cloned())
    }

    async fn player(&self, identifier: &str) -> Result<Option<PlayerContext>, CatalogError> {
        let episodes = self.store.load_episodes().await?;
        let Some(episode) = locate(identifier, &episodes) else {
            return Ok(None);
        };

        let nav = navigate(episode, &episodes);
        Ok(Some(PlayerContext {
            episode: episode.clone(),
            previous: nav.previous.cloned(),
            next: nav.next.cloned(),
        }))
    }

    async fn page(&self, requested: usize) -> Result<EpisodePage, CatalogError> {
        let episodes = self.store.load_episodes().await?;
        Ok(paginate(episodes.as_slice(), requested, self.items_per_page))
    }

    async fn scan(&self) -> Result<ScanReport, CatalogError> {
        self.store.scan().await
    }
}
