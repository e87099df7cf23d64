//! Domain service for episode catalog queries.
//!
//! This module provides the [`CatalogService`] trait, the single entry point
//! the HTTP handlers and CLI commands use to read the catalog.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use super::pagination::Paged;
use super::store::ScanReport;
use crate::models::Episode;

/// Domain errors for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read stream directory {}", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type EpisodePage = Paged<Episode>;

/// Everything the player page needs about one episode.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerContext {
    pub episode: Episode,
    pub previous: Option<Episode>,
    pub next: Option<Episode>,
}

#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// Full aggregated catalog in first-seen order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DirectoryUnavailable`] if the stream directory
    /// cannot be listed.
    async fn episodes(&self) -> Result<Arc<Vec<Episode>>, CatalogError>;

    /// Episode whose id, or failing that slug, equals `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DirectoryUnavailable`] if the stream directory
    /// cannot be listed.
    async fn find_episode(&self, identifier: &str) -> Result<Option<Episode>, CatalogError>;

    /// Resolved episode with its previous/next siblings, from a single load.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DirectoryUnavailable`] if the stream directory
    /// cannot be listed.
    async fn player(&self, identifier: &str) -> Result<Option<PlayerContext>, CatalogError>;

    /// One listing page; out-of-range page numbers are clamped.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DirectoryUnavailable`] if the stream directory
    /// cannot be listed.
    async fn page(&self, requested: usize) -> Result<EpisodePage, CatalogError>;

    /// Reads every stream file and reports counts and skipped files.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DirectoryUnavailable`] if the stream directory
    /// cannot be listed.
    async fn scan(&self) -> Result<ScanReport, CatalogError>;
}
