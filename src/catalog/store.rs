//! Reads stream files from the configured directory.
//!
//! Files are listed and read on every call. With the snapshot cache enabled
//! the aggregated catalog is reused while the directory listing (names,
//! sizes and modification times) is unchanged; a rewrite that keeps both the
//! size and the mtime is not observed until something else changes.

use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Instant, SystemTime};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::aggregator::aggregate;
use super::service::CatalogError;
use crate::config::CatalogConfig;
use crate::models::{Episode, RawRecord, RecordFile};
use crate::parser::store_file::is_stream_file;

/// Why a single stream file was skipped.
#[derive(Debug, Error)]
pub enum RecordFileError {
    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of reading every stream file once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub files: usize,
    pub records: usize,
    pub episodes: usize,
    /// Names of files that could not be read or parsed.
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SnapshotEntry {
    name: String,
    len: u64,
    modified: Option<SystemTime>,
}

struct CachedCatalog {
    snapshot: Vec<SnapshotEntry>,
    episodes: Arc<Vec<Episode>>,
}

struct LoadedRecords {
    records: Vec<RawRecord>,
    report: ScanReport,
}

pub struct EpisodeStore {
    stream_dir: PathBuf,
    max_concurrent_reads: usize,
    cache: Option<RwLock<Option<CachedCatalog>>>,
}

impl EpisodeStore {
    #[must_use]
    pub fn new(stream_dir: impl Into<PathBuf>, max_concurrent_reads: usize, cache_enabled: bool) -> Self {
        Self {
            stream_dir: stream_dir.into(),
            max_concurrent_reads: max_concurrent_reads.max(1),
            cache: cache_enabled.then(|| RwLock::new(None)),
        }
    }

    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::new(
            &config.stream_dir,
            config.max_concurrent_reads,
            config.cache_enabled,
        )
    }

    /// Aggregated catalog built from every stream file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DirectoryUnavailable`] if the stream directory
    /// cannot be listed. Unreadable files are skipped, not reported.
    pub async fn load_episodes(&self) -> Result<Arc<Vec<Episode>>, CatalogError> {
        let start = Instant::now();
        let snapshot = self.list_files().await?;

        if let Some(cache) = &self.cache
            && let Some(cached) = cache.read().await.as_ref()
            && cached.snapshot == snapshot
        {
            metrics::counter!("catalog_cache_hits_total").increment(1);
            return Ok(Arc::clone(&cached.episodes));
        }

        let loaded = self.read_files(&snapshot).await;
        let episodes = Arc::new(aggregate(loaded.records));

        if let Some(cache) = &self.cache {
            *cache.write().await = Some(CachedCatalog {
                snapshot,
                episodes: Arc::clone(&episodes),
            });
        }

        metrics::histogram!("catalog_load_duration_seconds").record(start.elapsed().as_secs_f64());
        debug!(
            files = loaded.report.files,
            records = loaded.report.records,
            skipped = loaded.report.skipped.len(),
            episodes = episodes.len(),
            duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            "Catalog loaded"
        );

        Ok(episodes)
    }

    /// Reads every stream file and reports what was found, bypassing the cache.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DirectoryUnavailable`] if the stream directory
    /// cannot be listed.
    pub async fn scan(&self) -> Result<ScanReport, CatalogError> {
        let snapshot = self.list_files().await?;
        let loaded = self.read_files(&snapshot).await;

        let mut report = loaded.report;
        report.episodes = aggregate(loaded.records).len();
        Ok(report)
    }

    /// Matching stream files in lexicographic order.
    async fn list_files(&self) -> Result<Vec<SnapshotEntry>, CatalogError> {
        let unavailable = |source| CatalogError::DirectoryUnavailable {
            path: self.stream_dir.clone(),
            source,
        };

        let mut dir = tokio::fs::read_dir(&self.stream_dir)
            .await
            .map_err(unavailable)?;

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await.map_err(unavailable)? {
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if !is_stream_file(&name) {
                continue;
            }

            match entry.metadata().await {
                Ok(meta) if meta.is_file() => entries.push(SnapshotEntry {
                    name,
                    len: meta.len(),
                    modified: meta.modified().ok(),
                }),
                Ok(_) => debug!(file = %name, "Ignoring non-file stream entry"),
                Err(e) => {
                    // still listed so the read reports the failure
                    debug!(file = %name, error = %e, "Failed to stat stream file");
                    entries.push(SnapshotEntry {
                        name,
                        len: 0,
                        modified: None,
                    });
                }
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn read_files(&self, files: &[SnapshotEntry]) -> LoadedRecords {
        let results: Vec<(String, Result<Vec<RawRecord>, RecordFileError>)> =
            futures::stream::iter(
                files
                    .iter()
                    .map(|file| (self.stream_dir.join(&file.name), file.name.clone()))
                    .collect::<Vec<_>>()
                    .into_iter()
                    .map(|(path, name)| async move { (name, read_record_file(&path).await) }),
            )
            .buffered(self.max_concurrent_reads)
            .collect()
            .await;

        let mut records = Vec::new();
        let mut report = ScanReport {
            files: results.len(),
            ..ScanReport::default()
        };

        for (name, result) in results {
            match result {
                Ok(file_records) => {
                    report.records += file_records.len();
                    records.extend(file_records);
                }
                Err(e) => {
                    warn!(
                        event = "stream_file_skipped",
                        file = %name,
                        error = %e,
                        "Skipping unreadable stream file"
                    );
                    metrics::counter!("catalog_files_skipped_total").increment(1);
                    report.skipped.push(name);
                }
            }
        }

        LoadedRecords { records, report }
    }
}

async fn read_record_file(path: &Path) -> Result<Vec<RawRecord>, RecordFileError> {
    let content = tokio::fs::read_to_string(path).await?;
    let file: RecordFile = serde_json::from_str(&content)?;
    Ok(file.into_records())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new() -> Self {
            let path = std::env::temp_dir().join(format!(
                "anistream-store-test-{}",
                uuid::Uuid::new_v4()
            ));
            std::fs::create_dir_all(&path).unwrap();
            Self(path)
        }

        fn write(&self, name: &str, content: &str) {
            std::fs::write(self.0.join(name), content).unwrap();
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn record(title: &str, server: &str, id: u32) -> String {
        format!(
            r#"{{"anime_title":"X","episode_title":"X {title}","episode_link":"https://s/episode/x-{id}/","decoded_data":{{"id":{id}}},"server":"{server}","quality":"720p","stream_url":"u-{server}"}}"#
        )
    }

    #[tokio::test]
    async fn test_files_are_read_in_name_order() {
        let dir = TempDir::new();
        dir.write("000000002.json", &format!("[{}]", record("Episode 1", "B", 1)));
        dir.write("000000001.json", &record("Episode 1", "A", 1));
        dir.write("000000003.json", &format!("[{}]", record("Episode 1", "C", 1)));

        let store = EpisodeStore::new(&dir.0, 2, false);
        let episodes = store.load_episodes().await.unwrap();

        assert_eq!(episodes.len(), 1);
        let servers: Vec<&str> = episodes[0].servers.iter().map(|s| s.server.as_str()).collect();
        assert_eq!(servers, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_non_matching_names_are_ignored() {
        let dir = TempDir::new();
        dir.write(".gitkeep", "");
        dir.write("notes.json", &record("Episode 1", "A", 1));
        dir.write("12345678.json", &record("Episode 2", "A", 2));
        dir.write("123456789.json", &record("Episode 3", "A", 3));

        let store = EpisodeStore::new(&dir.0, 4, false);
        let report = store.scan().await.unwrap();

        assert_eq!(report.files, 1);
        assert_eq!(report.records, 1);
        assert_eq!(report.episodes, 1);
    }

    #[tokio::test]
    async fn test_malformed_file_is_skipped() {
        let dir = TempDir::new();
        dir.write("000000001.json", &record("Episode 1", "A", 1));
        dir.write("000000002.json", "{ not json");
        dir.write("000000003.json", &record("Episode 2", "A", 2));

        let store = EpisodeStore::new(&dir.0, 4, false);
        let report = store.scan().await.unwrap();
        assert_eq!(report.files, 3);
        assert_eq!(report.skipped, vec!["000000002.json".to_string()]);
        assert_eq!(report.episodes, 2);

        assert_eq!(store.load_episodes().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_error() {
        let path = std::env::temp_dir().join(format!("anistream-missing-{}", uuid::Uuid::new_v4()));
        let store = EpisodeStore::new(&path, 4, false);

        let err = store.load_episodes().await.unwrap_err();
        assert!(matches!(err, CatalogError::DirectoryUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_cache_reuses_catalog_until_listing_changes() {
        let dir = TempDir::new();
        dir.write("000000001.json", &record("Episode 1", "A", 1));

        let store = EpisodeStore::new(&dir.0, 4, true);
        let first = store.load_episodes().await.unwrap();
        let second = store.load_episodes().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        dir.write("000000002.json", &record("Episode 2", "A", 2));
        let third = store.load_episodes().await.unwrap();
        assert_eq!(third.len(), 2);
    }

    #[tokio::test]
    async fn test_without_cache_every_load_rebuilds() {
        let dir = TempDir::new();
        dir.write("000000001.json", &record("Episode 1", "A", 1));

        let store = EpisodeStore::new(&dir.0, 4, false);
        let first = store.load_episodes().await.unwrap();
        let second = store.load_episodes().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }
}
