use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::EpisodeId;

/// One playable embed for an episode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerSource {
    pub server: String,
    pub quality: String,
    pub embed: String,
    pub default: bool,
}

impl ServerSource {
    /// Label shown in the server selector, e.g. `"Server A - 720p"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.server, self.quality)
    }
}

/// All sources of one `(anime title, episode title)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub id: EpisodeId,

    /// Anime (series) title.
    pub title: String,

    /// Episode title with the anime title removed.
    pub episode: String,

    pub episode_number: u32,

    pub slug: String,

    pub date: String,

    /// Full `decoded_data` of the first record seen.
    pub code: Value,

    pub servers: Vec<ServerSource>,

    pub timestamp: Value,
}

impl Episode {
    /// `"<title> - <episode>"`, used for page titles and cards.
    #[must_use]
    pub fn display_title(&self) -> String {
        format!("{} - {}", self.title, self.episode)
    }

    /// The server marked as default, falling back to the first one.
    #[must_use]
    pub fn default_server(&self) -> Option<&ServerSource> {
        self.servers
            .iter()
            .find(|s| s.default)
            .or_else(|| self.servers.first())
    }
}
