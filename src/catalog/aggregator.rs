//! Folds raw stream records into one [`Episode`] per anime/episode title pair.

use std::collections::HashMap;

use crate::domain::EpisodeId;
use crate::models::{Episode, RawRecord, ServerSource};
use crate::parser::episode::{episode_label, parse_episode_number, parse_slug};

/// Ordered accumulator: episodes in first-seen order plus a key index.
#[derive(Default)]
struct Accumulator {
    episodes: Vec<Episode>,
    index: HashMap<(String, String), usize>,
}

impl Accumulator {
    fn push(mut self, record: RawRecord) -> Self {
        let source = ServerSource {
            server: record.server.clone(),
            quality: record.quality.clone(),
            embed: record.stream_url.clone(),
            default: record.is_default.unwrap_or(false),
        };

        let key = (record.anime_title.clone(), record.episode_title.clone());
        if let Some(&position) = self.index.get(&key) {
            self.episodes[position].servers.push(source);
            return self;
        }

        let mut episode = first_seen(record);
        episode.servers.push(source);
        self.index.insert(key, self.episodes.len());
        self.episodes.push(episode);
        self
    }
}

fn first_seen(record: RawRecord) -> Episode {
    let id = EpisodeId::new(record.decoded_id());
    Episode {
        id,
        episode: episode_label(&record.episode_title, &record.anime_title),
        episode_number: parse_episode_number(&record.episode_title),
        slug: parse_slug(&record.episode_link),
        title: record.anime_title,
        date: record.episode_date,
        code: record.decoded_data,
        servers: Vec::new(),
        timestamp: record.timestamp,
    }
}

/// Groups records by `(anime_title, episode_title)`.
///
/// The first record of a group fixes `id`, `slug`, `date`, `code` and
/// `timestamp`; every record appends one server in input order. Output keeps
/// the order in which groups were first seen.
#[must_use]
pub fn aggregate<I>(records: I) -> Vec<Episode>
where
    I: IntoIterator<Item = RawRecord>,
{
    records
        .into_iter()
        .fold(Accumulator::default(), Accumulator::push)
        .episodes
}
