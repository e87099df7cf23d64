use crate::models::Episode;

/// Neighbours of an episode within its series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation<'a> {
    pub previous: Option<&'a Episode>,
    pub next: Option<&'a Episode>,
}

impl Navigation<'_> {
    const NONE: Self = Navigation {
        previous: None,
        next: None,
    };
}

/// Previous/next episode of `target` among the episodes sharing its title.
///
/// Siblings are ordered by episode number; equal numbers keep catalog order.
/// The target is found by id, so a target whose id is absent from its series
/// has no neighbours.
#[must_use]
pub fn navigate<'a>(target: &Episode, episodes: &'a [Episode]) -> Navigation<'a> {
    let mut series: Vec<&Episode> = episodes
        .iter()
        .filter(|episode| episode.title == target.title)
        .collect();

    // stable: ties stay in catalog order
    series.sort_by_key(|episode| episode.episode_number);

    let Some(position) = series.iter().position(|episode| episode.id == target.id) else {
        return Navigation::NONE;
    };

    Navigation {
        previous: position.checked_sub(1).map(|i| series[i]),
        next: series.get(position + 1).copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EpisodeId;
    use serde_json::{Value, json};

    fn episode(title: &str, number: u32, id: i64) -> Episode {
        Episode {
            id: EpisodeId::new(json!(id)),
            title: title.to_string(),
            episode: format!("Episode {number}"),
            episode_number: number,
            slug: format!("{}-{number}", title.to_lowercase()),
            date: String::new(),
            code: Value::Null,
            servers: Vec::new(),
            timestamp: Value::Null,
        }
    }

    fn catalog() -> Vec<Episode> {
        vec![
            episode("X", 3, 103),
            episode("Y", 1, 201),
            episode("X", 1, 101),
            episode("X", 2, 102),
            episode("Y", 2, 202),
        ]
    }

    #[test]
    fn test_first_episode_has_no_previous() {
        let episodes = catalog();
        let nav = navigate(&episodes[2], &episodes);
        assert!(nav.previous.is_none());
        assert_eq!(nav.next.unwrap().episode_number, 2);
        assert_eq!(nav.next.unwrap().title, "X");
    }

    #[test]
    fn test_last_episode_has_no_next() {
        let episodes = catalog();
        let nav = navigate(&episodes[0], &episodes);
        assert_eq!(nav.previous.unwrap().episode_number, 2);
        assert!(nav.next.is_none());
    }

    #[test]
    fn test_middle_episode_is_between_neighbours() {
        let episodes = catalog();
        let target = &episodes[3];
        let nav = navigate(target, &episodes);
        let previous = nav.previous.unwrap();
        let next = nav.next.unwrap();
        assert!(previous.episode_number < target.episode_number);
        assert!(target.episode_number < next.episode_number);
    }

    #[test]
    fn test_other_series_are_ignored() {
        let episodes = catalog();
        let nav = navigate(&episodes[1], &episodes);
        assert!(nav.previous.is_none());
        assert_eq!(nav.next.unwrap().id, EpisodeId::new(json!(202)));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let episodes = vec![
            episode("X", 0, 1),
            episode("X", 0, 2),
            episode("X", 0, 3),
        ];
        let nav = navigate(&episodes[1], &episodes);
        assert_eq!(nav.previous.unwrap().id, EpisodeId::new(json!(1)));
        assert_eq!(nav.next.unwrap().id, EpisodeId::new(json!(3)));
    }

    #[test]
    fn test_single_episode_series() {
        let episodes = vec![episode("Solo", 1, 1)];
        assert_eq!(navigate(&episodes[0], &episodes), Navigation::NONE);
    }

    #[test]
    fn test_unknown_target_has_no_neighbours() {
        let episodes = catalog();
        let stranger = episode("X", 2, 999);
        assert_eq!(navigate(&stranger, &episodes), Navigation::NONE);

        let other_series = episode("Z", 1, 101);
        assert_eq!(navigate(&other_series, &episodes), Navigation::NONE);
    }
}
