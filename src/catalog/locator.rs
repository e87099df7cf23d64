use crate::models::Episode;

/// Finds an episode by id, then by slug.
///
/// All ids are checked before any slug, so a slug that happens to look like
/// a number never shadows a real id. The first match in catalog order wins.
#[must_use]
pub fn locate<'a>(identifier: &str, episodes: &'a [Episode]) -> Option<&'a Episode> {
    episodes
        .iter()
        .find(|episode| episode.id.matches(identifier))
        .or_else(|| {
            if identifier.is_empty() {
                return None;
            }
            episodes.iter().find(|episode| episode.slug == identifier)
        })
}
