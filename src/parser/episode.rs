use regex::Regex;
use std::sync::OnceLock;

fn get_regex(re: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    re.get_or_init(|| Regex::new(pattern).expect("Invalid regex pattern defined in code"))
}

/// Episode number from a title such as `"Frieren Episode 12 Subtitle Indonesia"`.
///
/// Returns 0 when no `Episode N` marker exists or `N` does not fit in a `u32`.
#[must_use]
pub fn parse_episode_number(episode_title: &str) -> u32 {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = get_regex(&RE, r"(?i)Episode ([0-9]+)");

    re.captures(episode_title)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Slug segment of an episode page URL (`.../episode/<slug>/...`).
///
/// Returns an empty string when the link has no such segment.
#[must_use]
pub fn parse_slug(episode_link: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = get_regex(&RE, r"episode/(.+?)/");

    re.captures(episode_link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Episode label with the first occurrence of the anime title removed.
#[must_use]
pub fn episode_label(episode_title: &str, anime_title: &str) -> String {
    if anime_title.is_empty() {
        return episode_title.trim().to_string();
    }
    episode_title.replacen(anime_title, "", 1).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_number() {
        assert_eq!(parse_episode_number("Frieren Episode 12"), 12);
        assert_eq!(parse_episode_number("Frieren episode 3 Sub Indo"), 3);
        assert_eq!(parse_episode_number("EPISODE 007"), 7);
    }

    #[test]
    fn test_episode_number_defaults_to_zero() {
        assert_eq!(parse_episode_number("Frieren OVA"), 0);
        assert_eq!(parse_episode_number("Episode12"), 0);
        assert_eq!(parse_episode_number(""), 0);
        assert_eq!(parse_episode_number("Episode 99999999999"), 0);
    }

    #[test]
    fn test_episode_number_takes_first_marker() {
        assert_eq!(parse_episode_number("Episode 2 (Episode 5 recap)"), 2);
    }

    #[test]
    fn test_slug() {
        assert_eq!(
            parse_slug("https://site.example/episode/frieren-episode-12/"),
            "frieren-episode-12"
        );
        assert_eq!(parse_slug("https://site.example/episode/a/b/"), "a");
    }

    #[test]
    fn test_slug_missing() {
        assert_eq!(parse_slug("https://site.example/anime/frieren/"), "");
        assert_eq!(parse_slug("https://site.example/episode/no-trailing-slash"), "");
        assert_eq!(parse_slug(""), "");
    }

    #[test]
    fn test_episode_label() {
        assert_eq!(episode_label("Frieren Episode 12", "Frieren"), "Episode 12");
        assert_eq!(episode_label("X Episode 1 X", "X"), "Episode 1 X");
        assert_eq!(episode_label("  Episode 4 ", ""), "Episode 4");
        assert_eq!(episode_label("Episode 4", "Other"), "Episode 4");
    }
}
