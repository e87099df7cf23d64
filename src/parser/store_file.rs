use regex::Regex;
use std::sync::OnceLock;

/// Whether a directory entry is a stream file: exactly nine digits plus `.json`.
#[must_use]
pub fn is_stream_file(name: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{9}\.json$").expect("Invalid regex"))
        .is_match(name)
}
