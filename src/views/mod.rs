//! HTML documents for the listing and player pages.
//!
//! Both renderers consume only catalog values and return a complete
//! document; escaping happens here and nowhere else.

mod listing;
mod player;

pub use listing::render_listing;
pub use player::render_player;

use std::borrow::Cow;

fn text(value: &str) -> Cow<'_, str> {
    html_escape::encode_text(value)
}

fn attr(value: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(value)
}

/// `/play?episode=<identifier>` with the identifier percent-encoded.
#[must_use]
pub fn play_href(identifier: &str) -> String {
    format!("/play?episode={}", urlencoding::encode(identifier))
}
