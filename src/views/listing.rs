use std::fmt::Write;

use super::{attr, play_href, text};
use crate::catalog::EpisodePage;
use crate::models::Episode;

const STYLE: &str = include_str!("assets/listing.css");

/// Listing page: one card per episode plus previous/next page links.
#[must_use]
pub fn render_listing(page: &EpisodePage) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Anime Stream API</title>\n<style>\n",
    );
    html.push_str(STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n<h1>Daftar Episode Anime</h1>\n");

    for episode in &page.items {
        push_card(&mut html, episode);
    }

    html.push_str("<div class=\"pagination\">\n");
    if page.has_previous() {
        let _ = writeln!(
            html,
            "<a href=\"/?s={}\" class=\"page-btn\">Previous</a>",
            page.current_page - 1
        );
    } else {
        html.push_str("<span class=\"page-btn disabled\">Previous</span>\n");
    }

    let _ = writeln!(
        html,
        "<span>Page {} of {}</span>",
        page.current_page, page.total_pages
    );

    if page.has_next() {
        let _ = writeln!(
            html,
            "<a href=\"/?s={}\" class=\"page-btn\">Next</a>",
            page.current_page + 1
        );
    } else {
        html.push_str("<span class=\"page-btn disabled\">Next</span>\n");
    }
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}

fn push_card(html: &mut String, episode: &Episode) {
    let _ = write!(
        html,
        "<div class=\"episode-card\">\n\
         <div class=\"episode-title\">{title}</div>\n\
         <div>Tanggal: {date}</div>\n\
         <div>Servers: {servers} server available</div>\n\
         <a href=\"{by_slug}\" class=\"watch-btn\">Watch Now</a>\n\
         <a href=\"{by_id}\" class=\"watch-btn\">Watch by ID</a>\n\
         </div>\n",
        title = text(&episode.display_title()),
        date = text(&episode.date),
        servers = episode.servers.len(),
        by_slug = attr(&play_href(&episode.slug)),
        by_id = attr(&play_href(&episode.id.to_string())),
    );
}
