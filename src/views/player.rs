use std::fmt::Write;

use super::{attr, play_href, text};
use crate::catalog::PlayerContext;
use crate::constants::player::{MARQUEE_THRESHOLD, WATERMARK_URL};
use crate::models::Episode;

const STYLE: &str = include_str!("assets/player.css");
const SCRIPT: &str = include_str!("assets/player.js");

/// Player page for one episode with server selector and series navigation.
#[must_use]
pub fn render_player(ctx: &PlayerContext) -> String {
    let episode = &ctx.episode;
    let title = episode.display_title();
    let default_server = episode.default_server();
    let embed = default_server.map_or("", |s| s.embed.as_str());

    let mut html = String::with_capacity(16 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n<body>\n",
        title = text(&title),
    );

    let _ = write!(
        html,
        "<div class=\"container\">\n<div class=\"video-wrapper\">\n<div class=\"video-container\">\n\
         <iframe src=\"{embed}\" allowfullscreen=\"\"></iframe>\n\
         <div class=\"video-title\" id=\"videoTitle\" data-base-title=\"{base}\" data-marquee-threshold=\"{MARQUEE_THRESHOLD}\">{title}</div>\n\
         <div class=\"watermark\"><img src=\"{WATERMARK_URL}\" alt=\"Watermark\"></div>\n",
        embed = attr(embed),
        base = attr(&title),
        title = text(&title),
    );

    push_nav_button(&mut html, "prev-btn", "Episode sebelumnya", ctx.previous.as_ref());
    push_nav_button(&mut html, "next-btn", "Episode berikutnya", ctx.next.as_ref());
    html.push_str("</div>\n</div>\n");

    html.push_str("<div class=\"server-selector\">\n");
    for server in &episode.servers {
        let active = default_server.is_some_and(|d| std::ptr::eq(d, server));
        let label = server.label();
        let _ = writeln!(
            html,
            "<button class=\"server-btn{active}\" data-embed=\"{embed}\" data-label=\"{label_attr}\">{label_text}</button>",
            active = if active { " active" } else { "" },
            embed = attr(&server.embed),
            label_attr = attr(&label),
            label_text = text(&label),
        );
    }
    html.push_str("</div>\n");

    html.push_str(
        "<div class=\"burger-btn\"><span></span></div>\n\
         <div class=\"hint\">Klik tombol burger untuk memilih server</div>\n\
         </div>\n\
         <div class=\"tutorial-overlay\">\n<div class=\"tutorial-content\">\n\
         <h2>Cara Menggunakan Pemutar Video</h2>\n\
         <p>1. Gunakan tombol panah kiri dan kanan untuk navigasi video</p>\n\
         <p>2. Tombol burger di pojok kiri bawah untuk memilih server</p>\n\
         <p>3. Menu server akan otomatis tersembunyi setelah 10 detik</p>\n\
         <p>4. Watermark akan selalu terlihat di pojok kanan atas</p>\n\
         <div class=\"tutorial-indicator\">\
         <div class=\"indicator active\"></div><div class=\"indicator\"></div><div class=\"indicator\"></div>\
         </div>\n\
         <button class=\"close-tutorial\">Mengerti</button>\n\
         </div>\n</div>\n<script>\n",
    );
    html.push_str(SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");

    html
}

fn push_nav_button(html: &mut String, class: &str, label: &str, target: Option<&Episode>) {
    match target {
        Some(episode) => {
            let _ = writeln!(
                html,
                "<button class=\"nav-btn {class}\" aria-label=\"{label}\" data-href=\"{href}\"></button>",
                href = attr(&play_href(&episode.slug)),
            );
        }
        None => {
            let _ = writeln!(
                html,
                "<button class=\"nav-btn {class}\" aria-label=\"{label}\" disabled></button>"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EpisodeId;
    use crate::models::ServerSource;
    use serde_json::{Value, json};

    fn server(name: &str, default: bool) -> ServerSource {
        ServerSource {
            server: name.to_string(),
            quality: "720p".to_string(),
            embed: format!("https://embed.example/{name}?a=1&b=2"),
            default,
        }
    }

    fn episode(n: u32, servers: Vec<ServerSource>) -> Episode {
        Episode {
            id: EpisodeId::new(json!(n)),
            title: "Frieren".to_string(),
            episode: format!("Episode {n}"),
            episode_number: n,
            slug: format!("frieren-{n}"),
            date: String::new(),
            code: Value::Null,
            servers,
            timestamp: Value::Null,
        }
    }

    #[test]
    fn test_default_server_is_embedded_and_active() {
        let ctx = PlayerContext {
            episode: episode(2, vec![server("A", false), server("B", true)]),
            previous: None,
            next: None,
        };
        let html = render_player(&ctx);

        assert!(html.contains("<iframe src=\"https://embed.example/B?a=1&amp;b=2\""));
        assert!(html.contains("<button class=\"server-btn active\" data-embed=\"https://embed.example/B?a=1&amp;b=2\""));
        assert!(html.contains("<button class=\"server-btn\" data-embed=\"https://embed.example/A?a=1&amp;b=2\""));
        assert!(html.contains(">A - 720p</button>"));
        assert!(html.contains("<title>Frieren - Episode 2</title>"));
    }

    #[test]
    fn test_navigation_targets_slugs() {
        let ctx = PlayerContext {
            episode: episode(2, vec![server("A", false)]),
            previous: Some(episode(1, vec![])),
            next: Some(episode(3, vec![])),
        };
        let html = render_player(&ctx);

        assert!(html.contains("prev-btn\" aria-label=\"Episode sebelumnya\" data-href=\"/play?episode=frieren-1\""));
        assert!(html.contains("next-btn\" aria-label=\"Episode berikutnya\" data-href=\"/play?episode=frieren-3\""));
        assert!(html.contains("<button class=\"server-btn active\""));
    }

    #[test]
    fn test_boundaries_disable_buttons() {
        let ctx = PlayerContext {
            episode: episode(1, vec![server("A", false)]),
            previous: None,
            next: None,
        };
        let html = render_player(&ctx);

        assert!(html.contains("prev-btn\" aria-label=\"Episode sebelumnya\" disabled>"));
        assert!(html.contains("next-btn\" aria-label=\"Episode berikutnya\" disabled>"));
    }

    #[test]
    fn test_no_servers_renders_empty_frame() {
        let ctx = PlayerContext {
            episode: episode(1, vec![]),
            previous: None,
            next: None,
        };
        let html = render_player(&ctx);
        assert!(html.contains("<iframe src=\"\""));
        assert!(!html.contains("<button class=\"server-btn"));
    }
}
