use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use super::{AppState, PageError};
use crate::api::validation::validate_page;
use crate::views::{play_href, render_listing, render_player};

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub s: Option<String>,
    pub play: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlayQuery {
    pub episode: Option<String>,
}

fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

/// `GET /` - paginated episode listing, or a redirect when `play` is given.
pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IndexQuery>,
) -> Result<Response, PageError> {
    if let Some(play) = query.play.as_deref().filter(|p| !p.is_empty()) {
        return Ok(found(&play_href(play)));
    }

    let requested = validate_page(query.s.as_deref())?;
    let page = state.catalog.page(requested).await?;

    Ok(Html(render_listing(&page)).into_response())
}

/// `GET /play` - video player for an episode id or slug.
pub async fn play(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlayQuery>,
) -> Result<Response, PageError> {
    let Some(identifier) = query.episode.filter(|e| !e.is_empty()) else {
        return Ok(found("/"));
    };

    let Some(ctx) = state.catalog.player(&identifier).await? else {
        debug!(identifier = %identifier, "Episode not found");
        return Err(PageError::EpisodeNotFound);
    };

    Ok(Html(render_player(&ctx)).into_response())
}
