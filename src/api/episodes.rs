use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::models::Episode;

/// `GET /api/all`
pub async fn list_all(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Episode>>, ApiError> {
    let episodes = state.catalog.episodes().await?;
    Ok(Json(episodes.as_ref().clone()))
}

/// `GET /api/episode/{identifier}`
pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    Path(identifier): Path<String>,
) -> Result<Json<Episode>, ApiError> {
    let episode = state
        .catalog
        .find_episode(&identifier)
        .await?
        .ok_or_else(ApiError::episode_not_found)?;

    Ok(Json(episode))
}
