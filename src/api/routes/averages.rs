use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::stats::{self, Aggregation};

/// `GET /api/averages/actions` — mean points per action.
pub async fn by_action(State(state): State<AppState>) -> Result<Json<Aggregation>, ApiError> {
    let plays = state.store.read().await.read_all()?;
    let vocabulary = state.team.action_vocabulary();
    Ok(Json(stats::averages_by_action(&plays, &vocabulary)))
}

/// `GET /api/averages/players` — mean points per roster player.
pub async fn by_player(State(state): State<AppState>) -> Result<Json<Aggregation>, ApiError> {
    let plays = state.store.read().await.read_all()?;
    Ok(Json(stats::averages_by_player(&plays, &state.team.roster)))
}

/// `GET /api/averages/situations` — mean points per situation.
pub async fn by_situation(State(state): State<AppState>) -> Result<Json<Aggregation>, ApiError> {
    let plays = state.store.read().await.read_all()?;
    Ok(Json(stats::averages_by_situation(
        &plays,
        &state.team.situations,
    )))
}
