use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::{Outcome, PlayRecord};

/// Body of a play submission. The play number is assigned by the store,
/// never by the client.
#[derive(Debug, Deserialize)]
pub struct NewPlay {
    pub situation: String,
    pub action: String,
    pub players_involved: Vec<String>,
    pub result: String,
    pub opponent: Option<String>,
}

/// `GET /api/plays` — the full play log in record order.
pub async fn list_plays(State(state): State<AppState>) -> Result<Json<Vec<PlayRecord>>, ApiError> {
    let store = state.store.read().await;
    let plays = store.read_all()?;
    Ok(Json(plays))
}

/// `POST /api/plays` — record a new play.
///
/// Rejects empty player lists and result strings that are neither a
/// sentinel nor a non-negative integer, so bad values never reach the
/// log and poison the averages later.
pub async fn add_play(
    State(state): State<AppState>,
    Json(body): Json<NewPlay>,
) -> Result<(StatusCode, Json<PlayRecord>), ApiError> {
    if body.players_involved.is_empty() {
        return Err(ApiError::BadRequest(
            "players_involved must not be empty".to_string(),
        ));
    }
    if let Err(e) = Outcome::parse(&body.result) {
        return Err(ApiError::InvalidResult(e.to_string()));
    }

    let store = state.store.write().await;
    let play_number = store.next_play_number()?;

    let mut play = PlayRecord::new(
        play_number,
        body.situation,
        body.action,
        body.players_involved,
        body.result,
    );
    if let Some(opponent) = body.opponent {
        play = play.with_opponent(opponent);
    }

    store.append(&play)?;
    tracing::info!(play_number, action = %play.action, "recorded play");

    Ok((StatusCode::CREATED, Json(play)))
}

/// `DELETE /api/plays` — undo the most recent play.
pub async fn remove_most_recent(
    State(state): State<AppState>,
) -> Result<Json<PlayRecord>, ApiError> {
    let store = state.store.write().await;
    let removed = store.remove_most_recent()?;
    Ok(Json(removed))
}
