use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{PlayerItem, PlayerListResponse, RegisterPlayerRequest};

pub async fn get_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let players = match state.tournament.list_players() {
        Ok(players) => players,
        Err(e) => return error_response("Query Error", e),
    };

    let items: Vec<PlayerItem> = players.into_iter().map(PlayerItem::from).collect();
    Json(PlayerListResponse {
        total: items.len(),
        items,
    })
    .into_response()
}

pub async fn register_player(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RegisterPlayerRequest>,
) -> impl IntoResponse {
    let name = request.name.trim();
    if name.is_empty() {
        return (StatusCode::BAD_REQUEST, "Player name must not be empty").into_response();
    }

    match state.tournament.register_player(name) {
        Ok(player) => (StatusCode::CREATED, Json(PlayerItem::from(player))).into_response(),
        Err(e) => error_response("Insert Error", e),
    }
}

pub async fn delete_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.tournament.delete_players() {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("Delete Error", e),
    }
}
