use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{MatchItem, ReportMatchRequest};

pub async fn report_match(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReportMatchRequest>,
) -> impl IntoResponse {
    match state.tournament.report_match(request.winner_id, request.loser_id) {
        Ok(recorded) => (
            StatusCode::CREATED,
            Json(MatchItem {
                match_id: recorded.id,
                winner_id: recorded.winner_id,
                loser_id: recorded.loser_id,
            }),
        )
            .into_response(),
        Err(e) => error_response("Insert Error", e),
    }
}

pub async fn delete_matches(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.tournament.delete_matches() {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response("Delete Error", e),
    }
}
