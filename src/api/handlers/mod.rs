use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::errors::{as_tournament_error, TournamentError};
use crate::services::TournamentService;

pub mod matches;
pub mod players;
pub mod standings;

pub struct AppState {
    pub tournament: TournamentService,
}

/// Maps a service failure to an HTTP response.
///
/// Tournament rule violations are the caller's problem; anything else is ours.
pub(crate) fn error_response(context: &str, err: anyhow::Error) -> Response {
    match as_tournament_error(&err) {
        Some(TournamentError::UnpairablePlayerCount { .. }) => {
            (StatusCode::CONFLICT, err.root_cause().to_string()).into_response()
        }
        Some(TournamentError::ReferentialIntegrity(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.root_cause().to_string()).into_response()
        }
        None => {
            log::error!("{}: {:?}", context, err);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{}: {}", context, err)).into_response()
        }
    }
}
