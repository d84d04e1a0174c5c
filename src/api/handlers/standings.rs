use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use super::{error_response, AppState};
use crate::api::models::{PairingItem, StandingItem};

pub async fn get_standings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let rows = match state.tournament.standings() {
        Ok(rows) => rows,
        Err(e) => return error_response("Standings Error", e),
    };

    let items: Vec<StandingItem> = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| StandingItem::from_row(i + 1, row))
        .collect();

    Json(items).into_response()
}

pub async fn get_pairings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let pairings = match state.tournament.pairings() {
        Ok(pairings) => pairings,
        Err(e) => return error_response("Pairings Error", e),
    };

    let items: Vec<PairingItem> = pairings
        .into_iter()
        .enumerate()
        .map(|(i, pairing)| PairingItem::from_pairing(i + 1, pairing))
        .collect();

    Json(items).into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::super::test_support::{parse, send, test_app};
    use crate::api::models::{PairingItem, StandingItem};
    use crate::services::TournamentService;

    fn play_scenario(tournament: &TournamentService) -> Vec<i32> {
        let ids: Vec<i32> = ["A", "B", "C", "D"]
            .iter()
            .map(|name| tournament.register_player(name).unwrap().id)
            .collect();
        tournament.report_match(ids[0], ids[1]).unwrap();
        tournament.report_match(ids[2], ids[3]).unwrap();
        tournament.report_match(ids[0], ids[2]).unwrap();
        ids
    }

    #[tokio::test]
    async fn test_empty_tournament() {
        let (app, _) = test_app();

        let (status, body) = send(app.clone(), "GET", "/api/standings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(parse::<Vec<StandingItem>>(&body).is_empty());

        let (status, body) = send(app, "GET", "/api/pairings", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(parse::<Vec<PairingItem>>(&body).is_empty());
    }

    #[tokio::test]
    async fn test_standings_are_ranked() {
        let (app, tournament) = test_app();
        let ids = play_scenario(&tournament);

        let (status, body) = send(app, "GET", "/api/standings", None).await;

        assert_eq!(status, StatusCode::OK);
        let items: Vec<StandingItem> = parse(&body);
        let summary: Vec<(usize, i32, i32, i32, i32)> = items
            .iter()
            .map(|s| (s.rank, s.player_id, s.wins, s.losses, s.matches_played))
            .collect();
        assert_eq!(
            summary,
            vec![
                (1, ids[0], 2, 0, 2),
                (2, ids[2], 1, 1, 2),
                (3, ids[1], 0, 1, 1),
                (4, ids[3], 0, 1, 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_pairings_follow_standings() {
        let (app, tournament) = test_app();
        let ids = play_scenario(&tournament);

        let (status, body) = send(app, "GET", "/api/pairings", None).await;

        assert_eq!(status, StatusCode::OK);
        let items: Vec<PairingItem> = parse(&body);
        assert_eq!(items.len(), 2);
        assert_eq!((items[0].player1_id, items[0].player2_id), (ids[0], ids[2]));
        assert_eq!((items[0].player1_name.as_str(), items[0].player2_name.as_str()), ("A", "C"));
        assert_eq!((items[1].player1_id, items[1].player2_id), (ids[1], ids[3]));
        assert_eq!(items[1].table, 2);
    }

    #[tokio::test]
    async fn test_odd_player_count_conflicts() {
        let (app, tournament) = test_app();
        for name in ["A", "B", "C"] {
            tournament.register_player(name).unwrap();
        }

        let (status, body) = send(app, "GET", "/api/pairings", None).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert!(String::from_utf8(body).unwrap().contains("Cannot pair 3 players"));
    }
}
