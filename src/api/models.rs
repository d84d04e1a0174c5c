use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::database::Player;
use crate::standings::{Pairing, StandingRow};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerItem {
    pub player_id: i32,
    pub name: String,
    pub registered_at: Option<NaiveDateTime>,
}

impl From<Player> for PlayerItem {
    fn from(player: Player) -> Self {
        Self {
            player_id: player.id,
            name: player.name,
            registered_at: player.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlayerListResponse {
    pub items: Vec<PlayerItem>,
    pub total: usize,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterPlayerRequest {
    pub name: String,
}

#[derive(Deserialize, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ReportMatchRequest {
    pub winner_id: i32,
    pub loser_id: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    pub match_id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StandingItem {
    pub rank: usize,
    pub player_id: i32,
    pub name: String,
    pub wins: i32,
    pub losses: i32,
    pub matches_played: i32,
}

impl StandingItem {
    pub fn from_row(rank: usize, row: StandingRow) -> Self {
        Self {
            rank,
            player_id: row.id,
            losses: row.losses(),
            name: row.name,
            wins: row.wins,
            matches_played: row.matches_played,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PairingItem {
    pub table: usize,
    pub player1_id: i32,
    pub player1_name: String,
    pub player2_id: i32,
    pub player2_name: String,
}

impl PairingItem {
    pub fn from_pairing(table: usize, pairing: Pairing) -> Self {
        Self {
            table,
            player1_id: pairing.id1,
            player1_name: pairing.name1,
            player2_id: pairing.id2,
            player2_name: pairing.name2,
        }
    }
}
