use chrono::NaiveDateTime;

use crate::standings::{MatchResult, RegisteredPlayer};

#[derive(Debug, Clone)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<Player> for RegisteredPlayer {
    fn from(player: Player) -> Self {
        RegisteredPlayer {
            id: player.id,
            name: player.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Match {
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub created_at: Option<NaiveDateTime>,
}

impl From<&Match> for MatchResult {
    fn from(record: &Match) -> Self {
        MatchResult::new(record.winner_id, record.loser_id)
    }
}
