use std::fmt;

use thiserror::Error;

use crate::standings::types::PlayerId;

/// Errors raised by the standings and pairing logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    /// Swiss pairing needs an even number of players; byes are not supported.
    #[error("Cannot pair {count} players: an even number of players is required")]
    UnpairablePlayerCount { count: usize },

    #[error("Referential integrity violated: {0}")]
    ReferentialIntegrity(IntegrityViolation),
}

impl From<IntegrityViolation> for TournamentError {
    fn from(violation: IntegrityViolation) -> Self {
        TournamentError::ReferentialIntegrity(violation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityViolation {
    #[error("match #{index} references unknown {side} id {player_id}")]
    UnknownPlayer {
        index: usize,
        side: MatchSide,
        player_id: PlayerId,
    },

    #[error("player id {0} is listed more than once")]
    DuplicatePlayer(PlayerId),

    #[error("match #{index} has player {player_id} as both winner and loser")]
    SelfMatch { index: usize, player_id: PlayerId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSide {
    Winner,
    Loser,
}

impl MatchSide {
    pub fn as_str(&self) -> &str {
        match self {
            MatchSide::Winner => "winner",
            MatchSide::Loser => "loser",
        }
    }
}

impl fmt::Display for MatchSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finds a `TournamentError` carried inside an `anyhow::Error`, if any.
pub fn as_tournament_error(error: &anyhow::Error) -> Option<&TournamentError> {
    error.downcast_ref::<TournamentError>()
}
