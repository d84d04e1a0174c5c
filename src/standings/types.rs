pub type PlayerId = i32;

/// A registered player as seen by the standings calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredPlayer {
    pub id: PlayerId,
    pub name: String,
}

impl RegisteredPlayer {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Outcome of a single recorded match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchResult {
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
}

impl MatchResult {
    pub fn new(winner_id: PlayerId, loser_id: PlayerId) -> Self {
        Self {
            winner_id,
            loser_id,
        }
    }
}

/// Win/loss tally for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub wins: i32,
    pub losses: i32,
}

impl Record {
    pub fn matches_played(&self) -> i32 {
        self.wins + self.losses
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    pub id: PlayerId,
    pub name: String,
    pub wins: i32,
    pub matches_played: i32,
}

impl StandingRow {
    pub fn losses(&self) -> i32 {
        self.matches_played - self.wins
    }
}

/// Two players drawn against each other for the next round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}
