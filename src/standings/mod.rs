pub mod calculator;
pub mod pairing;
pub mod store;
pub mod types;

pub use calculator::compute_standings;
pub use pairing::generate_pairings;
pub use store::{player_standings, swiss_pairings, TournamentStore};
pub use types::{MatchResult, Pairing, PlayerId, Record, RegisteredPlayer, StandingRow};
