pub mod server;
pub mod tournament;

pub use tournament::TournamentService;
