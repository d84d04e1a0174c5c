use anyhow::{Context, Result};

use super::calculator::compute_standings;
use super::pairing::generate_pairings;
use super::types::{MatchResult, Pairing, RegisteredPlayer, StandingRow};

/// Read access to the players and matches of a tournament.
pub trait TournamentStore {
    fn list_players(&mut self) -> Result<Vec<RegisteredPlayer>>;
    fn list_matches(&mut self) -> Result<Vec<MatchResult>>;
}

/// Reads the current players and matches from the store and ranks them.
pub fn player_standings<S: TournamentStore + ?Sized>(store: &mut S) -> Result<Vec<StandingRow>> {
    let players = store.list_players()?;
    let matches = store.list_matches()?;

    let rows = compute_standings(&players, &matches).context("Failed to compute standings")?;
    Ok(rows)
}

/// Pairings for the next round, based on fresh standings.
pub fn swiss_pairings<S: TournamentStore + ?Sized>(store: &mut S) -> Result<Vec<Pairing>> {
    let standings = player_standings(store)?;
    let pairings = generate_pairings(&standings).context("Failed to generate pairings")?;
    Ok(pairings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{as_tournament_error, TournamentError};

    struct MemoryStore {
        players: Vec<RegisteredPlayer>,
        matches: Vec<MatchResult>,
        reads: usize,
    }

    impl TournamentStore for MemoryStore {
        fn list_players(&mut self) -> Result<Vec<RegisteredPlayer>> {
            self.reads += 1;
            Ok(self.players.clone())
        }

        fn list_matches(&mut self) -> Result<Vec<MatchResult>> {
            self.reads += 1;
            Ok(self.matches.clone())
        }
    }

    struct BrokenStore;

    impl TournamentStore for BrokenStore {
        fn list_players(&mut self) -> Result<Vec<RegisteredPlayer>> {
            anyhow::bail!("connection refused")
        }

        fn list_matches(&mut self) -> Result<Vec<MatchResult>> {
            Ok(Vec::new())
        }
    }

    fn scenario_store() -> MemoryStore {
        MemoryStore {
            players: vec![
                RegisteredPlayer::new(1, "A"),
                RegisteredPlayer::new(2, "B"),
                RegisteredPlayer::new(3, "C"),
                RegisteredPlayer::new(4, "D"),
            ],
            matches: vec![
                MatchResult::new(1, 2),
                MatchResult::new(3, 4),
                MatchResult::new(1, 3),
            ],
            reads: 0,
        }
    }

    #[test]
    fn test_standings_read_fresh_from_store() {
        let mut store = scenario_store();

        player_standings(&mut store).unwrap();
        store.matches.push(MatchResult::new(4, 2));
        let rows = player_standings(&mut store).unwrap();

        assert_eq!(store.reads, 4);
        let d = rows.iter().find(|r| r.id == 4).unwrap();
        assert_eq!((d.wins, d.matches_played), (1, 2));
    }

    #[test]
    fn test_swiss_pairings_from_store() {
        let mut store = scenario_store();

        let pairings = swiss_pairings(&mut store).unwrap();

        let names: Vec<(&str, &str)> = pairings
            .iter()
            .map(|p| (p.name1.as_str(), p.name2.as_str()))
            .collect();
        assert_eq!(names, vec![("A", "C"), ("B", "D")]);
    }

    #[test]
    fn test_odd_store_surfaces_typed_error() {
        let mut store = scenario_store();
        store.players.push(RegisteredPlayer::new(5, "E"));

        let err = swiss_pairings(&mut store).unwrap_err();

        assert_eq!(
            as_tournament_error(&err),
            Some(&TournamentError::UnpairablePlayerCount { count: 5 })
        );
    }

    #[test]
    fn test_store_failure_is_propagated() {
        let err = player_standings(&mut BrokenStore).unwrap_err();
        assert!(err.to_string().contains("connection refused"));
        assert!(as_tournament_error(&err).is_none());
    }
}
