use super::types::{Pairing, StandingRow};
use crate::errors::TournamentError;

/// Pairs adjacent rows of an already ranked standings table: 0 with 1,
/// 2 with 3, and so on.
pub fn generate_pairings(standings: &[StandingRow]) -> Result<Vec<Pairing>, TournamentError> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::UnpairablePlayerCount {
            count: standings.len(),
        });
    }

    let pairings = standings
        .chunks_exact(2)
        .map(|pair| pair_players(&pair[0], &pair[1]))
        .collect();

    Ok(pairings)
}

fn pair_players(first: &StandingRow, second: &StandingRow) -> Pairing {
    Pairing {
        id1: first.id,
        name1: first.name.clone(),
        id2: second.id,
        name2: second.name.clone(),
    }
}
