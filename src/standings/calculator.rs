use log::debug;
use std::collections::{HashMap, HashSet};

use super::types::{MatchResult, PlayerId, Record, RegisteredPlayer, StandingRow};
use crate::errors::{IntegrityViolation, MatchSide, TournamentError};

/// Builds the standings table: one row per player, most wins first.
///
/// Players without any recorded match get a zero row. Players level on wins
/// are ordered by ascending id, so the table is stable between calls.
pub fn compute_standings(
    players: &[RegisteredPlayer],
    matches: &[MatchResult],
) -> Result<Vec<StandingRow>, TournamentError> {
    debug!(
        "Computing standings for {} players over {} matches",
        players.len(),
        matches.len()
    );

    // 1. Every match must point at two distinct, registered players
    validate_references(players, matches)?;

    // 2. Aggregate wins and losses separately
    let wins = count_by_player(matches, |m| m.winner_id);
    let losses = count_by_player(matches, |m| m.loser_id);

    // 3. Outer join over every id seen in either aggregate
    let records = join_records(&wins, &losses);

    // 4. Left join onto the full player set
    let mut rows = attach_players(players, &records);

    // 5. Rank
    sort_standings(&mut rows);
    Ok(rows)
}

fn validate_references(
    players: &[RegisteredPlayer],
    matches: &[MatchResult],
) -> Result<(), IntegrityViolation> {
    let mut known = HashSet::with_capacity(players.len());
    for player in players {
        if !known.insert(player.id) {
            return Err(IntegrityViolation::DuplicatePlayer(player.id));
        }
    }

    for (index, result) in matches.iter().enumerate() {
        if result.winner_id == result.loser_id {
            return Err(IntegrityViolation::SelfMatch {
                index,
                player_id: result.winner_id,
            });
        }
        check_known(&known, index, MatchSide::Winner, result.winner_id)?;
        check_known(&known, index, MatchSide::Loser, result.loser_id)?;
    }

    Ok(())
}

fn check_known(
    known: &HashSet<PlayerId>,
    index: usize,
    side: MatchSide,
    player_id: PlayerId,
) -> Result<(), IntegrityViolation> {
    if known.contains(&player_id) {
        Ok(())
    } else {
        Err(IntegrityViolation::UnknownPlayer {
            index,
            side,
            player_id,
        })
    }
}

fn count_by_player<F>(matches: &[MatchResult], key: F) -> HashMap<PlayerId, i32>
where
    F: Fn(&MatchResult) -> PlayerId,
{
    let mut counts = HashMap::new();
    for result in matches {
        *counts.entry(key(result)).or_insert(0) += 1;
    }
    counts
}

fn join_records(
    wins: &HashMap<PlayerId, i32>,
    losses: &HashMap<PlayerId, i32>,
) -> HashMap<PlayerId, Record> {
    wins.keys()
        .chain(losses.keys())
        .map(|&id| {
            let record = Record {
                wins: wins.get(&id).copied().unwrap_or(0),
                losses: losses.get(&id).copied().unwrap_or(0),
            };
            (id, record)
        })
        .collect()
}

fn attach_players(
    players: &[RegisteredPlayer],
    records: &HashMap<PlayerId, Record>,
) -> Vec<StandingRow> {
    players
        .iter()
        .map(|player| {
            let record = records.get(&player.id).copied().unwrap_or_default();
            StandingRow {
                id: player.id,
                name: player.name.clone(),
                wins: record.wins,
                matches_played: record.matches_played(),
            }
        })
        .collect()
}

fn sort_standings(rows: &mut [StandingRow]) {
    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id)));
}
