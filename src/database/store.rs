use anyhow::Result;

use super::connection::{get_connection, DbConn, DbPool};
use super::{matches, players};
use crate::standings::{MatchResult, RegisteredPlayer, TournamentStore};

/// `TournamentStore` over one pooled connection.
///
/// The connection goes back to the pool when the store is dropped.
pub struct SqliteStore {
    conn: DbConn,
}

impl SqliteStore {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn acquire(pool: &DbPool) -> Result<Self> {
        get_connection(pool).map(Self::new)
    }

    pub fn connection(&mut self) -> &mut DbConn {
        &mut self.conn
    }
}

impl TournamentStore for SqliteStore {
    fn list_players(&mut self) -> Result<Vec<RegisteredPlayer>> {
        let rows = players::list_all(&mut self.conn)?;
        Ok(rows.into_iter().map(RegisteredPlayer::from).collect())
    }

    fn list_matches(&mut self) -> Result<Vec<MatchResult>> {
        let rows = matches::list_all(&mut self.conn)?;
        Ok(rows.iter().map(MatchResult::from).collect())
    }
}
