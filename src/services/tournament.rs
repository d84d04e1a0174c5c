use anyhow::Result;
use log::info;

use crate::config::settings::StoreSettings;
use crate::database::{self, DbPool, Player, SqliteStore};
use crate::errors::{IntegrityViolation, MatchSide, TournamentError};
use crate::standings::{self, Pairing, StandingRow};

/// Registration, reporting and ranking on top of an injected connection pool.
///
/// Each call checks out one connection and returns it when done.
#[derive(Clone)]
pub struct TournamentService {
    pool: DbPool,
}

impl TournamentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the configured database and makes sure the schema exists.
    pub fn open(settings: &StoreSettings) -> Result<Self> {
        let pool = database::create_pool(&settings.database_path, settings.pool_size)?;
        let service = Self::new(pool);
        service.init()?;
        Ok(service)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    fn store(&self) -> Result<SqliteStore> {
        SqliteStore::acquire(&self.pool)
    }

    pub fn init(&self) -> Result<()> {
        let mut store = self.store()?;
        database::setup::init_schema(store.connection())
    }

    pub fn reset(&self) -> Result<()> {
        let mut store = self.store()?;
        database::setup::reset_database(store.connection())
    }

    pub fn register_player(&self, name: &str) -> Result<Player> {
        let mut store = self.store()?;
        let player = database::players::register_player(store.connection(), name)?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player)
    }

    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut store = self.store()?;
        database::players::list_all(store.connection())
    }

    pub fn count_players(&self) -> Result<i64> {
        let mut store = self.store()?;
        database::players::count_players(store.connection())
    }

    /// Records a result after checking that both players exist and differ.
    pub fn report_match(&self, winner_id: i32, loser_id: i32) -> Result<database::Match> {
        let mut store = self.store()?;
        let conn = store.connection();

        if winner_id == loser_id {
            return Err(reference_error(IntegrityViolation::SelfMatch {
                index: 0,
                player_id: winner_id,
            }));
        }
        for (side, player_id) in [(MatchSide::Winner, winner_id), (MatchSide::Loser, loser_id)] {
            if database::players::find_by_id(conn, player_id)?.is_none() {
                return Err(reference_error(IntegrityViolation::UnknownPlayer {
                    index: 0,
                    side,
                    player_id,
                }));
            }
        }

        let recorded = database::matches::report_match(conn, winner_id, loser_id)?;
        info!("Recorded match {}: {} beat {}", recorded.id, winner_id, loser_id);
        Ok(recorded)
    }

    pub fn delete_matches(&self) -> Result<usize> {
        let mut store = self.store()?;
        let deleted = database::matches::delete_all(store.connection())?;
        info!("Deleted {} matches", deleted);
        Ok(deleted)
    }

    /// Bulk reset of the player list; recorded matches are removed too.
    pub fn delete_players(&self) -> Result<usize> {
        let mut store = self.store()?;
        let deleted = database::players::delete_all(store.connection())?;
        info!("Deleted {} players", deleted);
        Ok(deleted)
    }

    pub fn standings(&self) -> Result<Vec<StandingRow>> {
        let mut store = self.store()?;
        standings::player_standings(&mut store)
    }

    pub fn pairings(&self) -> Result<Vec<Pairing>> {
        let mut store = self.store()?;
        standings::swiss_pairings(&mut store)
    }
}

fn reference_error(violation: IntegrityViolation) -> anyhow::Error {
    TournamentError::from(violation).into()
}
