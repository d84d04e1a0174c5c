use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(database_path: &str, pool_size: u32) -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::file(database_path));
    build_pool(manager, pool_size)
}

/// Single-connection pool over an in-memory database.
///
/// Every SQLite memory connection is its own database, so the pool must never
/// open a second one.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = build_manager(SqliteConnectionManager::memory());
    build_pool(manager, 1)
}

fn build_manager(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager, pool_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(pool_size.max(1))
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
