use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::Player;

/// Adds a player; the database assigns the id. Names need not be unique.
pub fn register_player(conn: &mut DbConn, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

pub fn find_by_id(conn: &mut DbConn, id: i32) -> Result<Option<Player>> {
    let sql = "SELECT id, name, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_players(conn: &mut DbConn) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .context("Failed to count players")
}

/// Removes every player. Their matches go with them through the cascade.
pub fn delete_all(conn: &mut DbConn) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection, setup};

    fn fresh_conn() -> DbConn {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        setup::init_schema(&mut conn).unwrap();
        conn
    }

    #[test]
    fn test_register_assigns_increasing_ids() {
        let mut conn = fresh_conn();

        let first = register_player(&mut conn, "Chandra Nalaar").unwrap();
        let second = register_player(&mut conn, "Chandra Nalaar").unwrap();

        assert!(second.id > first.id);
        assert_eq!(second.name, "Chandra Nalaar");
        assert!(first.created_at.is_some());
    }

    #[test]
    fn test_count_and_delete() {
        let mut conn = fresh_conn();
        assert_eq!(count_players(&mut conn).unwrap(), 0);

        register_player(&mut conn, "Markov Chaney").unwrap();
        register_player(&mut conn, "Joe Malik").unwrap();
        assert_eq!(count_players(&mut conn).unwrap(), 2);

        assert_eq!(delete_all(&mut conn).unwrap(), 2);
        assert_eq!(count_players(&mut conn).unwrap(), 0);
    }

    #[test]
    fn test_find_and_list() {
        let mut conn = fresh_conn();
        let bruno = register_player(&mut conn, "Bruno Walton").unwrap();
        register_player(&mut conn, "Boots O'Neal").unwrap();

        let found = find_by_id(&mut conn, bruno.id).unwrap().unwrap();
        assert_eq!(found.name, "Bruno Walton");
        assert!(find_by_id(&mut conn, bruno.id + 100).unwrap().is_none());

        let names: Vec<String> = list_all(&mut conn).unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Bruno Walton", "Boots O'Neal"]);
    }
}
