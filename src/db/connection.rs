use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;
use tracing::info;

/// Open the catalog file, creating its directory on first launch, and make
/// sure the schema exists. `PRAGMA foreign_keys = ON` is set here so cast
/// links pointing at missing rows are rejected in tests and real runs alike.
pub fn open_catalog(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("failed to create data directory")?;
        }
    }

    let conn = Connection::open(path).context("failed to open SQLite database")?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    ensure_schema(&conn)?;
    info!(path = %path.display(), "catalog ready");
    Ok(conn)
}

/// Create the three catalog tables when absent. Safe to run on every launch.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY,
            title TEXT,
            release_year INTEGER,
            genre TEXT
        )",
        [],
    )
    .context("failed to create movies table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS actors (
            id INTEGER PRIMARY KEY,
            name TEXT,
            birth_year INTEGER
        )",
        [],
    )
    .context("failed to create actors table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS movie_cast (
            movie_id INTEGER,
            actor_id INTEGER,
            PRIMARY KEY (movie_id, actor_id),
            FOREIGN KEY(movie_id) REFERENCES movies(id),
            FOREIGN KEY(actor_id) REFERENCES actors(id)
        )",
        [],
    )
    .context("failed to create movie_cast table")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(conn: &Connection) -> Vec<String> {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap();
        let names = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap();
        names
    }

    #[test]
    fn creates_all_three_tables() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        assert_eq!(table_names(&conn), vec!["actors", "movie_cast", "movies"]);
    }

    #[test]
    fn schema_creation_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO movies (title, release_year, genre) VALUES ('Heat', 1995, 'Crime')",
            [],
        )
        .unwrap();
        ensure_schema(&conn).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM movies", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn open_catalog_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("catalog.sqlite");
        let conn = open_catalog(&path).unwrap();
        assert!(path.exists());

        let fk: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(fk, 1);
    }
}
