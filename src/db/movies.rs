use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::models::Movie;

/// Insert a movie row and hand back the id SQLite generated for it.
pub fn add_movie(conn: &Connection, title: &str, release_year: i64, genre: &str) -> Result<i64> {
    conn.execute(
        "INSERT INTO movies (title, release_year, genre) VALUES (?1, ?2, ?3)",
        params![title, release_year, genre],
    )
    .context("failed to insert movie")?;

    let id = conn.last_insert_rowid();
    debug!(id, title, "movie inserted");
    Ok(id)
}

pub fn fetch_movie(conn: &Connection, id: i64) -> Result<Option<Movie>> {
    conn.query_row(
        "SELECT id, title, release_year, genre FROM movies WHERE id = ?1",
        params![id],
        |row| {
            Ok(Movie {
                id: row.get(0)?,
                title: row.get(1)?,
                release_year: row.get(2)?,
                genre: row.get(3)?,
            })
        },
    )
    .optional()
    .context("failed to load movie")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_catalog;

    #[test]
    fn inserted_movie_reads_back_unchanged() {
        let conn = memory_catalog();
        let id = add_movie(&conn, "Stalker", 1979, "Sci-Fi").unwrap();

        let movie = fetch_movie(&conn, id).unwrap().unwrap();
        assert_eq!(
            movie,
            Movie {
                id,
                title: "Stalker".to_string(),
                release_year: 1979,
                genre: "Sci-Fi".to_string(),
            }
        );
    }

    #[test]
    fn ids_increase_with_each_insert() {
        let conn = memory_catalog();
        let first = add_movie(&conn, "Solaris", 1972, "Sci-Fi").unwrap();
        let second = add_movie(&conn, "Mirror", 1975, "Drama").unwrap();
        assert!(second > first);
    }

    #[test]
    fn unknown_id_yields_none() {
        let conn = memory_catalog();
        assert!(fetch_movie(&conn, 42).unwrap().is_none());
    }
}
