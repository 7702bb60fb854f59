use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

use crate::models::Actor;

fn actor_from_row(row: &Row<'_>) -> rusqlite::Result<Actor> {
    Ok(Actor {
        id: row.get(0)?,
        name: row.get(1)?,
        birth_year: row.get(2)?,
    })
}

/// Insert an actor without checking for an existing row of the same name.
/// Direct actor entry relies on this, so two calls leave two rows behind.
pub fn add_actor(conn: &Connection, name: &str, birth_year: i64) -> Result<i64> {
    conn.execute(
        "INSERT INTO actors (name, birth_year) VALUES (?1, ?2)",
        params![name, birth_year],
    )
    .context("failed to insert actor")?;

    let id = conn.last_insert_rowid();
    debug!(id, name, "actor inserted");
    Ok(id)
}

pub fn fetch_actor(conn: &Connection, id: i64) -> Result<Option<Actor>> {
    conn.query_row(
        "SELECT id, name, birth_year FROM actors WHERE id = ?1",
        params![id],
        actor_from_row,
    )
    .optional()
    .context("failed to load actor")
}

/// Exact, case-sensitive name lookup. When duplicates exist the oldest row
/// (lowest id) is returned.
pub fn find_actor_by_name(conn: &Connection, name: &str) -> Result<Option<Actor>> {
    conn.query_row(
        "SELECT id, name, birth_year FROM actors WHERE name = ?1 ORDER BY id LIMIT 1",
        params![name],
        actor_from_row,
    )
    .optional()
    .context("failed to look up actor by name")
}

/// Reuse the actor called `name` if one exists, otherwise insert it.
///
/// An existing row always wins: `birth_year_if_new` is only invoked when no
/// actor matches, so a differing birth year never overwrites stored data. The
/// closure lets interactive callers ask for the year only when it is needed.
pub fn find_or_create_actor<F>(conn: &Connection, name: &str, birth_year_if_new: F) -> Result<i64>
where
    F: FnOnce() -> Result<i64>,
{
    if let Some(actor) = find_actor_by_name(conn, name)? {
        debug!(id = actor.id, name, "reusing existing actor");
        return Ok(actor.id);
    }

    let birth_year = birth_year_if_new()?;
    add_actor(conn, name, birth_year)
}
