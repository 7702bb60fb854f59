use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::debug;

use crate::models::CastLink;

/// Record that an actor appears in a movie. Unlike an `INSERT OR IGNORE`, a
/// repeated pair is reported back as the primary-key violation SQLite raises,
/// and foreign keys reject ids that do not exist.
pub fn link_cast(conn: &Connection, movie_id: i64, actor_id: i64) -> Result<CastLink> {
    conn.execute(
        "INSERT INTO movie_cast (movie_id, actor_id) VALUES (?1, ?2)",
        params![movie_id, actor_id],
    )
    .context("failed to link actor to movie")?;

    debug!(movie_id, actor_id, "cast link inserted");
    Ok(CastLink { movie_id, actor_id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::memory_catalog;
    use crate::db::{add_actor, add_movie};
    use rusqlite::ErrorCode;

    fn constraint_violation(err: &anyhow::Error) -> bool {
        err.chain()
            .filter_map(|cause| cause.downcast_ref::<rusqlite::Error>())
            .any(|sql| sql.sqlite_error_code() == Some(ErrorCode::ConstraintViolation))
    }

    #[test]
    fn links_existing_movie_and_actor() {
        let conn = memory_catalog();
        let movie = add_movie(&conn, "Andrei Rublev", 1966, "Drama").unwrap();
        let actor = add_actor(&conn, "Anatoly Solonitsyn", 1934).unwrap();

        let link = link_cast(&conn, movie, actor).unwrap();
        assert_eq!(link, CastLink { movie_id: movie, actor_id: actor });
    }

    #[test]
    fn duplicate_link_is_a_uniqueness_violation() {
        let conn = memory_catalog();
        let movie = add_movie(&conn, "Andrei Rublev", 1966, "Drama").unwrap();
        let actor = add_actor(&conn, "Anatoly Solonitsyn", 1934).unwrap();
        link_cast(&conn, movie, actor).unwrap();

        let err = link_cast(&conn, movie, actor).unwrap_err();
        assert!(constraint_violation(&err));
    }

    #[test]
    fn link_to_missing_movie_is_rejected() {
        let conn = memory_catalog();
        let actor = add_actor(&conn, "Anatoly Solonitsyn", 1934).unwrap();

        let err = link_cast(&conn, 999, actor).unwrap_err();
        assert!(constraint_violation(&err));
    }
}
