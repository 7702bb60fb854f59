//! Read-only report queries backing the menu's "show" options. Every user
//! supplied value is bound as a parameter, never spliced into the SQL.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::{GenreCount, MovieAge, MovieCast, TitleYear};

/// Number of titles per page when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Titles alongside the comma-joined cast. Inner joins drop movies that have
/// nobody linked to them.
pub fn movies_with_cast(conn: &Connection) -> Result<Vec<MovieCast>> {
    let mut stmt = conn
        .prepare(
            "SELECT movies.title, GROUP_CONCAT(actors.name, ', ') AS actor_names
             FROM movies
             JOIN movie_cast ON movies.id = movie_cast.movie_id
             JOIN actors ON movie_cast.actor_id = actors.id
             GROUP BY movies.title",
        )
        .context("failed to prepare movies with cast query")?;

    let rows = stmt
        .query_map([], |row| {
            Ok(MovieCast {
                title: row.get(0)?,
                actors: row.get(1)?,
            })
        })
        .context("failed to iterate movies with cast")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect movies with cast")?;

    Ok(rows)
}

pub fn unique_genres(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT DISTINCT genre FROM movies")
        .context("failed to prepare genre query")?;

    let mut rows = stmt.query([]).context("failed to execute genre query")?;

    let mut genres = Vec::new();
    while let Some(row) = rows.next().context("failed to fetch genre row")? {
        let genre: String = row.get(0).context("failed to read genre value")?;
        genres.push(genre);
    }

    Ok(genres)
}

pub fn movie_count_by_genre(conn: &Connection) -> Result<Vec<GenreCount>> {
    let mut stmt = conn
        .prepare("SELECT genre, COUNT(*) FROM movies GROUP BY genre")
        .context("failed to prepare genre count query")?;

    let counts = stmt
        .query_map([], |row| {
            Ok(GenreCount {
                genre: row.get(0)?,
                count: row.get(1)?,
            })
        })
        .context("failed to iterate genre counts")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect genre counts")?;

    Ok(counts)
}

/// Mean birth year of every actor cast in a movie of `genre`. `AVG` over an
/// empty set is NULL, which comes back as `None`.
pub fn average_birth_year_by_genre(conn: &Connection, genre: &str) -> Result<Option<f64>> {
    conn.query_row(
        "SELECT AVG(actors.birth_year)
         FROM actors
         JOIN movie_cast ON actors.id = movie_cast.actor_id
         JOIN movies ON movie_cast.movie_id = movies.id
         WHERE movies.genre = ?1",
        params![genre],
        |row| row.get::<_, Option<f64>>(0),
    )
    .context("failed to compute average birth year")
}

/// Case-insensitive substring match on the title. SQLite's `LIKE` folds ASCII
/// case, which covers the catalog's needs.
pub fn search_by_title_keyword(conn: &Connection, keyword: &str) -> Result<Vec<TitleYear>> {
    let pattern = format!("%{keyword}%");
    let mut stmt = conn
        .prepare("SELECT title, release_year FROM movies WHERE title LIKE ?1 ORDER BY id")
        .context("failed to prepare title search")?;

    let hits = stmt
        .query_map(params![pattern], |row| {
            Ok(TitleYear {
                title: row.get(0)?,
                release_year: row.get(1)?,
            })
        })
        .context("failed to iterate title search")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect title search")?;

    Ok(hits)
}

/// Titles on the 1-indexed `page`, in insertion order. Pages past the end are
/// simply empty; pages below 1 read from the start.
pub fn paginated_titles(conn: &Connection, page: i64, page_size: i64) -> Result<Vec<String>> {
    let offset = page.saturating_sub(1).max(0).saturating_mul(page_size);
    let mut stmt = conn
        .prepare("SELECT title FROM movies ORDER BY id LIMIT ?1 OFFSET ?2")
        .context("failed to prepare page query")?;

    let titles = stmt
        .query_map(params![page_size, offset], |row| row.get(0))
        .context("failed to iterate page")?
        .collect::<Result<Vec<String>, _>>()
        .context("failed to collect page")?;

    Ok(titles)
}

/// Actor names and movie titles in one list. `UNION` removes duplicates, so a
/// film named after an actor shows up once.
pub fn all_names_and_titles(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM actors UNION SELECT title FROM movies")
        .context("failed to prepare names and titles query")?;

    let items = stmt
        .query_map([], |row| row.get(0))
        .context("failed to iterate names and titles")?
        .collect::<Result<Vec<String>, _>>()
        .context("failed to collect names and titles")?;

    Ok(items)
}

/// Years since release for every movie. The subtraction happens here rather
/// than in SQL so extreme stored years saturate instead of turning into REALs.
pub fn movie_ages(conn: &Connection, current_year: i64) -> Result<Vec<MovieAge>> {
    let mut stmt = conn
        .prepare("SELECT title, release_year FROM movies ORDER BY id")
        .context("failed to prepare movie age query")?;

    let ages = stmt
        .query_map([], |row| {
            let release_year: i64 = row.get(1)?;
            Ok(MovieAge {
                title: row.get(0)?,
                age: current_year.saturating_sub(release_year),
            })
        })
        .context("failed to iterate movie ages")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect movie ages")?;

    Ok(ages)
}
