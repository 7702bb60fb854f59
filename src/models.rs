//! Domain models that mirror the SQLite schema plus the row shapes returned by
//! the report queries. These stay plain data holders so the persistence and
//! menu layers can pass them around freely.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A catalogued film.
pub struct Movie {
    /// Surrogate key assigned by SQLite.
    pub id: i64,
    pub title: String,
    pub release_year: i64,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A performer. The name doubles as the lookup key when the cast flow decides
/// between reusing a row and inserting a new one.
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub birth_year: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One row of the `movie_cast` join table.
pub struct CastLink {
    pub movie_id: i64,
    pub actor_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A movie title with the comma-joined names of everyone linked to it.
pub struct MovieCast {
    pub title: String,
    pub actors: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreCount {
    pub genre: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Search hit: the title plus its release year.
pub struct TitleYear {
    pub title: String,
    pub release_year: i64,
}

impl fmt::Display for TitleYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Years elapsed since release, relative to the year the report was asked for.
pub struct MovieAge {
    pub title: String,
    pub age: i64,
}
