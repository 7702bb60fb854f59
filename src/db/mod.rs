//! Persistence module split across logical submodules. Every function takes
//! the connection explicitly; nothing here holds global state.

mod actors;
mod cast;
mod connection;
mod movies;
mod reports;

pub use actors::{add_actor, fetch_actor, find_actor_by_name, find_or_create_actor};
pub use cast::link_cast;
pub use connection::{ensure_schema, open_catalog};
pub use movies::{add_movie, fetch_movie};
pub use reports::{
    all_names_and_titles, average_birth_year_by_genre, movie_ages, movie_count_by_genre,
    movies_with_cast, paginated_titles, search_by_title_keyword, unique_genres,
    DEFAULT_PAGE_SIZE,
};
