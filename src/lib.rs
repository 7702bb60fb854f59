//! Core library surface for the Kinobaza movie catalog.
//!
//! The binary only wires configuration, logging and the menu together; the
//! persistence functions are public so tests and other tooling can call them
//! directly with their own connection.
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ui;

/// Convenience re-exports for opening the catalog.
pub use config::Config;
pub use db::{ensure_schema, open_catalog};

pub use error::InputError;
pub use models::{Actor, CastLink, GenreCount, Movie, MovieAge, MovieCast, TitleYear};

/// The interactive menu entry points and state container.
pub use ui::{run_app, run_stdio, App, Command};
