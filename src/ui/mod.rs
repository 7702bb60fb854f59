//! Text menu over stdin/stdout.

mod app;
mod command;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use command::Command;
pub use terminal::{run_app, run_stdio};
