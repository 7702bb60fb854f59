use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use rusqlite::Connection;
use tracing::{error, info};

use super::app::App;
use super::command::Command;
use super::helpers::{surface_error, write_error, write_menu};

/// Show the menu, read a choice and dispatch it until the user exits or the
/// input stream ends. Unknown choices are reported and the menu is shown
/// again; any other failure stops the loop and is returned to the caller.
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> Result<()> {
    loop {
        let prompt = app.prompt_mut();
        write_menu(&mut prompt.out, prompt.styled)?;

        let Some(choice) = prompt.read_line("Choose an option: ")? else {
            info!("input closed, leaving menu");
            return Ok(());
        };

        let Some(command) = Command::parse(&choice) else {
            write_error(
                &mut prompt.out,
                "Invalid choice. Please try again.",
                prompt.styled,
            )?;
            continue;
        };

        match app.handle(command) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(err) => {
                error!(?command, cause = %surface_error(&err), "menu command failed");
                return Err(err);
            }
        }
    }
}

/// Drive the menu over the process's stdin/stdout. The connection is moved into
/// the app and closed when this returns.
pub fn run_stdio(conn: Connection) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let styled = stdout.is_terminal();
    let mut app = App::new(conn, stdin.lock(), stdout).with_styling(styled);
    run_app(&mut app)?;
    info!("catalog closed");
    Ok(())
}
