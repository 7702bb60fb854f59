use std::io::Write;

use anyhow::{Context, Error, Result};
use crossterm::style::Stylize;

use super::command::Command;

/// Write the numbered option list followed by a blank separator line above it.
pub(crate) fn write_menu<W: Write>(out: &mut W, styled: bool) -> Result<()> {
    writeln!(out).context("failed to write menu")?;
    let header = if styled {
        writeln!(out, "{}", "Menu:".bold())
    } else {
        writeln!(out, "Menu:")
    };
    header.context("failed to write menu")?;
    for command in Command::MENU {
        writeln!(out, "{}. {}", command.token(), command.label())
            .context("failed to write menu")?;
    }
    Ok(())
}

/// Red one-line message for recoverable mistakes such as an unknown choice.
pub(crate) fn write_error<W: Write>(out: &mut W, message: &str, styled: bool) -> Result<()> {
    let written = if styled {
        writeln!(out, "{}", message.red())
    } else {
        writeln!(out, "{message}")
    };
    written.context("failed to write error message")
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
