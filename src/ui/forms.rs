use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::error::InputError;

/// Line-oriented prompt over any reader/writer pair. The binary wires it to
/// stdin/stdout; tests feed it a scripted `Cursor`.
pub(crate) struct Prompt<R, W> {
    input: R,
    pub(crate) out: W,
    /// Emit ANSI colours. Only set when `out` is an interactive terminal.
    pub(crate) styled: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(crate) fn new(input: R, out: W) -> Self {
        Self {
            input,
            out,
            styled: false,
        }
    }

    /// Print `label` and read one line without its trailing newline. `None`
    /// means the input stream has ended.
    pub(crate) fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}").context("failed to write prompt")?;
        self.out.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            writeln!(self.out).context("failed to write newline")?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }

    /// Like [`Prompt::read_line`], but a closed stream is an error because a
    /// field value is required to continue.
    pub(crate) fn ask(&mut self, label: &str) -> Result<String> {
        match self.read_line(label)? {
            Some(value) => Ok(value),
            None => Err(InputError::Closed(label.trim().trim_end_matches(':').to_string()).into()),
        }
    }

    pub(crate) fn ask_integer(&mut self, label: &str, field: &str) -> Result<i64> {
        let raw = self.ask(label)?;
        Ok(parse_integer(field, &raw)?)
    }
}

/// Coerce a typed value into an integer. This is the only validation the
/// catalog performs on user input.
pub(crate) fn parse_integer(field: &str, raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}
