//! Line-oriented prompt host for terminals and scripted input.

use std::io::{self, BufRead, Stdout, Write};

use anyhow::{Context, Result};

use super::{Dialog, PromptDialog, CONFIRM_LABEL};

/// A line holding only this character dismisses the prompt.
pub const ESCAPE: &str = "\u{1b}";

/// Presents prompts over a reader/writer pair.
///
/// The default value is shown in brackets. An empty line keeps it, any other
/// line replaces it, and end of input dismisses the prompt.
pub struct TerminalDialog<I, O> {
    input: I,
    output: O,
}

impl TerminalDialog<io::StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, O: Write> TerminalDialog<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read prompt input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

impl<I: BufRead, O: Write> Dialog for TerminalDialog<I, O> {
    fn present<F, R>(&mut self, mut dialog: PromptDialog<F>) -> Result<Option<R>>
    where
        F: FnOnce(String) -> R,
    {
        dialog.open()?;
        writeln!(self.output, "# {}", dialog.title())?;
        write!(self.output, "[{}] ({CONFIRM_LABEL} = Enter) > ", dialog.value())?;
        self.output.flush()?;

        let line = match self.read_line()? {
            Some(line) if line != ESCAPE => line,
            _ => {
                dialog.dismiss();
                writeln!(self.output)?;
                return Ok(None);
            }
        };
        if !line.is_empty() {
            dialog.on_change(line)?;
        }
        Ok(Some(dialog.confirm()?))
    }
}
