//! Numbered choice menu.
//!
//! The menu is written to the diagnostic stream and the answer read one line
//! at a time. Anything that is not a number in `1..=N` redraws the menu and
//! reads again; there is no limit on retries and no timeout.

use std::io::{BufRead, Write};

use crate::error::{LibscoutError, Result};

/// Blocking numbered menu over a line reader and a writer.
pub struct ChoiceDialog<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ChoiceDialog<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask the user to pick one of `items`, labelled by `label`.
    ///
    /// Returns the zero-based index of the chosen item. End of input is
    /// reported as [`LibscoutError::SelectionAborted`].
    pub fn choose<T>(&mut self, items: &[T], what: &str, label: impl Fn(&T) -> String) -> Result<usize> {
        if items.is_empty() {
            return Err(LibscoutError::SelectionAborted {
                message: format!("no {} to choose from", what),
            });
        }

        loop {
            writeln!(self.output, " Multiple incarnations of {} were found.", what)?;
            writeln!(self.output, " Select one:")?;
            writeln!(self.output)?;
            for (n, item) in items.iter().enumerate() {
                writeln!(self.output, "   ({}) {}", n + 1, label(item))?;
            }
            writeln!(self.output)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(LibscoutError::SelectionAborted {
                    message: format!("input closed while choosing {}", what),
                });
            }

            match line.trim().parse::<usize>() {
                Ok(n) if (1..=items.len()).contains(&n) => return Ok(n - 1),
                _ => tracing::debug!("rejected choice {:?}", line.trim()),
            }
        }
    }

    /// Consume the dialog, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}
