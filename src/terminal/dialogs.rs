//! Line-based dialogs

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

use crate::board::Dialogs;

/// Dialogs over a line reader and a writer
pub struct TerminalDialogs<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
    assume_yes: bool,
}

impl TerminalDialogs<io::StdinLock<'static>, io::Stdout> {
    /// Dialogs on the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalDialogs<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: RefCell::new(input),
            output: RefCell::new(output),
            assume_yes: false,
        }
    }

    /// Builder method: answer every confirmation with yes without asking
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Recover the writer (used by tests to inspect output)
    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn write(&self, text: &str, newline: bool) {
        let mut output = self.output.borrow_mut();
        let result = if newline {
            writeln!(output, "{text}")
        } else {
            write!(output, "{text}")
        };
        if let Err(e) = result.and_then(|_| output.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read from terminal");
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> Dialogs for TerminalDialogs<R, W> {
    fn prompt(&self, message: &str) -> Option<String> {
        self.write(&format!("{message} "), false);
        self.read_line()
    }

    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            self.write(&format!("{message} [y/N] y"), true);
            return true;
        }

        self.write(&format!("{message} [y/N] "), false);
        matches!(
            self.read_line().map(|answer| answer.trim().to_ascii_lowercase()).as_deref(),
            Some("y") | Some("yes")
        )
    }

    fn alert(&self, message: &str) {
        self.write(message, true);
    }
}
