//! Plain-text rendering

use std::cell::RefCell;
use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use crate::board::{BoardSurface, BoardView, FormMessage, MessageKind, RosterEntry, NO_PARTICIPANTS};

/// Render a board view as text
pub fn render_text(view: &BoardView) -> String {
    let mut out = String::new();

    match view {
        BoardView::Loading => out.push_str("Loading activities...\n"),
        BoardView::Failed(notice) => {
            let _ = writeln!(out, "{notice}");
        }
        BoardView::Catalog(catalog) if catalog.cards.is_empty() => {
            out.push_str("No activities available.\n");
        }
        BoardView::Catalog(catalog) => {
            for (idx, card) in catalog.cards.iter().enumerate() {
                if idx > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}", card.name);
                let _ = writeln!(out, "  {}", card.description);
                let _ = writeln!(out, "  Schedule: {}", card.schedule);
                let _ = writeln!(out, "  Capacity: {}", card.capacity);
                let _ = writeln!(out, "  Participants ({}):", card.participant_count);
                for entry in &card.roster {
                    match entry {
                        RosterEntry::Participant { email } => {
                            let _ = writeln!(out, "    - {email}");
                        }
                        RosterEntry::Placeholder => {
                            let _ = writeln!(out, "    {NO_PARTICIPANTS}");
                        }
                    }
                }
            }
        }
    }

    out
}

/// Surface writing to a terminal
///
/// A terminal has no form to clear and printed messages scroll away on
/// their own, so the hide delay is not acted on.
pub struct TerminalSurface<W> {
    output: RefCell<W>,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: RefCell::new(output),
        }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }

    fn write(&self, text: &str) {
        let mut output = self.output.borrow_mut();
        if let Err(e) = output.write_all(text.as_bytes()).and_then(|_| output.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

impl<W: Write> BoardSurface for TerminalSurface<W> {
    fn render(&self, view: BoardView) {
        self.write(&render_text(&view));
    }

    fn show_form_message(&self, message: FormMessage, _hide_after: Duration) {
        let label = match message.kind {
            MessageKind::Success => "ok",
            MessageKind::Error => "error",
        };
        self.write(&format!("[{label}] {}\n", message.text));
    }

    fn reset_form(&self) {}
}
