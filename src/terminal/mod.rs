//! Terminal Host
//!
//! Stdin/stdout implementations of the board's capabilities, used by the
//! `activity-board` binary. Prompts and confirmations read a line each;
//! end of input counts as cancelling.

mod dialogs;
mod surface;

pub use dialogs::TerminalDialogs;
pub use surface::{render_text, TerminalSurface};
