//! Board Capabilities
//!
//! The two things a host has to provide besides a transport: blocking
//! dialogs and a place to render into.

use std::time::Duration;

use super::view::{BoardView, FormMessage};

/// Blocking user dialogs
///
/// Each call completes before the triggering action continues or aborts.
pub trait Dialogs {
    /// Ask for a line of text. `None` means the user cancelled.
    fn prompt(&self, message: &str) -> Option<String>;

    /// Ask a yes/no question
    fn confirm(&self, message: &str) -> bool;

    /// Show a message and wait for acknowledgement
    fn alert(&self, message: &str);
}

/// Where the board draws itself
///
/// The surface owns the activities region, the signup form's selector and
/// fields, and the inline message area.
pub trait BoardSurface {
    /// Replace everything in the activities region and the selector options
    fn render(&self, view: BoardView);

    /// Show an inline message under the form and hide it again after
    /// `hide_after`, unless a newer message has replaced it by then
    fn show_form_message(&self, message: FormMessage, hide_after: Duration);

    /// Clear the form's fields
    fn reset_form(&self);
}
