//! Activity Board
//!
//! The page controller and everything it renders:
//!
//! - **controller**: `ActivityBoard`, the fetch / signup / unregister actions
//! - **surface**: `Dialogs` and `BoardSurface`, supplied by each host
//! - **view**: the render model built from a catalog
//!
//! # Flow
//!
//! ```text
//! start → fetch → render cards + selector options
//! action → mutating request → ok:  notice, fetch, render
//!                           → err: notice only
//! ```

mod controller;
mod surface;
#[cfg(test)]
mod testing;
mod view;

pub use controller::{
    ActionOutcome, ActivityBoard, DEFAULT_MESSAGE_HIDE, EMAIL_PROMPT, GENERIC_ERROR, LOAD_FAILED,
    SIGNUP_FAILED, SIGNUP_SUCCEEDED, UNREGISTER_FAILED, UNREGISTER_REJECTED, UNREGISTER_SUCCEEDED,
};
pub use surface::{BoardSurface, Dialogs};
pub use view::{
    ActivityCard, BoardView, CatalogView, FormMessage, MessageKind, RosterEntry, NO_PARTICIPANTS,
};
