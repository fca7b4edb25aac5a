//! # Activity Board
//!
//! Client for a school-activities signup service: fetches the activity
//! catalog, renders it as cards with participant rosters, and lets a user
//! sign up for or unregister from an activity.
//!
//! ## Modules
//!
//! - [`catalog`]: Activity records and the order-preserving catalog
//! - [`api`]: Transport trait, request paths and the reqwest client
//! - [`board`]: The `ActivityBoard` controller and its render model
//! - [`config`]: TOML configuration with environment overrides
//! - `terminal`: Stdin/stdout host for the CLI (feature `native`)
//!
//! The browser host lives in the separate `board-ui` crate and builds the
//! same `ActivityBoard` on top of gloo-net and `window` dialogs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_board::{ActivityBoard, HttpActivityApi, TerminalDialogs, TerminalSurface};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let board = ActivityBoard::new(
//!         HttpActivityApi::new("http://localhost:8000"),
//!         TerminalDialogs::stdio(),
//!         TerminalSurface::stdout(),
//!     );
//!
//!     board.fetch_activities().await;
//!     board.signup_for_activity("Chess Club").await;
//! }
//! ```

pub mod api;
pub mod board;
pub mod catalog;
pub mod config;
#[cfg(feature = "native")]
pub mod terminal;

pub use api::{ActivityApi, ApiError, ApiResult, ErrorDetail, MessageResponse};
#[cfg(feature = "native")]
pub use api::HttpActivityApi;

pub use board::{
    ActionOutcome, ActivityBoard, ActivityCard, BoardSurface, BoardView, CatalogView, Dialogs,
    FormMessage, MessageKind, RosterEntry,
};

pub use catalog::{ActivityCatalog, ActivityRecord};

pub use config::{ApiConfig, BoardConfig, Config, ConfigError, LoggingConfig};

#[cfg(feature = "native")]
pub use terminal::{TerminalDialogs, TerminalSurface};
