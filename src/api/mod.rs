//! Activities REST API
//!
//! Client side of the three endpoints the board talks to.
//!
//! # Endpoints
//!
//! - `GET /activities` - Full catalog, keyed by activity name
//! - `POST /activities/{name}/signup?email=...` - Register a participant
//! - `DELETE /activities/{name}/participants?email=...` - Remove a participant
//!
//! Both mutating endpoints answer `{"message": ...}` on success and
//! `{"detail": ...}` on failure. Any non-2xx status counts as a failure.
//!
//! # Transports
//!
//! [`ActivityApi`] is the seam between the board and the network. The native
//! build ships [`HttpActivityApi`] on top of reqwest; the browser crate
//! implements the same trait with gloo-net.

pub mod client;
pub mod dto;
pub mod error;
#[cfg(feature = "native")]
pub mod http;
pub mod paths;

pub use client::ActivityApi;
pub use dto::{ErrorDetail, MessageResponse};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::HttpActivityApi;
