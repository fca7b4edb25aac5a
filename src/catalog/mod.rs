//! Activity Catalog
//!
//! Client-side view of the server's activity list:
//!
//! - **types**: `ActivityRecord` and the order-preserving `ActivityCatalog`
//!
//! The catalog is never merged or patched. Every successful fetch produces a
//! brand new value that replaces the previous one wholesale.

mod types;

pub use types::{ActivityCatalog, ActivityRecord};
