//! API Client
//!
//! gloo-net transport for the activities server.

pub mod client;

pub use client::{get_api_base, GlooActivityApi};
