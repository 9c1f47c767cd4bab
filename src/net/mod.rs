//! Networking for the per-session usage endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds endpoint paths and performs the HTTP calls, `types` defines
//! the JSON bodies exchanged with the server.

pub mod api;
pub mod types;
