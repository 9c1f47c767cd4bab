//! The page behaviors and their shared DOM glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module keeps its decision logic in plain functions (tested natively)
//! and its `web-sys` wiring behind the `browser` feature.

pub mod clipboard;
pub mod dom;
pub mod form_validation;
pub mod notify;
pub mod smooth_scroll;
pub mod usage_reporter;
