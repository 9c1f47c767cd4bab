//! # ui-utils
//!
//! Browser-side conveniences for server-rendered pages, compiled to
//! WebAssembly: notification auto-hide, clipboard copy, required-field form
//! validation, a simulated session usage reporter and smooth anchor
//! scrolling.
//!
//! Browser wiring sits behind the `browser` feature. Without it the crate
//! builds natively and exposes the decision logic each behavior runs on, so
//! the test suite needs no browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Timings, selectors and messages, with an optional page override |
//! | [`net`] | Usage endpoint paths, wire bodies and HTTP calls |
//! | [`util`] | The behaviors and their shared DOM glue |

pub mod config;
pub mod net;
pub mod util;

#[cfg(feature = "browser")]
mod bindings;

#[cfg(feature = "browser")]
pub use bindings::*;
