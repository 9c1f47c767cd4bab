//! JSON bodies for the session usage endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST {base}/{session_id}/usage`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    /// Megabytes consumed since the previous report.
    pub data_used_mb: f64,
}

/// Server reply to a usage or stop request.
///
/// Every field is optional: a success reply carries `success` and
/// `data_used_gb`, a failure reply carries only `error`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data_used_gb: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl UsageResponse {
    /// `true` unless the server explicitly reported failure.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.error.is_none() && self.success != Some(false)
    }
}

impl fmt::Display for UsageResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "error={error}");
        }
        match (self.success, self.data_used_gb) {
            (Some(ok), Some(gb)) => write!(f, "success={ok} data_used_gb={gb}"),
            (Some(ok), None) => write!(f, "success={ok}"),
            (None, Some(gb)) => write!(f, "data_used_gb={gb}"),
            (None, None) => f.write_str("{}"),
        }
    }
}
