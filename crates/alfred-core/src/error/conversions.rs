//! From trait implementations for AlfredError conversions

use super::types::AlfredError;

impl From<anyhow::Error> for AlfredError {
    fn from(error: anyhow::Error) -> Self {
        Self::other(error.to_string())
    }
}

impl From<std::io::Error> for AlfredError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for AlfredError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
