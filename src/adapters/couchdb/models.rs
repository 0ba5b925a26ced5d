//! CouchDB wire models
//!
//! Response shapes specific to the CouchDB REST API.

use serde::{Deserialize, Serialize};

/// Acknowledgment returned by CouchDB for writes and deletes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteReceipt {
    /// Whether the operation was applied
    pub ok: bool,

    /// Identity of the affected document
    pub id: String,

    /// Revision produced by the operation
    pub rev: String,
}

/// Error body CouchDB attaches to non-success responses
///
/// Looks like `{"error": "not_found", "reason": "missing"}`. The `reason`
/// is the human-readable half and is what gets propagated to callers.
#[derive(Debug, Clone, Deserialize)]
pub struct CouchErrorBody {
    /// Machine-readable error tag
    pub error: String,

    /// Human-readable explanation (absent on some proxies)
    #[serde(default)]
    pub reason: Option<String>,
}

impl CouchErrorBody {
    /// The message to propagate: the reason when present, the tag otherwise
    pub fn message(self) -> String {
        self.reason.unwrap_or(self.error)
    }
}
