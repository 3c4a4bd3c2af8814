use serde::{Deserialize, Serialize};

/// Outcome of one block attempt.
///
/// `status_code` is `None` when the request failed in transport (timeout,
/// DNS failure, connection reset); `response_text` then carries the error
/// description instead of a response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockResult {
    pub steam_id: String,
    pub status_code: Option<u16>,
    pub response_text: String,
    pub success: bool,
    /// Local wall-clock time of the attempt, `%Y-%m-%d %H:%M:%S`.
    pub timestamp: String,
}
