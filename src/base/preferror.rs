use thiserror::Error;

/// Errors from preference storage persistence.
///
/// Only the disk persistence layer can fail. Everything reachable from the
/// load / apply / save cycle degrades silently: a missing cookie loads the
/// default, a malformed id list drops the bad entries, and an empty
/// card-set catalog reconciles to three empty partitions.
#[derive(Debug, Error)]
pub enum PrefError {
    #[error("cookie jar I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("cookie jar serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl PrefError {
    /// Whether retrying the operation could succeed.
    ///
    /// Serialization failures are deterministic; I/O failures may be
    /// transient (full disk, permissions fixed later).
    pub fn is_retryable(&self) -> bool {
        matches!(self, PrefError::Io(_))
    }
}
