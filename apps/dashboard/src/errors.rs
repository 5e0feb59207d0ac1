use thiserror::Error;

/// Errors raised by the profile store and its storage slots.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot holds something that is not a JSON object.
    /// The in-memory record is left untouched when this is returned.
    #[error("Corrupt state in slot '{key}': {reason}")]
    CorruptState { key: String, reason: String },

    #[error("Invalid slot key: {0:?}")]
    InvalidKey(String),

    #[error("Invalid patch: {0}")]
    InvalidPatch(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub fn corrupt(key: &str, reason: impl ToString) -> Self {
        StoreError::CorruptState {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True when the failure came from unreadable persisted content rather
    /// than from the storage medium itself.
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, StoreError::CorruptState { .. })
    }
}
