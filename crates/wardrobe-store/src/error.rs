/// Result type for wardrobe-store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Error types that can occur in the storage layer
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be parsed as the expected structure
    #[error("Malformed payload under '{key}': {source}")]
    MalformedPayload {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be serialized
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_payload_names_key() {
        let source = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err = StoreError::MalformedPayload {
            key: "favorites".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("Malformed payload under 'favorites'"));
    }
}
