use wardrobe_engine::ComposeError;
use wardrobe_store::StoreError;
use wardrobe_types::{ItemId, ItemType};

/// Result type for wardrobe-runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Error types that can occur in the runtime layer
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// Storage layer error
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Outfit could not be composed
    #[error("Cannot generate outfit: {0}")]
    Compose(#[from] ComposeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Description toggle for an item that is not on screen
    #[error("Item {0} is not part of the current outfit")]
    ItemNotDisplayed(ItemId),

    /// Id not present in the catalog
    #[error("Unknown item id: {0}")]
    UnknownItem(ItemId),

    /// Id given for the wrong outfit slot
    #[error("Item {id} is {actual}, expected {expected}")]
    SlotMismatch {
        id: ItemId,
        expected: ItemType,
        actual: ItemType,
    },

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for RuntimeError {
    fn from(err: toml::de::Error) -> Self {
        RuntimeError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RuntimeError {
    fn from(err: toml::ser::Error) -> Self {
        RuntimeError::Config(err.to_string())
    }
}
