pub mod config;
pub mod error;
mod wardrobe;

pub use config::{Config, DisplayConfig, GeneratorConfig, expand_tilde, resolve_data_dir};
pub use error::{Result, RuntimeError};
pub use wardrobe::Wardrobe;

// Re-exports so front ends only need this crate
pub use wardrobe_engine::{FavoriteChange, Favorites, HISTORY_LIMIT, History, ViewState};
pub use wardrobe_store::{KeyValueStore, MemoryStore, SqliteStore};
