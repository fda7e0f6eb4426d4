// Local key-value storage
// One owner, whole-value overwrites only; favorites are stored as JSON snapshots

mod error;
mod favorites;
mod kv;
mod sqlite;

pub use error::{Result, StoreError};
pub use favorites::{FAVORITES_KEY, decode_favorites, encode_favorites, load_favorites, save_favorites};
pub use kv::{KeyValueStore, MemoryStore};
pub use sqlite::SqliteStore;
