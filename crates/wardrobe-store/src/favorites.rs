use wardrobe_engine::Favorites;
use wardrobe_types::Outfit;

use crate::{KeyValueStore, Result, StoreError};

/// Fixed key the favorites collection lives under
pub const FAVORITES_KEY: &str = "favorites";

pub fn encode_favorites(outfits: &[Outfit]) -> Result<String> {
    serde_json::to_string(outfits).map_err(StoreError::Encode)
}

pub fn decode_favorites(payload: &str) -> Result<Vec<Outfit>> {
    serde_json::from_str(payload).map_err(|source| StoreError::MalformedPayload {
        key: FAVORITES_KEY.to_string(),
        source,
    })
}

/// Startup load. Absent or malformed payloads yield an empty collection;
/// only failures of the store itself are returned.
pub fn load_favorites<S>(store: &S) -> Result<Favorites>
where
    S: KeyValueStore + ?Sized,
{
    let Some(payload) = store.get(FAVORITES_KEY)? else {
        tracing::debug!("no persisted favorites");
        return Ok(Favorites::new());
    };

    match decode_favorites(&payload) {
        Ok(outfits) => {
            tracing::debug!(count = outfits.len(), "loaded favorites");
            Ok(Favorites::from(outfits))
        }
        Err(err) => {
            tracing::debug!(error = %err, "ignoring malformed favorites payload");
            Ok(Favorites::new())
        }
    }
}

/// Serialize the whole collection and overwrite the stored value
pub fn save_favorites<S>(store: &mut S, favorites: &Favorites) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    let payload = encode_favorites(favorites.as_slice())?;
    store.put(FAVORITES_KEY, &payload)?;
    tracing::debug!(count = favorites.len(), "persisted favorites");
    Ok(())
}
