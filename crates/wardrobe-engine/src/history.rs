use serde::Serialize;
use wardrobe_types::Outfit;

/// Maximum number of outfits kept in history
pub const HISTORY_LIMIT: usize = 5;

/// Recently generated outfits, most recent first. Session-local, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<Outfit>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an outfit, dropping the oldest entries beyond the limit
    pub fn record(&mut self, outfit: Outfit) {
        self.entries.insert(0, outfit);
        self.entries.truncate(HISTORY_LIMIT);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outfit> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Outfit> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Outfit] {
        &self.entries
    }
}
