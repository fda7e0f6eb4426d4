use serde::{Deserialize, Serialize};

use super::item::{ClothingItem, ItemId};

/// One top, one bottom and one pair of shoes, in that order.
///
/// Serialized as a three-element array of full item records. Outfits are
/// values: they are replaced, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outfit([ClothingItem; 3]);

impl Outfit {
    pub fn new(top: ClothingItem, bottom: ClothingItem, shoes: ClothingItem) -> Self {
        Self([top, bottom, shoes])
    }

    pub fn top(&self) -> &ClothingItem {
        &self.0[0]
    }

    pub fn bottom(&self) -> &ClothingItem {
        &self.0[1]
    }

    pub fn shoes(&self) -> &ClothingItem {
        &self.0[2]
    }

    pub fn items(&self) -> &[ClothingItem; 3] {
        &self.0
    }

    pub fn ids(&self) -> [ItemId; 3] {
        [self.0[0].id, self.0[1].id, self.0[2].id]
    }

    pub fn contains_item(&self, id: ItemId) -> bool {
        self.0.iter().any(|item| item.id == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&ClothingItem> {
        self.0.iter().find(|item| item.id == id)
    }
}

/// Positional id equality: two outfits match iff their three item ids match slot by slot.
///
/// Favorites are snapshots, so this deliberately ignores every other field.
pub fn outfits_match(a: &Outfit, b: &Outfit) -> bool {
    a.ids() == b.ids()
}
