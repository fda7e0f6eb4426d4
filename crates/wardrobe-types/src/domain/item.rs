use serde::{Deserialize, Serialize};
use std::fmt;

use super::season::Season;

/// Stable identity key of a catalog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Outfit slot an item fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Tops,
    Bottoms,
    Shoes,
}

impl ItemType {
    /// Slots in outfit order
    pub const SLOTS: [ItemType; 3] = [ItemType::Tops, ItemType::Bottoms, ItemType::Shoes];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Tops => "tops",
            ItemType::Bottoms => "bottoms",
            ItemType::Shoes => "shoes",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog entry.
///
/// Favorites embed full copies of these records, so a favorited item keeps the
/// field values it had when it was favorited even if the catalog changes later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: ItemId,
    #[serde(rename = "type")]
    pub kind: ItemType,
    pub name: String,
    /// Swatch name (`red`, `indigo`, ...) used when rendering
    pub color: String,
    pub season: Vec<Season>,
    pub description: String,
}

impl ClothingItem {
    pub fn new(
        id: u32,
        kind: ItemType,
        name: impl Into<String>,
        color: impl Into<String>,
        season: &[Season],
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::new(id),
            kind,
            name: name.into(),
            color: color.into(),
            season: season.to_vec(),
            description: description.into(),
        }
    }

    pub fn is_in_season(&self, season: Season) -> bool {
        self.season.contains(&season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_is_named_type() {
        let item = ClothingItem::new(
            1,
            ItemType::Tops,
            "Tシャツ",
            "red",
            &[Season::Spring, Season::Summer],
            "軽くて涼しい綿100%のTシャツ",
        );
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["type"], "tops");
        assert_eq!(json["id"], 1);
        assert_eq!(json["season"], serde_json::json!(["spring", "summer"]));
    }

    #[test]
    fn test_is_in_season() {
        let item = ClothingItem::new(9, ItemType::Shoes, "サンダル", "orange", &[Season::Summer], "");
        assert!(item.is_in_season(Season::Summer));
        assert!(!item.is_in_season(Season::Winter));
    }
}
