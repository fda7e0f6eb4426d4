use serde::Serialize;
use wardrobe_runtime::FavoriteChange;
use wardrobe_types::{ItemType, Season};

#[derive(Debug, Clone, Serialize)]
pub struct ItemViewModel {
    pub id: u32,
    pub slot: ItemType,
    pub name: String,
    pub color: String,
    pub seasons: Vec<Season>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutfitViewModel {
    pub ids: [u32; 3],
    pub items: Vec<ItemViewModel>,
    pub favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateResultViewModel {
    pub season: Season,
    pub current: OutfitViewModel,
    /// Most recent first, current outfit included
    pub history: Vec<OutfitViewModel>,
    pub generated: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_change: Option<FavoriteChange>,
    pub favorites_count: usize,
}
