use serde::Serialize;
use wardrobe_runtime::FavoriteChange;

use super::OutfitViewModel;

#[derive(Debug, Serialize)]
pub struct FavoriteListViewModel {
    pub favorites: Vec<OutfitViewModel>,
}

#[derive(Debug, Serialize)]
pub struct FavoriteToggleViewModel {
    pub outfit: OutfitViewModel,
    pub change: FavoriteChange,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct FavoritesClearedViewModel {
    pub removed: usize,
}
