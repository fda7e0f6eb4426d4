use serde::Serialize;
use wardrobe_types::Season;

use super::ItemViewModel;

#[derive(Debug, Serialize)]
pub struct CatalogViewModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<Season>,
    pub items: Vec<ItemViewModel>,
}
