use serde::Serialize;
use wardrobe_types::Season;

#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: String,
    pub default_season: Season,
    pub favorites_count: usize,
}
