use serde::Serialize;
use wardrobe_types::Season;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub config_path: String,
    pub data_dir: String,
    pub default_season: Season,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub color: bool,
}

#[derive(Debug, Serialize)]
pub struct SeasonSetViewModel {
    pub season: Season,
    pub config_path: String,
}
