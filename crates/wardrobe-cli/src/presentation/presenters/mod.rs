mod catalog;
mod config;
mod favorites;
mod outfit;
mod system;

pub use catalog::present_catalog;
pub use config::{present_config, present_season_set};
pub use favorites::{
    mark_unsaved, present_favorite_list, present_favorite_toggle, present_favorites_cleared,
};
pub use outfit::{present_generate_result, present_item, present_outfit};
pub use system::present_guidance;
