pub mod catalog;
pub mod common;
pub mod config;
pub mod favorites;
pub mod outfit;
pub mod result;
pub mod system;

pub use catalog::CatalogViewModel;
pub use common::{ColorMode, CreateView, Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigViewModel, SeasonSetViewModel};
pub use favorites::{FavoriteListViewModel, FavoriteToggleViewModel, FavoritesClearedViewModel};
pub use outfit::{GenerateResultViewModel, ItemViewModel, OutfitViewModel};
pub use result::CommandResultViewModel;
pub use system::GuidanceViewModel;
