pub mod swatch;
pub mod text;

pub use swatch::{ansi_color, swatch, tui_color};
pub use text::{season_list, truncate};
