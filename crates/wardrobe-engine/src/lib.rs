// Engine module - outfit composition and view-state transitions
// Pure functions over owned state; persistence lives in wardrobe-store

mod compose;
mod favorites;
mod history;
mod view_state;

pub use compose::{ComposeError, generate_outfit};
pub use favorites::{FavoriteChange, Favorites};
pub use history::{HISTORY_LIMIT, History};
pub use view_state::{ViewState, toggle_info};
