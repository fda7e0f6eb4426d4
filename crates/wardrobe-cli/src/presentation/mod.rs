//! # Presentation Layer
//!
//! Console output follows a strictly unidirectional flow:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                 ==(Text)==> [ View ] (Display)
//! ```
//!
//! ## Rules
//!
//! * **ViewModels carry raw data.** Ids stay integers, seasons stay enums, colors stay
//!   swatch names. `--format json` is an API and always dumps the full ViewModel.
//! * **Presenters decide content.** Badges and tips ("no favorites yet, try ...") are
//!   chosen in `presenters/`, never in views.
//! * **Views decide looks.** Layout, colors and truncation live in `views/` and use
//!   `formatters/`.
//!
//! The interactive composer (`crate::tui`) reuses the formatters for swatch colors but
//! renders with ratatui widgets instead of `Display`.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    ColorMode, CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel,
};
