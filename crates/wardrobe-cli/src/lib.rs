// NOTE: wardrobe Architecture Rationale
//
// Why one process = one session?
// - History is session-local by definition; only favorites are durable
// - `generate --count N` and the `ui` command are the two ways to build up history
// - Favorites are written through on every change, so concurrent one-shot commands
//   only ever replace the whole value
//
// Why snapshots in favorites (not ids)?
// - A favorite keeps looking the way it did when it was saved
// - Catalog edits never invalidate stored favorites; stale ids are harmless

mod args;
mod commands;
pub mod context;
mod handlers;
mod logging;
pub mod presentation;
mod tui;

pub use args::{Cli, Commands, ConfigCommand, FavoritesCommand, LogLevel, OutputFormat, SeasonArg};
pub use commands::run;
