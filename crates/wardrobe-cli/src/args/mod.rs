// NOTE: Command Organization Rationale
//
// Why namespaced subcommands for favorites/config?
// - `generate` and `catalog` are single actions; favorites and config have several verbs
// - Keeps `wardrobe --help` short while `favorites --help` documents the rest

mod commands;
mod enums;

pub use commands::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "wardrobe")]
#[command(about = "Draw random seasonal outfits and keep your favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: $WARDROBE_PATH or the system data dir)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Keep favorites in memory only; nothing is written")]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
