use super::enums::SeasonArg;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Draw random outfits for a season")]
    Generate {
        #[arg(long, help = "Season to draw for (default: configured season)")]
        season: Option<SeasonArg>,

        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=100))]
        count: u32,

        #[arg(long, help = "Seed the random draw for reproducible results")]
        seed: Option<u64>,

        #[arg(long, help = "Toggle the last drawn outfit in favorites")]
        favorite: bool,
    },

    #[command(about = "List catalog items")]
    Catalog {
        #[arg(long, help = "Only items wearable in this season")]
        season: Option<SeasonArg>,
    },

    #[command(about = "Manage favorite outfits")]
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommand,
    },

    #[command(about = "Show or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    #[command(about = "Open the interactive outfit composer")]
    Ui,
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    #[command(about = "List favorite outfits")]
    List,

    #[command(about = "Add an outfit to favorites, or remove it if already there")]
    Toggle {
        #[arg(help = "Top item id")]
        top: u32,

        #[arg(help = "Bottom item id")]
        bottom: u32,

        #[arg(help = "Shoes item id")]
        shoes: u32,
    },

    #[command(about = "Remove all favorites")]
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Show current configuration")]
    Show,

    #[command(about = "Set the season selected at startup")]
    SetSeason {
        season: SeasonArg,
    },
}
