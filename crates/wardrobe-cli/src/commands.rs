use super::args::{Cli, Commands, ConfigCommand, FavoritesCommand};
use super::context::ExecutionContext;
use super::handlers;
use super::logging::{self, LogTarget};
use anyhow::Result;
use std::path::Path;
use wardrobe_runtime::resolve_data_dir;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    let ctx = ExecutionContext::new(data_dir, cli.format, cli.ephemeral);

    let log_path = ctx.log_path();
    let target = log_target(cli.command.as_ref(), cli.ephemeral, &log_path);
    logging::init(cli.log_level, target)?;

    let Some(command) = cli.command else {
        return handlers::guidance::handle(&ctx);
    };

    match command {
        Commands::Generate {
            season,
            count,
            seed,
            favorite,
        } => handlers::generate::handle(&ctx, season.map(Into::into), count, seed, favorite),

        Commands::Catalog { season } => handlers::catalog::handle(&ctx, season.map(Into::into)),

        Commands::Favorites { command } => match command {
            FavoritesCommand::List => handlers::favorites::list(&ctx),
            FavoritesCommand::Toggle { top, bottom, shoes } => {
                handlers::favorites::toggle(&ctx, [top, bottom, shoes])
            }
            FavoritesCommand::Clear => handlers::favorites::clear(&ctx),
        },

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::SetSeason { season } => handlers::config::set_season(&ctx, season.into()),
        },

        Commands::Ui => handlers::ui::handle(&ctx),
    }
}

/// The TUI owns stderr, so it logs to a file, or nowhere when nothing may be written
fn log_target<'a>(
    command: Option<&Commands>,
    ephemeral: bool,
    log_path: &'a Path,
) -> LogTarget<'a> {
    match command {
        Some(Commands::Ui) if ephemeral => LogTarget::Discard,
        Some(Commands::Ui) => LogTarget::File(log_path),
        _ => LogTarget::Stderr,
    }
}
