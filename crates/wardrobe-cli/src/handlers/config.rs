use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::{present_config, present_season_set};
use anyhow::{Result, bail};
use wardrobe_types::Season;

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;
    let result = present_config(config, &ctx.config_path(), ctx.data_dir());
    ctx.renderer()?.render(result)
}

pub fn set_season(ctx: &ExecutionContext, season: Season) -> Result<()> {
    if ctx.ephemeral {
        bail!("config set-season writes config.toml and cannot run with --ephemeral");
    }

    let config_path = ctx.config_path();
    let mut config = ctx.config()?.clone();
    config.set_default_season(season);
    config.save_to(&config_path)?;
    tracing::info!(%season, path = %config_path.display(), "default season saved");

    ctx.renderer()?.render(present_season_set(season, &config_path))
}
