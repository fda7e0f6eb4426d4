use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_guidance;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;

    // Avoid creating the database just to count favorites
    let favorites_count = if !ctx.ephemeral && ctx.db_path().exists() {
        ctx.open_wardrobe()?.favorites().len()
    } else {
        0
    };

    let result = present_guidance(
        ctx.data_dir(),
        config.generator.default_season,
        favorites_count,
    );
    ctx.renderer()?.render(result)
}
