use crate::context::ExecutionContext;
use crate::tui;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let wardrobe = ctx.open_wardrobe()?;
    tui::run(wardrobe)
}
