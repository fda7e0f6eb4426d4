use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_catalog;
use anyhow::Result;
use wardrobe_types::{Season, catalog};

pub fn handle(ctx: &ExecutionContext, season: Option<Season>) -> Result<()> {
    ctx.renderer()?.render(present_catalog(catalog(), season))
}
