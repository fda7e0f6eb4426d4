use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::{
    mark_unsaved, present_favorite_list, present_favorite_toggle, present_favorites_cleared,
};
use anyhow::Result;
use wardrobe_types::ItemId;

pub fn list(ctx: &ExecutionContext) -> Result<()> {
    let wardrobe = ctx.open_wardrobe()?;
    ctx.renderer()?.render(present_favorite_list(wardrobe.favorites()))
}

/// Toggle the outfit given as catalog ids in slot order
pub fn toggle(ctx: &ExecutionContext, ids: [u32; 3]) -> Result<()> {
    let mut wardrobe = ctx.open_wardrobe()?;
    let outfit = wardrobe.outfit_from_ids(ids.map(ItemId::new))?;
    let change = wardrobe.toggle_outfit(&outfit)?;

    let mut result = present_favorite_toggle(&outfit, change, wardrobe.favorites());
    if ctx.ephemeral {
        result = mark_unsaved(result);
    }
    ctx.renderer()?.render(result)
}

pub fn clear(ctx: &ExecutionContext) -> Result<()> {
    let mut wardrobe = ctx.open_wardrobe()?;
    let removed = wardrobe.clear_favorites()?;
    let mut result = present_favorites_cleared(removed);
    if ctx.ephemeral {
        result = mark_unsaved(result);
    }
    ctx.renderer()?.render(result)
}
