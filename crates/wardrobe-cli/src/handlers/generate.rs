use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_generate_result;
use anyhow::Result;
use wardrobe_types::Season;

pub fn handle(
    ctx: &ExecutionContext,
    season: Option<Season>,
    count: u32,
    seed: Option<u64>,
    favorite: bool,
) -> Result<()> {
    let mut wardrobe = ctx.open_wardrobe()?;
    if let Some(seed) = seed {
        wardrobe = wardrobe.with_seed(seed);
    }
    if let Some(season) = season {
        wardrobe.select_season(season);
    }

    let mut outfit = wardrobe.generate()?;
    for _ in 1..count {
        outfit = wardrobe.generate()?;
    }

    let change = if favorite {
        wardrobe.toggle_favorite()?
    } else {
        None
    };

    let result = present_generate_result(
        wardrobe.view(),
        &outfit,
        wardrobe.favorites(),
        count,
        change,
    );
    ctx.renderer()?.render(result)
}
