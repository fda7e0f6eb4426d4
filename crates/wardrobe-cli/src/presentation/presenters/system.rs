use crate::presentation::view_models::{CommandResultViewModel, Guidance, GuidanceViewModel};
use std::path::Path;
use wardrobe_types::Season;

pub fn present_guidance(
    data_dir: &Path,
    default_season: Season,
    favorites_count: usize,
) -> CommandResultViewModel<GuidanceViewModel> {
    let mut result = CommandResultViewModel::new(GuidanceViewModel {
        data_dir: data_dir.display().to_string(),
        default_season,
        favorites_count,
    });

    if favorites_count > 0 {
        result = result.with_suggestion(
            Guidance::new("Review your saved outfits").with_command("wardrobe favorites list"),
        );
    }

    result.with_suggestion(Guidance::new("For more commands").with_command("wardrobe --help"))
}
