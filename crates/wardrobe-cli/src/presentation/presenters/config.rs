use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, SeasonSetViewModel, StatusBadge,
};
use std::path::Path;
use wardrobe_runtime::Config;
use wardrobe_types::Season;

pub fn present_config(
    config: &Config,
    config_path: &Path,
    data_dir: &Path,
) -> CommandResultViewModel<ConfigViewModel> {
    let content = ConfigViewModel {
        config_path: config_path.display().to_string(),
        data_dir: data_dir.display().to_string(),
        default_season: config.generator.default_season,
        seed: config.generator.seed,
        color: config.display.color,
    };

    let mut result = CommandResultViewModel::new(content);
    if !config_path.exists() {
        result = result
            .with_badge(StatusBadge::info("Using built-in defaults"))
            .with_suggestion(
                Guidance::new("Pick the season selected at startup")
                    .with_command("wardrobe config set-season winter"),
            );
    }
    result
}

pub fn present_season_set(
    season: Season,
    config_path: &Path,
) -> CommandResultViewModel<SeasonSetViewModel> {
    CommandResultViewModel::new(SeasonSetViewModel {
        season,
        config_path: config_path.display().to_string(),
    })
    .with_badge(StatusBadge::success(format!("Default season set to {}", season)))
}
