use super::present_outfit;
use crate::presentation::view_models::{
    CommandResultViewModel, FavoriteListViewModel, FavoriteToggleViewModel,
    FavoritesClearedViewModel, Guidance, StatusBadge,
};
use serde::Serialize;
use wardrobe_runtime::{FavoriteChange, Favorites};
use wardrobe_types::Outfit;

pub fn present_favorite_list(
    favorites: &Favorites,
) -> CommandResultViewModel<FavoriteListViewModel> {
    let content = FavoriteListViewModel {
        favorites: favorites
            .iter()
            .map(|outfit| present_outfit(outfit, favorites))
            .collect(),
    };

    if favorites.is_empty() {
        return CommandResultViewModel::new(content)
            .with_badge(StatusBadge::info("No favorites yet"))
            .with_suggestion(
                Guidance::new("Draw an outfit and keep it")
                    .with_command("wardrobe generate --favorite"),
            );
    }

    let label = if favorites.len() == 1 {
        "1 favorite outfit".to_string()
    } else {
        format!("{} favorite outfits", favorites.len())
    };
    CommandResultViewModel::new(content).with_badge(StatusBadge::success(label))
}

pub fn present_favorite_toggle(
    outfit: &Outfit,
    change: FavoriteChange,
    favorites: &Favorites,
) -> CommandResultViewModel<FavoriteToggleViewModel> {
    let badge = match change {
        FavoriteChange::Added => StatusBadge::success("Added to favorites"),
        FavoriteChange::Removed { .. } => StatusBadge::info("Removed from favorites"),
    };

    CommandResultViewModel::new(FavoriteToggleViewModel {
        outfit: present_outfit(outfit, favorites),
        change,
        total: favorites.len(),
    })
    .with_badge(badge)
}

/// Downgrade the badge of a favorites change that only happened in memory
pub fn mark_unsaved<T: Serialize>(
    result: CommandResultViewModel<T>,
) -> CommandResultViewModel<T> {
    let label = match &result.badge {
        Some(badge) => format!("{} (not saved: --ephemeral)", badge.label),
        None => "Not saved: --ephemeral".to_string(),
    };
    result.with_badge(StatusBadge::warning(label))
}

pub fn present_favorites_cleared(
    removed: usize,
) -> CommandResultViewModel<FavoritesClearedViewModel> {
    let badge = if removed == 0 {
        StatusBadge::info("Favorites were already empty")
    } else {
        StatusBadge::success(format!("Removed {} favorite(s)", removed))
    };
    CommandResultViewModel::new(FavoritesClearedViewModel { removed }).with_badge(badge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::StatusLevel;

    #[test]
    fn test_mark_unsaved_keeps_label_as_warning() {
        let result = mark_unsaved(present_favorites_cleared(2));
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Warning);
        assert_eq!(badge.label, "Removed 2 favorite(s) (not saved: --ephemeral)");
    }
}
