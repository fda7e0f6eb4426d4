use crate::presentation::view_models::{
    CommandResultViewModel, GenerateResultViewModel, Guidance, ItemViewModel, OutfitViewModel,
    StatusBadge,
};
use wardrobe_runtime::{FavoriteChange, Favorites, ViewState};
use wardrobe_types::{ClothingItem, Outfit};

pub fn present_item(item: &ClothingItem) -> ItemViewModel {
    ItemViewModel {
        id: item.id.get(),
        slot: item.kind,
        name: item.name.clone(),
        color: item.color.clone(),
        seasons: item.season.clone(),
        description: item.description.clone(),
    }
}

pub fn present_outfit(outfit: &Outfit, favorites: &Favorites) -> OutfitViewModel {
    OutfitViewModel {
        ids: outfit.ids().map(|id| id.get()),
        items: outfit.items().iter().map(present_item).collect(),
        favorite: favorites.contains(outfit),
    }
}

pub fn present_generate_result(
    view: &ViewState,
    current: &Outfit,
    favorites: &Favorites,
    generated: u32,
    favorite_change: Option<FavoriteChange>,
) -> CommandResultViewModel<GenerateResultViewModel> {
    let current_vm = present_outfit(current, favorites);
    let is_favorite = current_vm.favorite;

    let content = GenerateResultViewModel {
        season: view.season,
        current: current_vm,
        history: view
            .history
            .iter()
            .map(|outfit| present_outfit(outfit, favorites))
            .collect(),
        generated,
        favorite_change,
        favorites_count: favorites.len(),
    };

    let label = match favorite_change {
        Some(FavoriteChange::Added) => format!("{} outfit saved to favorites", view.season),
        Some(FavoriteChange::Removed { .. }) => {
            format!("{} outfit removed from favorites", view.season)
        }
        None => format!("{} outfit generated", view.season),
    };

    let mut result = CommandResultViewModel::new(content).with_badge(StatusBadge::success(label));

    if favorite_change.is_none() && !is_favorite {
        result = result.with_suggestion(
            Guidance::new("Like it? Keep this outfit").with_command(format!(
                "wardrobe favorites toggle {}",
                current.ids().map(|id| id.to_string()).join(" ")
            )),
        );
    }

    result
}
