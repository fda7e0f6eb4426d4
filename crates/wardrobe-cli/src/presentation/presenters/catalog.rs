use super::present_item;
use crate::presentation::view_models::{CatalogViewModel, CommandResultViewModel, StatusBadge};
use wardrobe_types::{ClothingItem, Season};

pub fn present_catalog(
    items: &[ClothingItem],
    season: Option<Season>,
) -> CommandResultViewModel<CatalogViewModel> {
    let items: Vec<_> = items
        .iter()
        .filter(|item| season.is_none_or(|s| item.is_in_season(s)))
        .map(present_item)
        .collect();

    let label = match season {
        Some(season) => format!("{} items for {}", items.len(), season),
        None => format!("{} items", items.len()),
    };

    CommandResultViewModel::new(CatalogViewModel { season, items })
        .with_badge(StatusBadge::info(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_types::catalog;

    #[test]
    fn test_catalog_filtered_by_season() {
        let result = present_catalog(catalog(), Some(Season::Summer));
        let ids: Vec<u32> = result.content.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 5, 6, 9]);
    }

    #[test]
    fn test_catalog_unfiltered_lists_everything() {
        let result = present_catalog(catalog(), None);
        assert_eq!(result.content.items.len(), 9);
        assert_eq!(result.badge.unwrap().label, "9 items");
    }
}
