use once_cell::sync::Lazy;

use crate::domain::{ClothingItem, ItemId, ItemType, Season};

use ItemType::{Bottoms, Shoes, Tops};
use Season::{Fall, Spring, Summer, Winter};

static CATALOG: Lazy<Vec<ClothingItem>> = Lazy::new(|| {
    vec![
        ClothingItem::new(1, Tops, "Tシャツ", "red", &[Spring, Summer], "軽くて涼しい綿100%のTシャツ"),
        ClothingItem::new(2, Tops, "シャツ", "blue", &[Spring, Fall], "オックスフォード生地の長袖シャツ"),
        ClothingItem::new(3, Tops, "セーター", "green", &[Fall, Winter], "暖かいウールのセーター"),
        ClothingItem::new(4, Bottoms, "ジーンズ", "indigo", &[Spring, Fall, Winter], "クラシックなストレートジーンズ"),
        ClothingItem::new(5, Bottoms, "チノパン", "yellow", &[Spring, Summer, Fall], "快適なストレッチチノパン"),
        ClothingItem::new(6, Bottoms, "スカート", "pink", &[Spring, Summer], "Aラインのミディアムスカート"),
        ClothingItem::new(7, Shoes, "スニーカー", "purple", &[Spring, Summer, Fall], "軽量で快適なランニングシューズ"),
        ClothingItem::new(8, Shoes, "ブーツ", "gray", &[Fall, Winter], "防水レザーのアンクルブーツ"),
        ClothingItem::new(9, Shoes, "サンダル", "orange", &[Summer], "ビーチにぴったりのフラットサンダル"),
    ]
});

/// The fixed, read-only clothing catalog
pub fn catalog() -> &'static [ClothingItem] {
    &CATALOG
}

pub fn find_item(id: ItemId) -> Option<&'static ClothingItem> {
    CATALOG.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = catalog().iter().map(|item| item.id).collect();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn test_every_season_fills_every_slot() {
        for season in Season::ALL {
            for slot in ItemType::SLOTS {
                assert!(
                    catalog()
                        .iter()
                        .any(|item| item.kind == slot && item.is_in_season(season)),
                    "no {} for {}",
                    slot,
                    season
                );
            }
        }
    }

    #[test]
    fn test_every_item_has_a_season() {
        assert!(catalog().iter().all(|item| !item.season.is_empty()));
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item(ItemId::new(8)).map(|i| i.name.as_str()), Some("ブーツ"));
        assert!(find_item(ItemId::new(42)).is_none());
    }
}
