use wardrobe_types::{ItemId, ItemType, Season, catalog, find_item};

fn eligible(season: Season, slot: ItemType) -> Vec<u32> {
    catalog()
        .iter()
        .filter(|item| item.kind == slot && item.is_in_season(season))
        .map(|item| item.id.get())
        .collect()
}

#[test]
fn test_summer_pools() {
    assert_eq!(eligible(Season::Summer, ItemType::Tops), vec![1]);
    assert_eq!(eligible(Season::Summer, ItemType::Bottoms), vec![5, 6]);
    assert_eq!(eligible(Season::Summer, ItemType::Shoes), vec![9]);
}

#[test]
fn test_winter_pools_have_single_candidates() {
    assert_eq!(eligible(Season::Winter, ItemType::Tops), vec![3]);
    assert_eq!(eligible(Season::Winter, ItemType::Bottoms), vec![4]);
    assert_eq!(eligible(Season::Winter, ItemType::Shoes), vec![8]);
}

#[test]
fn test_catalog_item_snapshot_format() {
    let tshirt = find_item(ItemId::new(1)).unwrap();
    insta::assert_json_snapshot!(tshirt, @r#"
    {
      "id": 1,
      "type": "tops",
      "name": "Tシャツ",
      "color": "red",
      "season": [
        "spring",
        "summer"
      ],
      "description": "軽くて涼しい綿100%のTシャツ"
    }
    "#);
}
