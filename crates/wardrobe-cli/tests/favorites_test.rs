use wardrobe_testing::TestWorld;
use wardrobe_testing::assertions::{assert_favorite_count, outfit_ids};

#[test]
fn test_favorites_start_empty() {
    let world = TestWorld::new();

    let json = world.run_json(&["favorites", "list"]).unwrap().json().unwrap();
    assert_favorite_count(&json, 0).unwrap();
    assert_eq!(json["badge"]["label"], "No favorites yet");
}

#[test]
fn test_toggle_adds_then_removes() {
    let world = TestWorld::new();

    let added = world
        .run_json(&["favorites", "toggle", "1", "5", "9"])
        .unwrap();
    assert!(added.success(), "stderr: {}", added.stderr());
    let json = added.json().unwrap();
    assert_eq!(json["content"]["change"]["change"], "added");
    assert_eq!(json["content"]["total"], 1);

    world.run_json(&["favorites", "toggle", "3", "4", "8"]).unwrap();

    let list = world.run_json(&["favorites", "list"]).unwrap().json().unwrap();
    assert_favorite_count(&list, 2).unwrap();
    let favorites = list["content"]["favorites"].as_array().unwrap();
    assert_eq!(outfit_ids(&favorites[0]).unwrap(), vec![1, 5, 9]);
    assert_eq!(outfit_ids(&favorites[1]).unwrap(), vec![3, 4, 8]);

    let removed = world
        .run_json(&["favorites", "toggle", "1", "5", "9"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(removed["content"]["change"]["change"], "removed");
    assert_eq!(removed["content"]["change"]["count"], 1);

    let list = world.run_json(&["favorites", "list"]).unwrap().json().unwrap();
    assert_favorite_count(&list, 1).unwrap();
}

#[test]
fn test_toggle_rejects_wrong_slot() {
    let world = TestWorld::new();

    let result = world.run(&["favorites", "toggle", "5", "1", "9"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Item 5 is bottoms, expected tops"));

    let result = world.run(&["favorites", "toggle", "1", "5", "99"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Unknown item id: 99"));
}

#[test]
fn test_clear_removes_everything() {
    let world = TestWorld::new();
    world.run(&["favorites", "toggle", "1", "5", "9"]).unwrap();
    world.run(&["favorites", "toggle", "2", "4", "7"]).unwrap();

    let json = world.run_json(&["favorites", "clear"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["removed"], 2);

    let list = world.run_json(&["favorites", "list"]).unwrap().json().unwrap();
    assert_favorite_count(&list, 0).unwrap();
}

#[test]
fn test_malformed_stored_favorites_are_ignored() {
    let world = TestWorld::new();
    world.run(&["favorites", "toggle", "1", "5", "9"]).unwrap();

    corrupt_favorites(&world);

    let result = world.run_json(&["favorites", "list"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().is_empty());
    assert_favorite_count(&result.json().unwrap(), 0).unwrap();
}

#[test]
fn test_ephemeral_writes_nothing() {
    let world = TestWorld::new();

    let result = world
        .run_json(&["--ephemeral", "favorites", "toggle", "1", "5", "9"])
        .unwrap();
    assert!(result.success());
    assert!(!world.db_path().exists());

    let json = result.json().unwrap();
    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(
        json["badge"]["label"],
        "Added to favorites (not saved: --ephemeral)"
    );
}

/// Overwrite the stored favorites with text that is not JSON
fn corrupt_favorites(world: &TestWorld) {
    use wardrobe_runtime::{KeyValueStore, SqliteStore};

    let mut store = SqliteStore::open(&world.db_path()).unwrap();
    store.put("favorites", "{not json").unwrap();
}
