use wardrobe_testing::TestWorld;
use wardrobe_testing::assertions::{assert_history_in_season, outfit_ids};

#[test]
fn test_winter_always_draws_the_only_candidates() {
    let world = TestWorld::new();

    let result = world
        .run_json(&["generate", "--season", "winter", "--count", "3"])
        .expect("Failed to run generate");
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().expect("Parse failed");
    assert_eq!(json["content"]["season"], "winter");
    assert_eq!(outfit_ids(&json["content"]["current"]).unwrap(), vec![3, 4, 8]);
    assert_eq!(json["content"]["history"].as_array().unwrap().len(), 3);
    assert_history_in_season(&json, "winter").unwrap();
}

#[test]
fn test_summer_draws_from_summer_pools() {
    let world = TestWorld::new();

    for seed in 0..8 {
        let seed = seed.to_string();
        let result = world
            .run_json(&["generate", "--season", "summer", "--seed", &seed])
            .expect("Failed to run generate");
        assert!(result.success(), "stderr: {}", result.stderr());

        let json = result.json().unwrap();
        let ids = outfit_ids(&json["content"]["current"]).unwrap();
        assert_eq!(ids[0], 1);
        assert!(ids[1] == 5 || ids[1] == 6, "unexpected bottom {}", ids[1]);
        assert_eq!(ids[2], 9);
    }
}

#[test]
fn test_history_is_capped_at_five() {
    let world = TestWorld::new();

    let result = world
        .run_json(&["generate", "--season", "fall", "--count", "12", "--seed", "5"])
        .unwrap();
    let json = result.json().unwrap();

    let history = json["content"]["history"].as_array().unwrap();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0], json["content"]["current"]);
    assert_eq!(json["content"]["generated"], 12);
    assert_history_in_season(&json, "fall").unwrap();
}

#[test]
fn test_same_seed_same_outfit() {
    let world = TestWorld::new();
    let args = ["generate", "--season", "spring", "--count", "4", "--seed", "42"];

    let first = world.run_json(&args).unwrap().json().unwrap();
    let second = world.run_json(&args).unwrap().json().unwrap();
    assert_eq!(first["content"]["history"], second["content"]["history"]);
}

#[test]
fn test_configured_season_is_the_default() {
    let world = TestWorld::new().with_config("[generator]\ndefault_season = \"winter\"\n");

    let json = world.run_json(&["generate"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["season"], "winter");
    assert_eq!(outfit_ids(&json["content"]["current"]).unwrap(), vec![3, 4, 8]);
}

#[test]
fn test_plain_output_shows_outfit_and_tip() {
    let world = TestWorld::new();

    let result = world.run(&["generate", "--season", "winter"]).unwrap();
    assert!(result.success());

    let stdout = result.stdout();
    assert!(stdout.contains("winter outfit generated"));
    assert!(stdout.contains("セーター"));
    assert!(stdout.contains("ジーンズ"));
    assert!(stdout.contains("ブーツ"));
    assert!(stdout.contains("wardrobe favorites toggle 3 4 8"));
}

#[test]
fn test_generate_favorite_flag_persists() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["generate", "--season", "winter", "--favorite"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["favorite_change"]["change"], "added");
    assert_eq!(json["content"]["current"]["favorite"], true);
    assert_eq!(json["content"]["favorites_count"], 1);

    let json = world
        .run_json(&["generate", "--season", "winter"])
        .unwrap()
        .json()
        .unwrap();
    assert_eq!(json["content"]["current"]["favorite"], true);
}

#[test]
fn test_invalid_season_is_rejected() {
    let world = TestWorld::new();

    let result = world.run(&["generate", "--season", "monsoon"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("invalid value 'monsoon'"));
}
