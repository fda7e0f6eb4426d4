use assert_cmd::Command;
use predicates::prelude::*;
use wardrobe_testing::TestWorld;

#[allow(deprecated)]
fn run_help(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("wardrobe").unwrap();
    let output = cmd.args(args).arg("--help").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    let help = run_help(&[]);
    for command in ["generate", "catalog", "favorites", "config", "ui"] {
        assert!(help.contains(command), "missing {} in help", command);
    }
    assert!(help.contains("--ephemeral"));
}

#[test]
fn test_favorites_help_lists_verbs() {
    let help = run_help(&["favorites"]);
    for verb in ["list", "toggle", "clear"] {
        assert!(help.contains(verb));
    }
}

#[test]
#[allow(deprecated)]
fn test_no_command_prints_guidance() {
    let world = TestWorld::new();
    let mut cmd = Command::cargo_bin("wardrobe").unwrap();
    world
        .configure_command(&mut cmd)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick commands:"))
        .stdout(predicate::str::contains("wardrobe generate"));

    assert!(!world.db_path().exists());
}

#[test]
fn test_catalog_lists_nine_items() {
    let world = TestWorld::new();

    let json = world.run_json(&["catalog"]).unwrap().json().unwrap();
    let items = json["content"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 9);

    insta::assert_json_snapshot!(items[8], @r###"
    {
      "color": "orange",
      "description": "ビーチにぴったりのフラットサンダル",
      "id": 9,
      "name": "サンダル",
      "seasons": [
        "summer"
      ],
      "slot": "shoes"
    }
    "###);
}

#[test]
fn test_catalog_season_filter() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["catalog", "--season", "winter"])
        .unwrap()
        .json()
        .unwrap();
    let ids: Vec<u64> = json["content"]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4, 8]);
}

#[test]
fn test_config_set_season_round_trip() {
    let world = TestWorld::new();

    let result = world.run(&["config", "set-season", "fall"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(world.config_path().exists());

    let json = world.run_json(&["config", "show"]).unwrap().json().unwrap();
    assert_eq!(json["content"]["default_season"], "fall");
    assert_eq!(json["content"]["color"], true);
}

#[test]
fn test_broken_config_is_reported() {
    let world = TestWorld::new().with_config("[generator]\ndefault_season = 3\n");

    let result = world.run(&["generate"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().starts_with("Error: Configuration error"));
}

#[test]
fn test_data_dir_from_environment() {
    let world = TestWorld::new().without_data_dir_flag();
    let env_dir = world.temp_dir().join("from-env");
    let world = world.with_env("WARDROBE_PATH", env_dir.to_string_lossy());

    let result = world.run(&["favorites", "toggle", "1", "5", "9"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    assert!(env_dir.join("wardrobe.db").exists());
    assert!(!world.db_path().exists());
}

#[test]
fn test_ephemeral_set_season_writes_no_config() {
    let world = TestWorld::new();

    let result = world
        .run(&["--ephemeral", "config", "set-season", "fall"])
        .unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("--ephemeral"));
    assert!(!world.config_path().exists());
    assert_eq!(std::fs::read_dir(world.data_dir()).unwrap().count(), 0);
}
