//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

/// Ids of an outfit view model, e.g. `content.current`.
pub fn outfit_ids(outfit: &Value) -> Result<Vec<u64>> {
    outfit["ids"]
        .as_array()
        .context("Expected 'ids' array on outfit")?
        .iter()
        .map(|id| id.as_u64().context("Outfit id is not an integer"))
        .collect()
}

/// Assert the number of entries in `content.favorites`.
pub fn assert_favorite_count(json: &Value, expected: usize) -> Result<()> {
    let favorites = json["content"]["favorites"]
        .as_array()
        .context("Expected 'content.favorites' array in JSON")?;

    if favorites.len() != expected {
        anyhow::bail!("Expected {} favorites, got {}", expected, favorites.len());
    }

    Ok(())
}

/// Assert every item of every outfit in `content.history` is wearable in `season`.
pub fn assert_history_in_season(json: &Value, season: &str) -> Result<()> {
    let history = json["content"]["history"]
        .as_array()
        .context("Expected 'content.history' array in JSON")?;

    for (i, outfit) in history.iter().enumerate() {
        let items = outfit["items"]
            .as_array()
            .with_context(|| format!("History entry {} missing items", i))?;

        for item in items {
            let seasons = item["seasons"]
                .as_array()
                .with_context(|| format!("Item in history entry {} missing seasons", i))?;
            if !seasons.iter().any(|s| s == season) {
                anyhow::bail!(
                    "History entry {} has item {} not wearable in {}",
                    i,
                    item["id"],
                    season
                );
            }
        }
    }

    Ok(())
}
