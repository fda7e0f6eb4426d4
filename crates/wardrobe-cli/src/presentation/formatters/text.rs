use wardrobe_types::Season;

pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// "spring/summer"
pub fn season_list(seasons: &[Season]) -> String {
    seasons
        .iter()
        .map(|season| season.as_str())
        .collect::<Vec<_>>()
        .join("/")
}
