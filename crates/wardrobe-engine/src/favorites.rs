use serde::{Deserialize, Serialize};
use wardrobe_types::{Outfit, outfits_match};

/// Result of toggling an outfit in the favorites set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "lowercase")]
pub enum FavoriteChange {
    Added,
    Removed { count: usize },
}

/// Favorited outfits, in the order they were added.
///
/// Membership uses positional id equality, so entries behave as a set even
/// though they are stored as frozen snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<Outfit>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, outfit: &Outfit) -> bool {
        self.entries.iter().any(|fav| outfits_match(fav, outfit))
    }

    /// Remove every entry matching `outfit`, or append it if none matches
    pub fn toggle(&mut self, outfit: &Outfit) -> FavoriteChange {
        let before = self.entries.len();
        self.entries.retain(|fav| !outfits_match(fav, outfit));
        let removed = before - self.entries.len();

        if removed > 0 {
            FavoriteChange::Removed { count: removed }
        } else {
            self.entries.push(outfit.clone());
            FavoriteChange::Added
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Outfit> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Outfit] {
        &self.entries
    }
}

impl From<Vec<Outfit>> for Favorites {
    fn from(entries: Vec<Outfit>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_types::{ClothingItem, ItemType, Season};

    fn outfit(top: u32, name: &str) -> Outfit {
        let item = |id, kind| ClothingItem::new(id, kind, name, "gray", &[Season::Spring], "");
        Outfit::new(
            item(top, ItemType::Tops),
            item(4, ItemType::Bottoms),
            item(7, ItemType::Shoes),
        )
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        let look = outfit(1, "a");

        assert_eq!(favorites.toggle(&look), FavoriteChange::Added);
        assert!(favorites.contains(&look));

        assert_eq!(
            favorites.toggle(&look),
            FavoriteChange::Removed { count: 1 }
        );
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut favorites = Favorites::from(vec![outfit(2, "x"), outfit(3, "y")]);
        let original = favorites.clone();

        favorites.toggle(&outfit(1, "a"));
        favorites.toggle(&outfit(1, "a"));
        assert_eq!(favorites, original);
    }

    #[test]
    fn test_removes_every_match() {
        let mut favorites =
            Favorites::from(vec![outfit(1, "first"), outfit(2, "x"), outfit(1, "second")]);

        let change = favorites.toggle(&outfit(1, "current"));

        assert_eq!(change, FavoriteChange::Removed { count: 2 });
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.as_slice()[0].top().id.get(), 2);
    }

    #[test]
    fn test_added_entry_is_a_snapshot() {
        let mut favorites = Favorites::new();
        favorites.toggle(&outfit(1, "old"));

        assert!(favorites.contains(&outfit(1, "renamed")));
        assert_eq!(favorites.as_slice()[0].top().name, "old");
    }
}
