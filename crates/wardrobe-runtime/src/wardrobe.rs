use rand::SeedableRng;
use rand::rngs::StdRng;
use std::borrow::Cow;
use wardrobe_engine::{FavoriteChange, Favorites, ViewState, generate_outfit};
use wardrobe_store::{KeyValueStore, load_favorites, save_favorites};
use wardrobe_types::{ClothingItem, ItemId, ItemType, Outfit, Season, catalog};

use crate::{Config, Result, RuntimeError};

/// One session of the outfit composer.
///
/// Owns the transient view state and the favorites collection, and is the only
/// writer of the backing store. Every favorites mutation is written through
/// before it becomes visible in memory, so the two never drift apart.
pub struct Wardrobe<S: KeyValueStore> {
    store: S,
    catalog: Cow<'static, [ClothingItem]>,
    view: ViewState,
    favorites: Favorites,
    rng: StdRng,
}

impl<S: KeyValueStore> Wardrobe<S> {
    /// Start a session: load persisted favorites and select the configured season
    pub fn open(store: S, config: &Config) -> Result<Self> {
        let favorites = load_favorites(&store)?;
        let rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        tracing::info!(
            favorites = favorites.len(),
            season = %config.generator.default_season,
            "session started"
        );

        Ok(Self {
            store,
            catalog: Cow::Borrowed(catalog()),
            view: ViewState::new(config.generator.default_season),
            favorites,
            rng,
        })
    }

    /// Replace the RNG with a seeded one
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Draw from a different catalog than the built-in one
    pub fn with_catalog(mut self, items: Vec<ClothingItem>) -> Self {
        self.catalog = Cow::Owned(items);
        self
    }

    pub fn catalog(&self) -> &[ClothingItem] {
        &self.catalog
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn season(&self) -> Season {
        self.view.season
    }

    pub fn current(&self) -> Option<&Outfit> {
        self.view.current.as_ref()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn select_season(&mut self, season: Season) {
        self.view = std::mem::take(&mut self.view).select_season(season);
    }

    /// Draw a new outfit for the selected season.
    ///
    /// On failure the current outfit and history are left as they were.
    pub fn generate(&mut self) -> Result<Outfit> {
        let season = self.view.season;
        let outfit = match generate_outfit(&self.catalog, season, &mut self.rng) {
            Ok(outfit) => outfit,
            Err(err) => {
                tracing::warn!(%season, error = %err, "outfit generation failed");
                return Err(err.into());
            }
        };

        tracing::debug!(%season, ids = ?outfit.ids(), "generated outfit");
        self.view = std::mem::take(&mut self.view).apply_generated(outfit.clone());
        Ok(outfit)
    }

    pub fn is_current_favorite(&self) -> bool {
        self.current()
            .is_some_and(|outfit| self.favorites.contains(outfit))
    }

    /// Toggle the current outfit in favorites. `None` when nothing has been generated yet.
    pub fn toggle_favorite(&mut self) -> Result<Option<FavoriteChange>> {
        let Some(current) = self.view.current.clone() else {
            return Ok(None);
        };
        self.toggle_outfit(&current).map(Some)
    }

    /// Toggle an arbitrary outfit in favorites
    pub fn toggle_outfit(&mut self, outfit: &Outfit) -> Result<FavoriteChange> {
        let mut next = self.favorites.clone();
        let change = next.toggle(outfit);
        self.commit_favorites(next)?;
        tracing::info!(ids = ?outfit.ids(), ?change, "favorites updated");
        Ok(change)
    }

    /// Remove every favorite, returning how many were dropped
    pub fn clear_favorites(&mut self) -> Result<usize> {
        let removed = self.favorites.len();
        self.commit_favorites(Favorites::new())?;
        Ok(removed)
    }

    /// Open or collapse the description panel of an item in the current outfit
    pub fn toggle_info(&mut self, id: ItemId) -> Result<Option<ItemId>> {
        let displayed = self
            .current()
            .is_some_and(|outfit| outfit.contains_item(id));
        if !displayed {
            return Err(RuntimeError::ItemNotDisplayed(id));
        }

        self.view = std::mem::take(&mut self.view).toggle_info(id);
        Ok(self.view.expanded)
    }

    /// Build an outfit from catalog ids given in slot order
    pub fn outfit_from_ids(&self, ids: [ItemId; 3]) -> Result<Outfit> {
        let [top, bottom, shoes] = ids;
        Ok(Outfit::new(
            self.resolve_item(top, ItemType::Tops)?,
            self.resolve_item(bottom, ItemType::Bottoms)?,
            self.resolve_item(shoes, ItemType::Shoes)?,
        ))
    }

    fn resolve_item(&self, id: ItemId, expected: ItemType) -> Result<ClothingItem> {
        let item = self
            .catalog
            .iter()
            .find(|item| item.id == id)
            .ok_or(RuntimeError::UnknownItem(id))?;
        if item.kind != expected {
            return Err(RuntimeError::SlotMismatch {
                id,
                expected,
                actual: item.kind,
            });
        }
        Ok(item.clone())
    }

    fn commit_favorites(&mut self, next: Favorites) -> Result<()> {
        save_favorites(&mut self.store, &next)?;
        self.favorites = next;
        Ok(())
    }
}
