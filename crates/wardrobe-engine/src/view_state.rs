use serde::Serialize;
use wardrobe_types::{ItemId, Outfit, Season};

use crate::history::History;

/// Collapse the panel if `id` is already expanded, otherwise switch to it
pub fn toggle_info(expanded: Option<ItemId>, id: ItemId) -> Option<ItemId> {
    if expanded == Some(id) { None } else { Some(id) }
}

/// Transient view state of one session.
///
/// Transitions take the state by value and return the next one, so each
/// operation can be exercised on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub season: Season,
    pub current: Option<Outfit>,
    pub history: History,
    /// Item whose description panel is open, at most one
    pub expanded: Option<ItemId>,
}

impl ViewState {
    pub fn new(season: Season) -> Self {
        Self {
            season,
            ..Self::default()
        }
    }

    /// Change the season filter; existing outfit and history are untouched
    #[must_use]
    pub fn select_season(self, season: Season) -> Self {
        Self { season, ..self }
    }

    /// Make `outfit` current and record it in history
    #[must_use]
    pub fn apply_generated(mut self, outfit: Outfit) -> Self {
        self.history.record(outfit.clone());
        self.current = Some(outfit);
        self
    }

    #[must_use]
    pub fn toggle_info(self, id: ItemId) -> Self {
        Self {
            expanded: toggle_info(self.expanded, id),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_types::catalog;

    fn winter_outfit() -> Outfit {
        let item = |id: u32| {
            catalog()
                .iter()
                .find(|i| i.id.get() == id)
                .cloned()
                .unwrap()
        };
        Outfit::new(item(3), item(4), item(8))
    }

    #[test]
    fn test_toggle_info_twice_is_identity() {
        for start in [None, Some(ItemId::new(1)), Some(ItemId::new(5))] {
            let once = toggle_info(start, ItemId::new(5));
            assert_eq!(toggle_info(once, ItemId::new(5)), start);
        }
    }

    #[test]
    fn test_toggle_info_switches_panels() {
        let expanded = toggle_info(Some(ItemId::new(1)), ItemId::new(4));
        assert_eq!(expanded, Some(ItemId::new(4)));
    }

    #[test]
    fn test_select_season_keeps_outfit() {
        let state = ViewState::new(Season::Winter).apply_generated(winter_outfit());
        let state = state.select_season(Season::Summer);

        assert_eq!(state.season, Season::Summer);
        assert_eq!(state.current, Some(winter_outfit()));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_apply_generated_updates_current_and_history() {
        let state = ViewState::default().apply_generated(winter_outfit());

        assert_eq!(state.current.as_ref(), state.history.latest());
        assert_eq!(state.season, Season::Spring);
    }
}
