use ratatui::{Frame, layout::Rect};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState);
}

pub(crate) mod history;
pub(crate) mod outfit_panel;
pub(crate) mod season_bar;
pub(crate) mod status_bar;

pub(crate) use history::HistoryComponent;
pub(crate) use outfit_panel::OutfitPanelComponent;
pub(crate) use season_bar::SeasonBarComponent;
pub(crate) use status_bar::StatusBarComponent;
