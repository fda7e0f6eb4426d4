use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::AppState;
use super::components::{
    Component, HistoryComponent, OutfitPanelComponent, SeasonBarComponent, StatusBarComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    SeasonBarComponent.render(f, chunks[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(chunks[1]);

    OutfitPanelComponent.render(f, body[0], state);
    HistoryComponent.render(f, body[1], state);
    StatusBarComponent.render(f, chunks[2], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::StatusMessage;
    use ratatui::{Terminal, backend::TestBackend};
    use wardrobe_runtime::{Config, KeyValueStore, MemoryStore, Wardrobe};
    use wardrobe_types::Season;

    fn app() -> AppState {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        let wardrobe = Wardrobe::open(store, &Config::default())
            .unwrap()
            .with_seed(11);
        AppState::new(wardrobe)
    }

    fn render(state: &AppState) -> String {
        let backend = TestBackend::new(100, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_empty_state_prompts_for_generation() {
        let screen = render(&app());
        assert!(screen.contains("Press g to generate"));
        assert!(screen.contains("History 0/5"));
        assert!(screen.contains("Favorites: 0"));
    }

    #[test]
    fn test_season_tabs_list_all_seasons() {
        let screen = render(&app());
        for season in Season::ALL {
            assert!(screen.contains(season.as_str()), "missing {}", season);
        }
    }

    #[test]
    fn test_generated_outfit_fills_panels() {
        let mut state = app();
        state.select_season(Season::Winter);
        for _ in 0..7 {
            state.generate();
        }
        state.toggle_favorite();

        let screen = render(&state);
        assert!(!screen.contains("Press g to generate"));
        assert!(screen.contains("tops"));
        assert!(screen.contains("shoes"));
        assert!(screen.contains("History 5/5"));
        assert!(screen.contains("5. "));
        assert!(screen.contains("Favorites: 1"));
        assert!(screen.contains("Added to favorites"));
    }

    #[test]
    fn test_error_status_is_shown() {
        let mut state = app();
        state.status = Some(StatusMessage::Error(
            "Cannot generate outfit: no tops available for summer".to_string(),
        ));
        let screen = render(&state);
        assert!(screen.contains("no tops available for summer"));
    }
}
