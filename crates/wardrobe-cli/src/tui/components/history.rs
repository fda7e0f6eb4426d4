use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use wardrobe_runtime::HISTORY_LIMIT;

use super::Component;
use crate::presentation::formatters::tui_color;
use crate::tui::app::AppState;

pub(crate) struct HistoryComponent;

impl Component for HistoryComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let history = &state.wardrobe.view().history;
        let favorites = state.wardrobe.favorites();

        let items: Vec<ListItem> = history
            .iter()
            .enumerate()
            .map(|(index, outfit)| {
                let mut spans = vec![Span::styled(
                    format!("{}. ", index + 1),
                    Style::default().fg(Color::DarkGray),
                )];
                for item in outfit.items() {
                    spans.push(Span::styled(
                        "■■ ",
                        Style::default().fg(tui_color(&item.color)),
                    ));
                }
                if favorites.contains(outfit) {
                    spans.push(Span::styled("♥", Style::default().fg(Color::LightRed)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(format!(" History {}/{} ", history.len(), HISTORY_LIMIT)),
        );

        f.render_widget(list, area);
    }
}
