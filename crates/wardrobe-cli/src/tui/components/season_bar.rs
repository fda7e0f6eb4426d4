use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
};
use wardrobe_types::Season;

use super::Component;
use crate::tui::app::AppState;

pub(crate) struct SeasonBarComponent;

impl Component for SeasonBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = Season::ALL
            .iter()
            .enumerate()
            .map(|(index, season)| {
                Line::from(format!("{} {} {}", index + 1, season.icon(), season))
            })
            .collect();

        let selected = Season::ALL
            .iter()
            .position(|season| *season == state.wardrobe.season())
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .select(selected)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Season "),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );

        f.render_widget(tabs, area);
    }
}
