use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::tui::app::{AppState, StatusMessage};

const KEY_HINTS: &str = "1-4/←→ season  g generate  f favorite  ↑↓ select  i info  q quit";

pub(crate) struct StatusBarComponent;

impl Component for StatusBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let status = match &state.status {
            Some(StatusMessage::Info(message)) => {
                Span::styled(message.clone(), Style::default().fg(Color::LightGreen))
            }
            Some(StatusMessage::Error(message)) => {
                Span::styled(message.clone(), Style::default().fg(Color::LightRed))
            }
            None => Span::raw(""),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("Favorites: {}  ", state.wardrobe.favorites().len()),
                    Style::default().fg(Color::Gray),
                ),
                status,
            ]),
            Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        ];

        let bar = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(bar, area);
    }
}
