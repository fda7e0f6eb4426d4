use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::presentation::formatters::tui_color;
use crate::tui::app::AppState;

const EMPTY_PROMPT: &str = "コーディネートを生成してください";

pub(crate) struct OutfitPanelComponent;

impl Component for OutfitPanelComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &AppState) {
        let favorite = state.wardrobe.is_current_favorite();
        let (heart, heart_style) = if favorite {
            ("♥", Style::default().fg(Color::LightRed))
        } else {
            ("♡", Style::default().fg(Color::DarkGray))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Line::from(vec![
                Span::raw(" Outfit "),
                Span::styled(heart, heart_style),
                Span::raw(" "),
            ]));

        let Some(outfit) = state.wardrobe.current() else {
            let prompt = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(EMPTY_PROMPT, Style::default().fg(Color::Gray))),
                Line::from(Span::styled(
                    "Press g to generate",
                    Style::default().fg(Color::DarkGray),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            f.render_widget(prompt, area);
            return;
        };

        let expanded = state.wardrobe.view().expanded;
        let selected = state.selected.min(outfit.items().len() - 1);
        let mut lines = Vec::new();

        for (row, item) in outfit.items().iter().enumerate() {
            let is_selected = row == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let name_style = if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let info = if expanded == Some(item.id) { "▾" } else { "ⓘ" };

            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::LightCyan)),
                Span::styled(
                    format!("{:<8}", item.kind.as_str()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled("■ ", Style::default().fg(tui_color(&item.color))),
                Span::styled(item.name.clone(), name_style),
                Span::raw(" "),
                Span::styled(info, Style::default().fg(Color::DarkGray)),
            ]));

            if expanded == Some(item.id) {
                lines.push(Line::from(Span::styled(
                    format!("            {}", item.description),
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                )));
            }
        }

        let panel = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block);
        f.render_widget(panel, area);
    }
}
