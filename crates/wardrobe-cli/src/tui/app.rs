use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wardrobe_runtime::FavoriteChange;
use wardrobe_types::{ClothingItem, Season};

use crate::context::Session;

/// Rows of the outfit panel: top, bottom, shoes
const OUTFIT_ROWS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StatusMessage {
    Info(String),
    Error(String),
}

pub(crate) struct AppState {
    pub wardrobe: Session,
    /// Highlighted row in the outfit panel
    pub selected: usize,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(wardrobe: Session) -> Self {
        Self {
            wardrobe,
            selected: 0,
            status: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.select_season(Season::ALL[index]);
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_season(self.wardrobe.season().previous());
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_season(self.wardrobe.season().next());
            }
            KeyCode::Char('g') | KeyCode::Enter => self.generate(),
            KeyCode::Char('f') => self.toggle_favorite(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('i') => self.toggle_info(),
            _ => {}
        }
    }

    pub fn select_season(&mut self, season: Season) {
        self.wardrobe.select_season(season);
        self.status = None;
    }

    pub fn generate(&mut self) {
        self.status = match self.wardrobe.generate() {
            Ok(_) => None,
            Err(err) => Some(StatusMessage::Error(err.to_string())),
        };
    }

    pub fn toggle_favorite(&mut self) {
        self.status = match self.wardrobe.toggle_favorite() {
            Ok(Some(FavoriteChange::Added)) => {
                Some(StatusMessage::Info("Added to favorites".to_string()))
            }
            Ok(Some(FavoriteChange::Removed { .. })) => {
                Some(StatusMessage::Info("Removed from favorites".to_string()))
            }
            Ok(None) => Some(StatusMessage::Info(
                "Generate an outfit first (g)".to_string(),
            )),
            Err(err) => Some(StatusMessage::Error(err.to_string())),
        };
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1).min(OUTFIT_ROWS - 1);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Item under the cursor, if an outfit is on screen
    pub fn selected_item(&self) -> Option<&ClothingItem> {
        let row = self.selected.min(OUTFIT_ROWS - 1);
        self.wardrobe.current().map(|outfit| &outfit.items()[row])
    }

    pub fn toggle_info(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        if let Err(err) = self.wardrobe.toggle_info(id) {
            self.status = Some(StatusMessage::Error(err.to_string()));
        }
    }
}
