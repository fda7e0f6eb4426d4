use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{swatch, truncate};
use crate::presentation::view_models::{
    ColorMode, CreateView, GenerateResultViewModel, OutfitViewModel,
};

const HEART_ON: &str = "♥";
const HEART_OFF: &str = "♡";

// --------------------------------------------------------
// Single-line outfit (history, favorites)
// --------------------------------------------------------

pub struct OutfitLine<'a> {
    data: &'a OutfitViewModel,
    colors: ColorMode,
}

impl<'a> OutfitLine<'a> {
    pub fn new(data: &'a OutfitViewModel, colors: ColorMode) -> Self {
        Self { data, colors }
    }
}

impl<'a> fmt::Display for OutfitLine<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self
            .data
            .items
            .iter()
            .map(|item| format!("{} {}", swatch(&item.color, self.colors), item.name))
            .collect();
        write!(f, "{}", parts.join(" / "))?;
        if self.data.favorite {
            write!(f, "  {}", heart(true, self.colors))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Multi-line outfit with descriptions
// --------------------------------------------------------

pub struct OutfitDetail<'a> {
    data: &'a OutfitViewModel,
    colors: ColorMode,
}

impl<'a> OutfitDetail<'a> {
    pub fn new(data: &'a OutfitViewModel, colors: ColorMode) -> Self {
        Self { data, colors }
    }
}

impl<'a> fmt::Display for OutfitDetail<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for item in &self.data.items {
            writeln!(
                f,
                "  {:<8} #{:<2} {} {}",
                item.slot.to_string(),
                item.id,
                swatch(&item.color, self.colors),
                item.name
            )?;
            writeln!(f, "  {:<8}     {}", "", truncate(&item.description, 60))?;
        }
        Ok(())
    }
}

fn heart(on: bool, colors: ColorMode) -> String {
    match (on, colors.is_colored()) {
        (true, true) => HEART_ON.red().to_string(),
        (true, false) => HEART_ON.to_string(),
        (false, _) => HEART_OFF.to_string(),
    }
}

// --------------------------------------------------------
// Generate result
// --------------------------------------------------------

impl CreateView for GenerateResultViewModel {
    fn create_view<'a>(&'a self, colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GenerateResultView { data: self, colors })
    }
}

struct GenerateResultView<'a> {
    data: &'a GenerateResultViewModel,
    colors: ColorMode,
}

impl<'a> fmt::Display for GenerateResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Season: {} {}",
            self.data.season.icon(),
            self.data.season
        )?;
        writeln!(f)?;

        let favorite = self.data.current.favorite;
        writeln!(
            f,
            "{} Current outfit{}",
            heart(favorite, self.colors),
            if favorite { " (favorite)" } else { "" }
        )?;
        write!(f, "{}", OutfitDetail::new(&self.data.current, self.colors))?;

        if self.data.history.len() > 1 {
            writeln!(f)?;
            writeln!(f, "History (most recent first):")?;
            for (index, outfit) in self.data.history.iter().enumerate() {
                writeln!(f, "  {}. {}", index + 1, OutfitLine::new(outfit, self.colors))?;
            }
        }

        writeln!(f)?;
        writeln!(f, "Favorites: {}", self.data.favorites_count)?;
        Ok(())
    }
}
