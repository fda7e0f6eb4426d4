use std::fmt;

use crate::presentation::view_models::{ColorMode, CreateView, GuidanceViewModel};

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(GuidanceView { data: self })
    }
}

struct GuidanceView<'a> {
    data: &'a GuidanceViewModel,
}

impl<'a> fmt::Display for GuidanceView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "wardrobe - seasonal outfit randomizer")?;
        writeln!(f)?;
        writeln!(f, "Quick commands:")?;
        writeln!(
            f,
            "  wardrobe generate                 # Draw an outfit for {}",
            self.data.default_season
        )?;
        writeln!(f, "  wardrobe generate --season winter # Draw for another season")?;
        writeln!(f, "  wardrobe catalog                  # List every item")?;
        writeln!(
            f,
            "  wardrobe favorites list           # Show saved outfits ({})",
            self.data.favorites_count
        )?;
        writeln!(f, "  wardrobe ui                       # Interactive composer")?;
        writeln!(f)?;
        writeln!(f, "Data directory: {}", self.data.data_dir)
    }
}
