use std::fmt;

use crate::presentation::formatters::{season_list, swatch};
use crate::presentation::view_models::{CatalogViewModel, ColorMode, CreateView};

impl CreateView for CatalogViewModel {
    fn create_view<'a>(&'a self, colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(CatalogView { data: self, colors })
    }
}

struct CatalogView<'a> {
    data: &'a CatalogViewModel,
    colors: ColorMode,
}

impl<'a> fmt::Display for CatalogView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.items.is_empty() {
            writeln!(f, "No items.")?;
            return Ok(());
        }

        writeln!(f, "{:<4} {:<8} {:<28} NAME", "ID", "TYPE", "SEASONS")?;
        writeln!(f, "{}", "-".repeat(60))?;

        for item in &self.data.items {
            writeln!(
                f,
                "{:<4} {:<8} {:<28} {} {}",
                item.id,
                item.slot.to_string(),
                season_list(&item.seasons),
                swatch(&item.color, self.colors),
                item.name
            )?;
            writeln!(f, "{:<42}{}", "", item.description)?;
        }

        Ok(())
    }
}
