use std::fmt;

use super::{OutfitDetail, OutfitLine};
use crate::presentation::view_models::{
    ColorMode, CreateView, FavoriteListViewModel, FavoriteToggleViewModel,
    FavoritesClearedViewModel,
};
use wardrobe_runtime::FavoriteChange;

impl CreateView for FavoriteListViewModel {
    fn create_view<'a>(&'a self, colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoriteListView { data: self, colors })
    }
}

struct FavoriteListView<'a> {
    data: &'a FavoriteListViewModel,
    colors: ColorMode,
}

impl<'a> fmt::Display for FavoriteListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, outfit) in self.data.favorites.iter().enumerate() {
            let [top, bottom, shoes] = outfit.ids;
            writeln!(
                f,
                "{:>3}. {}  ({} {} {})",
                index + 1,
                OutfitLine::new(outfit, self.colors),
                top,
                bottom,
                shoes
            )?;
        }
        Ok(())
    }
}

impl CreateView for FavoriteToggleViewModel {
    fn create_view<'a>(&'a self, colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoriteToggleView { data: self, colors })
    }
}

struct FavoriteToggleView<'a> {
    data: &'a FavoriteToggleViewModel,
    colors: ColorMode,
}

impl<'a> fmt::Display for FavoriteToggleView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", OutfitDetail::new(&self.data.outfit, self.colors))?;
        writeln!(f)?;
        if let FavoriteChange::Removed { count } = self.data.change
            && count > 1
        {
            writeln!(f, "Removed {} matching entries.", count)?;
        }
        writeln!(f, "Favorites: {}", self.data.total)
    }
}

impl CreateView for FavoritesClearedViewModel {
    fn create_view<'a>(&'a self, _colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(FavoritesClearedView { data: self })
    }
}

struct FavoritesClearedView<'a> {
    data: &'a FavoritesClearedViewModel,
}

impl<'a> fmt::Display for FavoritesClearedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.removed > 0 {
            writeln!(f, "Favorites: 0")?;
        }
        Ok(())
    }
}
