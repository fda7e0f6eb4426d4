use std::fmt;

use crate::presentation::view_models::{
    ColorMode, ConfigViewModel, CreateView, SeasonSetViewModel,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config file:    {}", self.data.config_path)?;
        writeln!(f, "Data directory: {}", self.data.data_dir)?;
        writeln!(f)?;
        writeln!(f, "[generator]")?;
        writeln!(f, "default_season = {}", self.data.default_season)?;
        match self.data.seed {
            Some(seed) => writeln!(f, "seed           = {}", seed)?,
            None => writeln!(f, "seed           = (random)")?,
        }
        writeln!(f)?;
        writeln!(f, "[display]")?;
        writeln!(f, "color          = {}", self.data.color)
    }
}

impl CreateView for SeasonSetViewModel {
    fn create_view<'a>(&'a self, _colors: ColorMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(SeasonSetView { data: self })
    }
}

struct SeasonSetView<'a> {
    data: &'a SeasonSetViewModel,
}

impl<'a> fmt::Display for SeasonSetView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Saved to {}", self.data.config_path)
    }
}
