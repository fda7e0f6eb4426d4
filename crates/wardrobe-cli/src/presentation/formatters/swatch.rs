use owo_colors::{AnsiColors, OwoColorize};
use ratatui::style::Color;

use crate::presentation::ColorMode;

const SWATCH: &str = "■";

/// Terminal color for a catalog swatch name
pub fn ansi_color(name: &str) -> AnsiColors {
    match name {
        "red" => AnsiColors::Red,
        "blue" => AnsiColors::BrightBlue,
        "green" => AnsiColors::Green,
        "indigo" => AnsiColors::Blue,
        "yellow" => AnsiColors::Yellow,
        "pink" => AnsiColors::BrightMagenta,
        "purple" => AnsiColors::Magenta,
        "gray" => AnsiColors::BrightBlack,
        "orange" => AnsiColors::BrightRed,
        _ => AnsiColors::White,
    }
}

/// ratatui color for a catalog swatch name
pub fn tui_color(name: &str) -> Color {
    match name {
        "red" => Color::Red,
        "blue" => Color::LightBlue,
        "green" => Color::Green,
        "indigo" => Color::Rgb(75, 0, 130),
        "yellow" => Color::Yellow,
        "pink" => Color::LightMagenta,
        "purple" => Color::Magenta,
        "gray" => Color::Gray,
        "orange" => Color::Rgb(255, 165, 0),
        _ => Color::White,
    }
}

/// A colored square, or the bracketed color name when colors are off
pub fn swatch(name: &str, colors: ColorMode) -> String {
    if colors.is_colored() {
        SWATCH.color(ansi_color(name)).to_string()
    } else {
        format!("[{}]", name)
    }
}
