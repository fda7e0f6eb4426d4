pub mod catalog;
pub mod config;
pub mod favorites;
pub mod generate;
pub mod guidance;
pub mod ui;
