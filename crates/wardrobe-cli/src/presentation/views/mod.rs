mod catalog;
mod config;
mod favorites;
mod outfit;
mod system;

pub use outfit::{OutfitDetail, OutfitLine};
