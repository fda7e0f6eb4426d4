pub mod catalog;
pub mod domain;

pub use catalog::{catalog, find_item};
pub use domain::*;
