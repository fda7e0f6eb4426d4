//! Testing infrastructure for wardrobe integration tests.
//!
//! - `TestWorld`: isolated data directory plus a configured CLI runner
//! - `assertions`: checks over the JSON output of the CLI

pub mod assertions;
pub mod world;

pub use world::{CliResult, TestWorld};
