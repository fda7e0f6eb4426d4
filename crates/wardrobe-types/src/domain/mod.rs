pub mod item;
pub mod outfit;
pub mod season;

pub use item::*;
pub use outfit::*;
pub use season::*;
