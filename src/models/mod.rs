pub mod basket;
pub mod item;
pub mod params;

pub use basket::{round_to, BasketLine, Summary};
pub use item::{CatalogItem, Nutrients};
pub use params::{BasketParams, ScoreWeights, Selection};
