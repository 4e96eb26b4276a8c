pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod optimizer;
pub mod state;

pub use catalog::{load_catalog, Catalog};
pub use error::{Result, ShopError};
pub use models::{BasketLine, BasketParams, CatalogItem, Selection, Summary};
pub use optimizer::build_basket;
