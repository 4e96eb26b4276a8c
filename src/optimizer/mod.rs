pub mod builder;
pub mod constants;
pub mod scoring;

pub use builder::{build_basket, filter_items, rank_candidates, Candidate};
pub use constants::*;
pub use scoring::value_per_dollar;
