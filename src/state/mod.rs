mod persistence;

pub use persistence::{load_params, save_params};
