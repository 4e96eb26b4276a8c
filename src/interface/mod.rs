pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_basket_csv;
pub use prompts::{
    collect_basket_params, prompt_budget, prompt_exclusions, prompt_max_items, prompt_qty_cap,
    prompt_selection, prompt_weight, prompt_yes_no,
};
pub use render::{display_basket, display_catalog_overview, display_params};
