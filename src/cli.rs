use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{BasketParams, Selection};
use crate::optimizer::constants::{DEFAULT_CATALOG_PATH, DEFAULT_PARAMS_PATH};

/// Shopping Optimizer: picks a food basket under a budget by weighted nutrition per dollar.
#[derive(Parser, Debug)]
#[command(name = "shopping_optimizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the catalog CSV file.
    #[arg(short, long, default_value = DEFAULT_CATALOG_PATH, global = true)]
    pub catalog: PathBuf,

    /// Path to the saved parameters JSON file.
    #[arg(short, long, default_value = DEFAULT_PARAMS_PATH, global = true)]
    pub params: PathBuf,

    /// Log optimizer decisions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a basket from the catalog.
    Optimize(OptimizeArgs),

    /// List catalog categories and classifications.
    Catalog {
        /// Write the normalized catalog to this CSV file.
        #[arg(long)]
        clean: Option<PathBuf>,
    },

    /// Show the saved parameters.
    Params {
        /// Overwrite the saved parameters with the defaults.
        #[arg(long)]
        reset: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Optimize(OptimizeArgs::default())
    }
}

/// Overrides applied on top of the saved parameters.
#[derive(Args, Debug, Default)]
pub struct OptimizeArgs {
    /// Ask for every parameter interactively.
    #[arg(short, long)]
    pub interactive: bool,

    /// Budget in dollars.
    #[arg(long)]
    pub budget: Option<f64>,

    /// Maximum number of distinct items.
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Only include this category (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Only include this classification (repeatable).
    #[arg(long = "class")]
    pub classes: Vec<String>,

    /// Leave this item out (repeatable).
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    /// Protein weight (+).
    #[arg(long)]
    pub w_protein: Option<f64>,

    /// Fiber weight (+).
    #[arg(long)]
    pub w_fiber: Option<f64>,

    /// Carbs penalty (-).
    #[arg(long)]
    pub w_carbs: Option<f64>,

    /// Fat penalty (-).
    #[arg(long)]
    pub w_fat: Option<f64>,

    /// Soft fat ceiling in grams (999 = off).
    #[arg(long)]
    pub fat_max: Option<f64>,

    /// Soft carb ceiling in grams (999 = off).
    #[arg(long)]
    pub carb_max: Option<f64>,

    /// Protein target in grams (reporting only).
    #[arg(long)]
    pub protein_target: Option<f64>,

    /// Fiber target in grams (reporting only).
    #[arg(long)]
    pub fiber_target: Option<f64>,

    /// Allow several 100g units per item.
    #[arg(long)]
    pub multiples: Option<bool>,

    /// Maximum 100g units per item when multiples are allowed.
    #[arg(long)]
    pub max_qty: Option<u32>,

    /// Export the basket to this CSV file.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Save the effective parameters for next time.
    #[arg(long)]
    pub save: bool,
}

impl OptimizeArgs {
    /// Apply command-line overrides to `base`.
    pub fn apply(&self, base: BasketParams) -> BasketParams {
        let mut params = base;

        if let Some(budget) = self.budget {
            params.budget = budget;
        }
        if let Some(max_items) = self.max_items {
            params.max_items = max_items;
        }
        if !self.categories.is_empty() {
            params.include_categories = Selection::from_values(self.categories.iter().cloned());
        }
        if !self.classes.is_empty() {
            params.include_classes = Selection::from_values(self.classes.iter().cloned());
        }
        if let Some(w) = self.w_protein {
            params.w_protein = w;
        }
        if let Some(w) = self.w_fiber {
            params.w_fiber = w;
        }
        if let Some(w) = self.w_carbs {
            params.w_carbs = w;
        }
        if let Some(w) = self.w_fat {
            params.w_fat = w;
        }
        if let Some(max) = self.fat_max {
            params.fat_max = max;
        }
        if let Some(max) = self.carb_max {
            params.carb_max = max;
        }
        if let Some(target) = self.protein_target {
            params.protein_target = target;
        }
        if let Some(target) = self.fiber_target {
            params.fiber_target = target;
        }
        if let Some(multiples) = self.multiples {
            params.allow_multiples = multiples;
        }
        if let Some(qty) = self.max_qty {
            params.max_qty_per_item = qty;
        }

        params
    }
}
