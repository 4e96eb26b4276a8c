use serde::Serialize;

use crate::models::{CatalogItem, Nutrients};

/// Round to a fixed number of decimal places, halves to the even digit.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// One output row: a distinct catalog item and how many 100g units were bought.
///
/// Field names match the exported CSV header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasketLine {
    pub item_name: String,
    pub category: String,
    pub classification: String,
    pub qty_100g: u32,

    /// Sum of unit prices, rounded to cents after every unit.
    #[serde(rename = "line_cost_$")]
    pub line_cost: f64,

    pub protein_g: f64,
    pub fiber_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub calories_kcal: f64,
}

impl BasketLine {
    /// Start a line holding a single 100g unit of `item`.
    pub fn first_unit(item: &CatalogItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            category: item.category.clone(),
            classification: item.classification.clone(),
            qty_100g: 1,
            line_cost: round_to(item.price, 2),
            protein_g: item.protein,
            fiber_g: item.fiber,
            fat_g: item.fat,
            carbs_g: item.carbs,
            calories_kcal: item.calories,
        }
    }

    /// Record one more 100g unit of `item`.
    pub fn add_unit(&mut self, item: &CatalogItem) {
        self.qty_100g += 1;
        self.line_cost = round_to(self.line_cost + item.price, 2);
        self.protein_g += item.protein;
        self.fiber_g += item.fiber;
        self.fat_g += item.fat;
        self.carbs_g += item.carbs;
        self.calories_kcal += item.calories;
    }
}

/// Aggregate figures for a finished basket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub items: usize,

    #[serde(rename = "spent_$")]
    pub spent: f64,

    pub protein_g: f64,
    pub fiber_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// Build a summary from raw running totals.
    ///
    /// Money is rounded to 2 decimals, grams to 1, calories to a whole number.
    pub fn from_totals(items: usize, spent: f64, totals: &Nutrients) -> Self {
        Self {
            items,
            spent: round_to(spent, 2),
            protein_g: round_to(totals.protein, 1),
            fiber_g: round_to(totals.fiber, 1),
            fat_g: round_to(totals.fat, 1),
            carbs_g: round_to(totals.carbs, 1),
            calories_kcal: totals.calories.round_ties_even(),
        }
    }
}
