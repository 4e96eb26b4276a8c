use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::optimizer::constants::*;

/// An allow-list filter over catalog facets (category or classification).
///
/// Persisted as `null` (no filter) or a list of names. An empty list is read
/// back as `Any`, so "no constraint" has exactly one representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Selection {
    #[default]
    Any,
    Only(BTreeSet<String>),
}

impl Selection {
    /// Build a selection from a list of values; empty means `Any`.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            Selection::Any
        } else {
            Selection::Only(set)
        }
    }

    /// Whether `value` passes this filter.
    pub fn allows(&self, value: &str) -> bool {
        match self {
            Selection::Any => true,
            Selection::Only(set) => set.contains(value),
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selection::Any)
    }
}

impl From<Option<Vec<String>>> for Selection {
    fn from(values: Option<Vec<String>>) -> Self {
        Selection::from_values(values.unwrap_or_default())
    }
}

impl From<Selection> for Option<Vec<String>> {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::Any => None,
            Selection::Only(set) => Some(set.into_iter().collect()),
        }
    }
}

/// The four scoring weights, split out of [`BasketParams`] for the scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub protein: f64,
    pub fiber: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Parameters for a single optimizer run.
///
/// JSON field names follow the persisted preferences file. Out-of-range values
/// are not rejected; they simply tend to produce an empty or tiny basket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasketParams {
    pub budget: f64,

    /// Cap on distinct lines, not on total units.
    pub max_items: usize,

    pub include_categories: Selection,
    pub include_classes: Selection,

    #[serde(rename = "wP")]
    pub w_protein: f64,

    #[serde(rename = "wFi")]
    pub w_fiber: f64,

    #[serde(rename = "wC")]
    pub w_carbs: f64,

    #[serde(rename = "wF")]
    pub w_fat: f64,

    /// Reporting targets; the builder never reads these.
    #[serde(rename = "tProtein")]
    pub protein_target: f64,

    #[serde(rename = "tFiber")]
    pub fiber_target: f64,

    /// Soft fat ceiling in grams. Values at or above
    /// [`GUARDRAIL_DISABLED_AT`] switch the guardrail off.
    #[serde(rename = "tFatMax")]
    pub fat_max: f64,

    #[serde(rename = "tCarbMax")]
    pub carb_max: f64,

    pub allow_multiples: bool,

    /// 100g units per item; only honoured when `allow_multiples` is set.
    pub max_qty_per_item: u32,
}

impl Default for BasketParams {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            max_items: DEFAULT_MAX_ITEMS,
            include_categories: Selection::Any,
            include_classes: Selection::Any,
            w_protein: DEFAULT_W_PROTEIN,
            w_fiber: DEFAULT_W_FIBER,
            w_carbs: DEFAULT_W_CARBS,
            w_fat: DEFAULT_W_FAT,
            protein_target: 0.0,
            fiber_target: 0.0,
            fat_max: CEILING_DISABLED,
            carb_max: CEILING_DISABLED,
            allow_multiples: false,
            max_qty_per_item: 1,
        }
    }
}

impl BasketParams {
    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            protein: self.w_protein,
            fiber: self.w_fiber,
            carbs: self.w_carbs,
            fat: self.w_fat,
        }
    }

    /// Units of a single item the builder may buy.
    pub fn unit_cap(&self) -> u32 {
        if self.allow_multiples {
            self.max_qty_per_item
        } else {
            1
        }
    }

    pub fn fat_guardrail_enabled(&self) -> bool {
        self.fat_max < GUARDRAIL_DISABLED_AT
    }

    pub fn carb_guardrail_enabled(&self) -> bool {
        self.carb_max < GUARDRAIL_DISABLED_AT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_empty_is_any() {
        assert_eq!(Selection::from_values(Vec::<String>::new()), Selection::Any);
        assert_eq!(Selection::from(Some(Vec::new())), Selection::Any);
        assert_eq!(Selection::from(None), Selection::Any);
    }

    #[test]
    fn test_selection_allows() {
        let only = Selection::from_values(["Dairy", "Meat"]);
        assert!(only.allows("Dairy"));
        assert!(!only.allows("dairy"));
        assert!(!only.allows("Produce"));
        assert!(Selection::Any.allows("anything"));
    }

    #[test]
    fn test_unit_cap() {
        let mut params = BasketParams {
            max_qty_per_item: 7,
            ..BasketParams::default()
        };
        assert_eq!(params.unit_cap(), 1);

        params.allow_multiples = true;
        assert_eq!(params.unit_cap(), 7);
    }

    #[test]
    fn test_default_guardrails_disabled() {
        let params = BasketParams::default();
        assert!(!params.fat_guardrail_enabled());
        assert!(!params.carb_guardrail_enabled());

        let params = BasketParams {
            fat_max: 60.0,
            ..BasketParams::default()
        };
        assert!(params.fat_guardrail_enabled());
    }

    #[test]
    fn test_json_field_names() {
        let params = BasketParams {
            include_classes: Selection::from_values(["Vegetable"]),
            ..BasketParams::default()
        };
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["wP"], 1.0);
        assert_eq!(value["tFatMax"], 999.0);
        assert!(value["include_categories"].is_null());
        assert_eq!(value["include_classes"][0], "Vegetable");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let params: BasketParams =
            serde_json::from_str(r#"{"budget": 25, "include_categories": []}"#).unwrap();

        assert_eq!(params.budget, 25.0);
        assert_eq!(params.max_items, 15);
        assert!(params.include_categories.is_any());
        assert_eq!(params.w_fiber, 0.3);
    }
}
