use serde::Serialize;

/// Per-100g nutrient amounts.
///
/// Used both for a single catalog row and for running basket totals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Nutrients {
    pub protein: f64,
    pub fiber: f64,
    pub fat: f64,
    pub carbs: f64,
    pub calories: f64,
}

impl Nutrients {
    /// Element-wise sum.
    #[inline]
    pub fn plus(&self, other: &Nutrients) -> Nutrients {
        Nutrients {
            protein: self.protein + other.protein,
            fiber: self.fiber + other.fiber,
            fat: self.fat + other.fat,
            carbs: self.carbs + other.carbs,
            calories: self.calories + other.calories,
        }
    }
}

/// A normalized catalog row. All figures are per 100g.
///
/// Serialized with the catalog CSV column names so a normalized table can be
/// written back out and reloaded unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub item_name: String,
    pub category: String,
    pub classification: String,

    #[serde(rename = "price_per_100g")]
    pub price: f64,

    #[serde(rename = "protein_per_100g")]
    pub protein: f64,

    #[serde(rename = "fat_per_100g")]
    pub fat: f64,

    #[serde(rename = "carbs_per_100g")]
    pub carbs: f64,

    #[serde(rename = "fiber_per_100g")]
    pub fiber: f64,

    #[serde(rename = "calories_per_100g")]
    pub calories: f64,
}

impl CatalogItem {
    /// Nutrients contributed by one 100g unit.
    #[inline]
    pub fn nutrients(&self) -> Nutrients {
        Nutrients {
            protein: self.protein,
            fiber: self.fiber,
            fat: self.fat,
            carbs: self.carbs,
            calories: self.calories,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> CatalogItem {
        CatalogItem {
            item_name: "Lentils".to_string(),
            category: "Pantry".to_string(),
            classification: "Legume".to_string(),
            price: 0.45,
            protein: 9.0,
            fat: 0.4,
            carbs: 20.0,
            fiber: 8.0,
            calories: 116.0,
        }
    }

    #[test]
    fn test_nutrients_from_item() {
        let n = sample_item().nutrients();
        assert_eq!(n.protein, 9.0);
        assert_eq!(n.fiber, 8.0);
        assert_eq!(n.calories, 116.0);
    }

    #[test]
    fn test_nutrients_plus() {
        let n = sample_item().nutrients();
        let doubled = n.plus(&n);
        assert!((doubled.protein - 18.0).abs() < 1e-9);
        assert!((doubled.carbs - 40.0).abs() < 1e-9);
        assert!((doubled.calories - 232.0).abs() < 1e-9);
    }

    #[test]
    fn test_plus_default_is_identity() {
        let n = sample_item().nutrients();
        assert_eq!(Nutrients::default().plus(&n), n);
    }
}
