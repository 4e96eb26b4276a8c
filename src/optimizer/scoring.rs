use crate::models::{CatalogItem, ScoreWeights};
use crate::optimizer::constants::SCORE_SENTINEL;

/// Weighted nutrition per dollar for one 100g unit.
///
/// Protein and fiber are rewarded, carbs and fat penalised, and the sum is
/// divided by price. A zero price is never divided by; it scores
/// [`SCORE_SENTINEL`] along with any other non-finite result.
pub fn value_per_dollar(item: &CatalogItem, weights: &ScoreWeights) -> f64 {
    if item.price == 0.0 {
        return SCORE_SENTINEL;
    }

    let numerator = weights.protein * item.protein + weights.fiber * item.fiber
        - weights.carbs * item.carbs
        - weights.fat * item.fat;
    let score = numerator / item.price;

    if score.is_finite() { score } else { SCORE_SENTINEL }
}
