use tracing::{debug, info};

use crate::models::{BasketLine, BasketParams, CatalogItem, Nutrients, Summary};
use crate::optimizer::constants::GUARDRAIL_FRACTION;
use crate::optimizer::scoring::value_per_dollar;

/// A catalog row with its value-per-dollar score.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
}

/// Loop state threaded through the greedy walk.
#[derive(Debug, Default)]
struct Accumulator {
    spent: f64,
    totals: Nutrients,
    basket: Vec<BasketLine>,
}

/// Keep rows allowed by both the category and classification filters.
pub fn filter_items<'a>(items: &'a [CatalogItem], params: &BasketParams) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| params.include_categories.allows(&item.category))
        .filter(|item| params.include_classes.allows(&item.classification))
        .collect()
}

/// Score every row and order best first.
///
/// Higher score wins; equal scores go to the cheaper row. The sort is stable,
/// so rows equal on both keys keep catalog order.
pub fn rank_candidates<'a>(items: &[&'a CatalogItem], params: &BasketParams) -> Vec<Candidate<'a>> {
    let weights = params.weights();
    let mut ranked: Vec<Candidate<'a>> = items
        .iter()
        .map(|&item| Candidate {
            item,
            score: value_per_dollar(item, &weights),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.item.price.total_cmp(&b.item.price))
    });

    ranked
}

/// Fat guardrail: near the ceiling, refuse items that carry more fat than protein.
fn fat_guardrail_trips(item: &CatalogItem, tentative: &Nutrients, params: &BasketParams) -> bool {
    params.fat_guardrail_enabled()
        && tentative.fat > GUARDRAIL_FRACTION * params.fat_max
        && item.fat > item.protein
}

/// Carb guardrail: near the ceiling, refuse carb-heavy items. Fiber raises the bar.
fn carb_guardrail_trips(item: &CatalogItem, tentative: &Nutrients, params: &BasketParams) -> bool {
    params.carb_guardrail_enabled()
        && tentative.carbs > GUARDRAIL_FRACTION * params.carb_max
        && item.carbs > 2.0 * (1.0 + item.fiber)
}

/// Buy as many 100g units of `item` as the caps, budget and guardrails allow.
///
/// The basket-size check here is `<=`, one looser than the walk's `>=`, so the
/// item that fills the last slot can still take all its units.
fn take_units(mut acc: Accumulator, item: &CatalogItem, params: &BasketParams) -> Accumulator {
    let unit_cap = params.unit_cap();
    let per_unit = item.nutrients();
    let mut units = 0;

    while units < unit_cap
        && acc.basket.len() <= params.max_items
        && acc.spent + item.price <= params.budget
    {
        let tentative = acc.totals.plus(&per_unit);

        if fat_guardrail_trips(item, &tentative, params) {
            debug!(item = %item.item_name, units, fat = tentative.fat, "fat guardrail tripped");
            break;
        }
        if carb_guardrail_trips(item, &tentative, params) {
            debug!(item = %item.item_name, units, carbs = tentative.carbs, "carb guardrail tripped");
            break;
        }

        if units == 0 {
            acc.basket.push(BasketLine::first_unit(item));
        } else if let Some(line) = acc.basket.last_mut() {
            line.add_unit(item);
        }

        units += 1;
        acc.spent += item.price;
        acc.totals = tentative;
    }

    if units > 0 {
        debug!(item = %item.item_name, units, spent = acc.spent, "committed");
    }

    acc
}

/// Build a basket greedily from `items` under `params`.
///
/// Rows are filtered, ranked once by value per dollar, then walked in order.
/// Each row takes as many units as it can before the walk moves on; nothing
/// is revisited, so the result is a fast approximation rather than the best
/// basket the budget allows.
///
/// An empty filter result or an unaffordable catalog returns an empty basket
/// with a zeroed summary.
pub fn build_basket(items: &[CatalogItem], params: &BasketParams) -> (Vec<BasketLine>, Summary) {
    let filtered = filter_items(items, params);
    if filtered.is_empty() {
        info!("no catalog rows match the category/classification filters");
        return (Vec::new(), Summary::default());
    }

    let ranked = rank_candidates(&filtered, params);
    debug!(candidates = ranked.len(), "ranked candidates");

    let mut acc = Accumulator::default();
    for candidate in ranked {
        // Distinct-item cap
        if acc.basket.len() >= params.max_items {
            break;
        }

        if candidate.item.price <= 0.0 {
            debug!(item = %candidate.item.item_name, "skipping zero-price row");
            continue;
        }

        acc = take_units(acc, candidate.item, params);
    }

    let summary = Summary::from_totals(acc.basket.len(), acc.spent, &acc.totals);
    info!(items = summary.items, spent = summary.spent, "basket built");

    (acc.basket, summary)
}
