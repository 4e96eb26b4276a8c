use crate::catalog::Catalog;
use crate::models::{BasketLine, BasketParams, Selection, Summary};

/// Display a basket as an aligned table followed by its summary.
pub fn display_basket(basket: &[BasketLine], summary: &Summary, params: &BasketParams) {
    if basket.is_empty() {
        println!("No solution within budget/filters. Try raising the budget or removing filters.");
        return;
    }

    println!();
    println!("=== Basket ===");
    println!();

    let name_width = basket
        .iter()
        .map(|line| line.item_name.len())
        .max()
        .unwrap_or(10)
        .max("Item".len());

    println!(
        "{:>3}  {:<width$}  {:>4}  {:>8}  {:>9}  {:>7}  {:>7}  {:>7}  {:>6}",
        "#",
        "Item",
        "Qty",
        "Cost $",
        "Protein g",
        "Fiber g",
        "Fat g",
        "Carbs g",
        "kcal",
        width = name_width
    );

    for (i, line) in basket.iter().enumerate() {
        println!(
            "{:>3}. {:<width$}  {:>4}  {:>8.2}  {:>9.1}  {:>7.1}  {:>7.1}  {:>7.1}  {:>6.0}",
            i + 1,
            line.item_name,
            line.qty_100g,
            line.line_cost,
            line.protein_g,
            line.fiber_g,
            line.fat_g,
            line.carbs_g,
            line.calories_kcal,
            width = name_width
        );
        println!(
            "     {} / {}",
            line.category, line.classification
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Items: {}", summary.items);
    println!("Total $: {:.2} of {:.2}", summary.spent, params.budget);
    println!(
        "Protein (g): {:.1}{}",
        summary.protein_g,
        target_note(summary.protein_g, params.protein_target)
    );
    println!(
        "Fiber (g): {:.1}{}",
        summary.fiber_g,
        target_note(summary.fiber_g, params.fiber_target)
    );
    println!("Fat (g): {:.1}", summary.fat_g);
    println!("Carbs (g): {:.1}", summary.carbs_g);
    println!("Calories: {:.0}", summary.calories_kcal);
    println!();
}

/// Suffix comparing a total to a target; empty when no target is set.
fn target_note(value: f64, target: f64) -> String {
    if target <= 0.0 {
        String::new()
    } else if value >= target {
        format!("  (target {:.0} met)", target)
    } else {
        format!("  (target {:.0}, short {:.1})", target, target - value)
    }
}

fn selection_label(selection: &Selection) -> String {
    match selection {
        Selection::Any => "all".to_string(),
        Selection::Only(set) => set.iter().cloned().collect::<Vec<_>>().join(", "),
    }
}

/// Display the effective run parameters.
pub fn display_params(params: &BasketParams) {
    println!();
    println!("=== Parameters ===");
    println!("Budget: ${:.2}", params.budget);
    println!("Max items: {}", params.max_items);
    println!("Categories: {}", selection_label(&params.include_categories));
    println!("Classifications: {}", selection_label(&params.include_classes));
    println!(
        "Weights: protein {:.2}, fiber {:.2}, carbs -{:.2}, fat -{:.2}",
        params.w_protein, params.w_fiber, params.w_carbs, params.w_fat
    );
    println!(
        "Targets: protein {:.0} g, fiber {:.0} g",
        params.protein_target, params.fiber_target
    );
    println!(
        "Fat ceiling: {}",
        if params.fat_guardrail_enabled() {
            format!("{:.0} g", params.fat_max)
        } else {
            "off".to_string()
        }
    );
    println!(
        "Carb ceiling: {}",
        if params.carb_guardrail_enabled() {
            format!("{:.0} g", params.carb_max)
        } else {
            "off".to_string()
        }
    );
    if params.allow_multiples {
        println!("Multiples: up to {} x 100g per item", params.max_qty_per_item);
    } else {
        println!("Multiples: off");
    }
    println!();
}

/// Display catalog size and the available facets.
pub fn display_catalog_overview(catalog: &Catalog) {
    println!();
    println!("=== Catalog ({} items) ===", catalog.len());
    println!();

    let categories = catalog.categories();
    println!("Categories ({}):", categories.len());
    for category in &categories {
        println!("  {}", category);
    }

    println!();
    let classes = catalog.classifications();
    println!("Classifications ({}):", classes.len());
    for class in &classes {
        println!("  {}", class);
    }
    println!();
}
