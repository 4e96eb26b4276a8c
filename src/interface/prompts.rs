use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{Result, ShopError};
use crate::models::{BasketParams, Selection};

/// Prompt for the spending budget.
pub fn prompt_budget(default: f64) -> Result<f64> {
    let budget: f64 = Input::new()
        .with_prompt("Budget ($)")
        .default(default)
        .interact_text()?;

    if budget <= 0.0 {
        return Err(ShopError::InvalidInput(
            "Budget must be greater than zero".to_string(),
        ));
    }
    Ok(budget)
}

/// Prompt for the cap on distinct items.
pub fn prompt_max_items(default: usize) -> Result<usize> {
    let max_items: usize = Input::new()
        .with_prompt("Max distinct items")
        .default(default)
        .interact_text()?;

    if max_items == 0 {
        return Err(ShopError::InvalidInput(
            "Max items must be at least 1".to_string(),
        ));
    }
    Ok(max_items)
}

/// Prompt for how many 100g units of one item may be bought.
pub fn prompt_qty_cap(default: u32) -> Result<u32> {
    let cap: u32 = Input::new()
        .with_prompt("Max 100g units per item")
        .default(default.max(1))
        .interact_text()?;

    if !(1..=50).contains(&cap) {
        return Err(ShopError::InvalidInput(
            "Units per item must be between 1 and 50".to_string(),
        ));
    }
    Ok(cap)
}

/// Prompt for a non-negative scoring weight.
pub fn prompt_weight(label: &str, default: f64) -> Result<f64> {
    let weight: f64 = Input::new()
        .with_prompt(label)
        .default(default)
        .interact_text()?;

    if weight < 0.0 {
        return Err(ShopError::InvalidInput(format!(
            "{} cannot be negative",
            label
        )));
    }
    Ok(weight)
}

/// Prompt for an allow-list. Selecting nothing means "no filter".
pub fn prompt_selection(title: &str, options: &[String], current: &Selection) -> Result<Selection> {
    if options.is_empty() {
        return Ok(Selection::Any);
    }

    let checked: Vec<bool> = options
        .iter()
        .map(|o| !current.is_any() && current.allows(o))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt(format!("{} (space to toggle, none = all)", title))
        .items(options)
        .defaults(&checked)
        .interact()?;

    Ok(Selection::from_values(
        picked.into_iter().filter_map(|idx| options.get(idx).cloned()),
    ))
}

/// Prompt for items to leave out, with fuzzy matching on names.
pub fn prompt_exclusions(item_names: &[String]) -> Result<Vec<String>> {
    let mut excluded = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Exclude an item (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Try exact match first (case-insensitive)
        let exact_match = item_names
            .iter()
            .find(|name| name.to_lowercase() == input.to_lowercase());

        if let Some(name) = exact_match {
            excluded.push(name.clone());
            println!("Excluded: {}", name);
            continue;
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&String, f64)> = item_names
            .iter()
            .map(|name| (name, jaro_winkler(&name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        match candidates.as_slice() {
            [] => println!("No matching item found for '{}'", input),
            [(name, _)] => {
                if prompt_yes_no(&format!("Did you mean '{}'?", name), true)? {
                    excluded.push((*name).clone());
                    println!("Excluded: {}", name);
                }
            }
            _ => {
                // Multiple matches - let user select
                let options: Vec<String> = candidates
                    .iter()
                    .take(5)
                    .map(|(name, _)| (*name).clone())
                    .collect();

                let mut selection_options = options.clone();
                selection_options.push("None of these".to_string());

                let selection = Select::new()
                    .with_prompt("Which did you mean?")
                    .items(&selection_options)
                    .default(0)
                    .interact()?;

                if let Some(name) = options.get(selection) {
                    excluded.push(name.clone());
                    println!("Excluded: {}", name);
                }
            }
        }
    }

    Ok(excluded)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Walk the user through every run parameter, starting from `current`.
///
/// Returns the new parameters and the item names to exclude from the catalog.
pub fn collect_basket_params(
    catalog: &Catalog,
    current: &BasketParams,
) -> Result<(BasketParams, Vec<String>)> {
    let budget = prompt_budget(current.budget)?;
    let max_items = prompt_max_items(current.max_items)?;

    let allow_multiples = prompt_yes_no("Allow multiple 100g units per item?", current.allow_multiples)?;
    let max_qty_per_item = if allow_multiples {
        prompt_qty_cap(current.max_qty_per_item)?
    } else {
        current.max_qty_per_item
    };

    let include_categories = prompt_selection(
        "Include categories",
        &catalog.categories(),
        &current.include_categories,
    )?;
    let include_classes = prompt_selection(
        "Include classifications",
        &catalog.classifications(),
        &current.include_classes,
    )?;

    let excluded = prompt_exclusions(&catalog.item_names())?;

    let w_protein = prompt_weight("Protein weight (+)", current.w_protein)?;
    let w_fiber = prompt_weight("Fiber weight (+)", current.w_fiber)?;
    let w_carbs = prompt_weight("Carbs penalty (-)", current.w_carbs)?;
    let w_fat = prompt_weight("Fat penalty (-)", current.w_fat)?;

    let params = BasketParams {
        budget,
        max_items,
        include_categories,
        include_classes,
        w_protein,
        w_fiber,
        w_carbs,
        w_fat,
        allow_multiples,
        max_qty_per_item,
        ..current.clone()
    };

    Ok((params, excluded))
}
