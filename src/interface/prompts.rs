use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::models::{DietaryTag, FoodItem, Location, UserPreferences};

/// Prompt for the daily protein goal in grams.
pub fn prompt_protein_goal() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("What is your protein goal (grams)?")
        .default("150".to_string())
        .interact_text()?;

    let goal: f64 = input
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if goal < 0.0 {
        return Err(NutriError::InvalidInput(
            "Protein goal cannot be negative".to_string(),
        ));
    }

    Ok(goal)
}

/// Prompt for the shopping budget in the active currency.
pub fn prompt_budget(location: Location) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("What is your budget ({})?", location.currency_code()))
        .default("50".to_string())
        .interact_text()?;

    let budget: f64 = input
        .parse()
        .map_err(|_| NutriError::InvalidInput("Invalid number".to_string()))?;

    if budget < 0.0 {
        return Err(NutriError::InvalidInput(
            "Budget cannot be negative".to_string(),
        ));
    }

    Ok(budget)
}

/// Prompt for dietary restrictions (multi-select, empty means none).
pub fn prompt_restrictions() -> Result<Vec<DietaryTag>> {
    let labels: Vec<String> = DietaryTag::SELECTABLE
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();

    let picked = MultiSelect::new()
        .with_prompt("Any dietary restrictions? (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;

    Ok(picked
        .into_iter()
        .map(|i| DietaryTag::SELECTABLE[i].clone())
        .collect())
}

/// Prompt for the active location.
pub fn prompt_location() -> Result<Location> {
    let options: Vec<String> = Location::ALL
        .iter()
        .map(|loc| format!("{} ({})", loc.name(), loc.code()))
        .collect();

    let selection = Select::new()
        .with_prompt("Where are you shopping?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Location::ALL[selection])
}

/// Find a food by name with fuzzy matching.
///
/// Tries a case-insensitive exact match first, then offers close
/// matches for confirmation. Returns `None` when nothing matches or
/// the user declines every suggestion.
pub fn find_food<'a>(foods: &'a [FoodItem], query: &str) -> Result<Option<&'a FoodItem>> {
    let query = query.trim();

    // Try exact match first (case-insensitive)
    if let Some(food) = foods.iter().find(|f| f.key() == query.to_lowercase()) {
        return Ok(Some(food));
    }

    // Try fuzzy matching
    let mut candidates: Vec<(&FoodItem, f64)> = foods
        .iter()
        .map(|f| (f, jaro_winkler(&f.key(), &query.to_lowercase())))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;

        return Ok(confirm.then_some(food));
    }

    // Multiple matches - let user select
    let shortlist: Vec<&FoodItem> = candidates.iter().take(5).map(|(f, _)| *f).collect();

    let mut options: Vec<String> = shortlist.iter().map(|f| f.name.clone()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(shortlist.get(selection).copied())
}

/// Collect a full set of preferences, prompting for anything not
/// already supplied on the command line.
pub fn collect_preferences(
    goal: Option<f64>,
    budget: Option<f64>,
    restrictions: Option<Vec<DietaryTag>>,
    location: Location,
) -> Result<UserPreferences> {
    let protein_goal = match goal {
        Some(g) => g,
        None => prompt_protein_goal()?,
    };
    let budget = match budget {
        Some(b) => b,
        None => prompt_budget(location)?,
    };
    let dietary_restrictions = match restrictions {
        Some(r) => r,
        None => prompt_restrictions()?,
    };

    Ok(UserPreferences {
        protein_goal,
        budget,
        dietary_restrictions,
        location,
        ..Default::default()
    })
}
