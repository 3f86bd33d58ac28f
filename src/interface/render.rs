use crate::insights::InsightCard;
use crate::localize::{format_currency, format_weight};
use crate::models::{Allocation, FoodItem, Location, PlanSummary, UserPreferences};
use crate::planner::{regionally_available, CategorySeries};
use crate::recommend::{RegionalProfile, Season};

/// Render an optional percentage, with a placeholder when undefined.
fn format_percent(percent: Option<f64>) -> String {
    match percent {
        Some(p) => format!("{p:.0}%"),
        None => "—".to_string(),
    }
}

/// Display the selected shopping list.
pub fn display_shortlist(allocation: &Allocation<'_>, location: Location) {
    if allocation.is_empty() {
        println!("No foods fit the current budget and restrictions.");
        return;
    }

    println!();
    println!("=== Shopping List ===");
    println!();

    // Find max food name length for alignment
    let max_name_len = allocation
        .selected
        .iter()
        .map(|f| f.name.len())
        .max()
        .unwrap_or(10);

    for (i, food) in allocation.selected.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>7} protein | {} [{}]",
            i + 1,
            food.name,
            format_weight(food.protein, location),
            format_currency(food.cost, location),
            food.category,
            width = max_name_len
        );
    }
}

/// Display allocation totals against the user's targets.
pub fn display_summary(summary: &PlanSummary, prefs: &UserPreferences) {
    println!();
    println!("--- Summary ---");
    println!(
        "Protein: {} of {} goal ({})",
        format_weight(summary.total_protein, prefs.location),
        format_weight(prefs.protein_goal, prefs.location),
        format_percent(summary.protein_percent)
    );
    println!(
        "Spent: {} of {} budget ({})",
        format_currency(summary.total_cost, prefs.location),
        format_currency(prefs.budget, prefs.location),
        format_percent(summary.cost_percent)
    );
    println!();
}

/// Display the market analysis grouped by category.
pub fn display_analysis(series: &[CategorySeries], location: Location) {
    if series.is_empty() {
        println!("No foods available for analysis with the current settings.");
        return;
    }

    println!();
    println!("=== Market Analysis ({}) ===", location.code());

    let max_name_len = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| p.name.len() + 1)
        .max()
        .unwrap_or(10);

    let mut any_regional = false;

    for group in series {
        println!();
        println!("--- {} ---", group.category);

        for point in &group.points {
            let marker = if point.regional_pricing { "*" } else { "" };
            any_regional |= point.regional_pricing;

            println!(
                "  {:<width$} {:>7}  {:>9}/g  {:>5.2} g/$",
                format!("{}{}", point.name, marker),
                format_weight(point.protein, location),
                format_currency(point.cost_per_gram, location),
                point.efficiency,
                width = max_name_len
            );
        }
    }

    println!();
    if any_regional {
        println!("* regional pricing");
        println!();
    }
}

/// Display the insight cards.
pub fn display_insights(cards: &[InsightCard]) {
    println!();
    println!("=== Food Insights ===");

    for card in cards {
        println!();
        println!("--- {} ---", card.title);

        if card.entries.is_empty() {
            println!("  (none)");
            continue;
        }

        let max_label_len = card.entries.iter().map(|e| e.label.len()).max().unwrap_or(10);

        for (i, entry) in card.entries.iter().enumerate() {
            println!(
                "  #{} {:<width$} {:>9}  {}",
                i + 1,
                entry.label,
                entry.value,
                entry.detail,
                width = max_label_len
            );
        }
    }

    println!();
}

/// Display regional eating habits and suggested picks.
pub fn display_recommendations(
    profile: &RegionalProfile,
    picks: &[String],
    location: Location,
    season: Season,
) {
    println!();
    println!("=== Regional Recommendations ===");
    println!();
    println!("Location: {} ({}) | Season: {}", location.name(), location.code(), season);

    println!();
    if picks.is_empty() {
        println!("Suggested picks: (none)");
    } else {
        println!("Suggested picks:");
        for (i, pick) in picks.iter().enumerate() {
            println!("{:>3}. {}", i + 1, pick);
        }
    }

    println!();
    println!("Dietary trends: {}", profile.dietary_trends.join(", "));
    println!();
    println!("Typical meals:");
    println!("  Breakfast: {}", profile.meal_patterns.breakfast.join(", "));
    println!("  Lunch: {}", profile.meal_patterns.lunch.join(", "));
    println!("  Dinner: {}", profile.meal_patterns.dinner.join(", "));
    println!();
}

/// Display one food's full details for a location.
pub fn display_food_details(food: &FoodItem, location: Location) {
    println!();
    println!("=== {} ===", food.name);
    println!();
    println!("Category: {}", food.category);
    println!("Protein: {}", format_weight(food.protein, location));
    println!("Cost: {}", format_currency(food.cost, location));

    let origin = match food.location {
        Some(home) if home == location => "Locally sourced".to_string(),
        Some(home) => format!("Imported from {}", home.name()),
        None => "Available worldwide".to_string(),
    };
    println!("Origin: {origin}");

    if !regionally_available(food, location) {
        println!("Not available in {}", location.name());
    }

    println!("Delivery: {}", food.availability.estimated_delivery);
    println!(
        "In season: {}",
        if food.availability.in_season { "yes" } else { "no" }
    );
    println!(
        "Sustainability: {:.0}%",
        food.sustainability_score * 100.0
    );

    if let Some(record) = food.override_for(location) {
        println!(
            "Regional pricing: {} for {}",
            format_currency(record.cost, location),
            format_weight(record.protein, location)
        );
    }

    if let Some(tags) = &food.restrictions {
        if !tags.is_empty() {
            let list: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
            println!("Not suitable for: {}", list.join(", "));
        }
    }

    if let Some(info) = &food.dietary_info {
        let mut claims: Vec<&str> = info
            .iter()
            .filter(|(_, claimed)| **claimed)
            .map(|(tag, _)| tag.as_str())
            .collect();
        claims.sort_unstable();
        if !claims.is_empty() {
            println!("Claims: {}", claims.join(", "));
        }
    }

    println!();
}
