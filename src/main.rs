use clap::Parser;
use std::path::Path;

use renutri_rs::catalog::{builtin_catalog, load_or_builtin, save_catalog};
use renutri_rs::cli::{Cli, Command};
use renutri_rs::error::{NutriError, Result};
use renutri_rs::insights::build_insights;
use renutri_rs::interface::{
    collect_preferences, display_analysis, display_food_details, display_insights,
    display_recommendations, display_shortlist, display_summary, find_food, prompt_location,
};
use renutri_rs::localize::reprice_catalog;
use renutri_rs::models::{DietaryTag, FoodItem, Location, UserPreferences};
use renutri_rs::planner::{
    allocate, build_analysis, filter_eligible, summarize, write_analysis_csv,
};
use renutri_rs::recommend::{profile_for, recommendations, Season};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            goal,
            budget,
            restrict,
            location,
        } => cmd_plan(&cli.file, goal, budget, restrict, location.as_deref()),
        Command::Analyze {
            location,
            restrict,
            csv,
        } => cmd_analyze(&cli.file, &location, &restrict, csv.as_deref()),
        Command::Insights { location } => cmd_insights(&cli.file, &location),
        Command::Recommend {
            location,
            season,
            restrict,
        } => cmd_recommend(&location, season.as_deref(), &restrict),
        Command::Show { name, location } => cmd_show(&cli.file, &name, &location),
        Command::Init { force } => cmd_init(&cli.file, force),
    }
}

/// Parse a location flag, warning on unknown codes.
fn parse_location(code: &str) -> Location {
    match Location::parse(code) {
        Some(location) => location,
        None => {
            eprintln!("Unknown location code '{code}', using US");
            Location::US
        }
    }
}

/// Parse restriction flags into tags.
fn parse_tags(raw: &[String]) -> Vec<DietaryTag> {
    raw.iter().map(|s| DietaryTag::from(s.clone())).collect()
}

/// Load the catalog and price it in the location's currency.
fn load_catalog_for(file_path: &str, location: Location) -> Vec<FoodItem> {
    let mut foods = load_or_builtin(file_path, location);
    if location != Location::US {
        reprice_catalog(&mut foods, Location::US, location);
    }
    foods
}

/// Build and display a shopping list.
fn cmd_plan(
    file_path: &str,
    goal: Option<f64>,
    budget: Option<f64>,
    restrict: Option<Vec<String>>,
    location: Option<&str>,
) -> Result<()> {
    let location = match location {
        Some(code) => parse_location(code),
        None => prompt_location()?,
    };

    let restrictions = restrict.map(|r| parse_tags(&r));
    let prefs = collect_preferences(goal, budget, restrictions, location)?;

    let foods = load_catalog_for(file_path, location);
    println!("Loaded {} foods", foods.len());

    let eligible = filter_eligible(&foods, &prefs);
    if eligible.is_empty() {
        println!("No foods match your dietary restrictions.");
        return Ok(());
    }

    let allocation = allocate(&eligible, prefs.budget, prefs.protein_goal);
    display_shortlist(&allocation, location);

    if !allocation.is_empty() {
        display_summary(&summarize(&allocation, &prefs), &prefs);

        if allocation.total_protein < prefs.protein_goal {
            println!("The protein goal could not be met within this budget.");
        }
    }

    Ok(())
}

/// Chart regional protein efficiency by category.
fn cmd_analyze(
    file_path: &str,
    location: &str,
    restrict: &[String],
    csv: Option<&str>,
) -> Result<()> {
    let location = parse_location(location);
    let prefs = UserPreferences {
        dietary_restrictions: parse_tags(restrict),
        location,
        ..Default::default()
    };

    let foods = load_catalog_for(file_path, location);
    let series = build_analysis(&foods, &prefs);
    display_analysis(&series, location);

    if let Some(path) = csv {
        write_analysis_csv(&series, Path::new(path))?;
        println!("Analysis written to {path}");
    }

    Ok(())
}

/// Show food highlights for a region.
fn cmd_insights(file_path: &str, location: &str) -> Result<()> {
    let location = parse_location(location);
    let foods = load_catalog_for(file_path, location);

    display_insights(&build_insights(&foods, location));
    Ok(())
}

/// Suggest foods from regional habits and the season.
fn cmd_recommend(location: &str, season: Option<&str>, restrict: &[String]) -> Result<()> {
    let location = parse_location(location);
    let season = match season {
        Some(name) => Season::parse(name)
            .ok_or_else(|| NutriError::InvalidInput(format!("Unknown season '{name}'")))?,
        None => Season::current(),
    };

    let restrictions = parse_tags(restrict);
    let picks = recommendations(location, season, &restrictions);
    display_recommendations(profile_for(location), &picks, location, season);
    Ok(())
}

/// Look up one food and show its details.
fn cmd_show(file_path: &str, name: &str, location: &str) -> Result<()> {
    let location = parse_location(location);
    let foods = load_catalog_for(file_path, location);

    match find_food(&foods, name)? {
        Some(food) => {
            display_food_details(food, location);
            Ok(())
        }
        None => Err(NutriError::FoodNotFound(name.to_string())),
    }
}

/// Write the built-in catalog to disk.
fn cmd_init(file_path: &str, force: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() && !force {
        println!("Catalog file already exists: {file_path} (use --force to overwrite)");
        return Ok(());
    }

    save_catalog(path, &builtin_catalog())?;
    println!("Wrote built-in catalog to {file_path}");
    Ok(())
}
