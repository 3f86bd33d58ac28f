use std::collections::HashMap;

use renutri_rs::models::{
    Availability, DietaryTag, FoodCategory, FoodItem, Location, RegionalOverride,
    UserPreferences,
};
use renutri_rs::planner::{filter_eligible, filter_for_analysis};

fn make_food(id: &str, category: FoodCategory) -> FoodItem {
    FoodItem {
        id: id.to_string(),
        name: id.to_string(),
        category,
        protein: 10.0,
        cost: 5.0,
        dietary_info: None,
        restrictions: None,
        regional_data: None,
        location: None,
        coordinates: None,
        availability: Availability {
            in_season: true,
            locally_sourced: false,
            estimated_delivery: "1-2 days".to_string(),
            sustainability_score: 0.5,
        },
        sustainability_score: 0.5,
    }
}

fn prefs_with(restrictions: Vec<DietaryTag>) -> UserPreferences {
    UserPreferences {
        dietary_restrictions: restrictions,
        ..Default::default()
    }
}

#[test]
fn test_vegan_scenario_keeps_only_legumes() {
    let mut beef = make_food("beef", FoodCategory::Meats);
    beef.restrictions = Some(vec![DietaryTag::Vegetarian, DietaryTag::Vegan]);
    let lentils = make_food("lentils", FoodCategory::Legumes);

    let catalog = vec![beef, lentils];
    let prefs = prefs_with(vec![DietaryTag::Vegan]);

    let shortlist = filter_eligible(&catalog, &prefs);
    assert_eq!(shortlist.len(), 1);
    assert_eq!(shortlist[0].id, "lentils");

    let analysis = filter_for_analysis(&catalog, &prefs);
    assert_eq!(analysis.len(), 1);
    assert_eq!(analysis[0].id, "lentils");
}

#[test]
fn test_no_restrictions_passes_everything() {
    let mut beef = make_food("beef", FoodCategory::Meats);
    beef.restrictions = Some(vec![DietaryTag::Vegan]);
    let catalog = vec![beef, make_food("tofu", FoodCategory::Legumes)];

    let prefs = prefs_with(Vec::new());
    assert_eq!(filter_eligible(&catalog, &prefs).len(), 2);
    assert_eq!(filter_for_analysis(&catalog, &prefs).len(), 2);
}

#[test]
fn test_shortlist_path_trusts_declared_restrictions_only() {
    // A meat with no declared restrictions slips past the shortlist
    // filter under vegan, while the analysis path blocks it by
    // category. The two paths diverge on purpose.
    let undeclared_meat = make_food("mystery_meat", FoodCategory::Meats);
    let catalog = vec![undeclared_meat];
    let prefs = prefs_with(vec![DietaryTag::Vegan]);

    assert_eq!(filter_eligible(&catalog, &prefs).len(), 1);
    assert!(filter_for_analysis(&catalog, &prefs).is_empty());
}

#[test]
fn test_analysis_path_is_fail_closed_for_listed_categories() {
    // Even an explicit vegan claim cannot rescue a meat.
    let mut labeled = make_food("labeled_meat", FoodCategory::Meats);
    labeled.dietary_info = Some(HashMap::from([(DietaryTag::Vegan, true)]));
    let catalog = vec![labeled];

    for tag in [DietaryTag::Vegan, DietaryTag::Vegetarian, DietaryTag::Pescatarian] {
        let prefs = prefs_with(vec![tag]);
        assert!(filter_for_analysis(&catalog, &prefs).is_empty());
    }
}

#[test]
fn test_pescatarian_keeps_seafood() {
    let catalog = vec![
        make_food("salmon", FoodCategory::Seafoods),
        make_food("beef", FoodCategory::Meats),
        make_food("eggs", FoodCategory::Eggs),
    ];
    let prefs = prefs_with(vec![DietaryTag::Pescatarian]);

    let passed: Vec<&str> = filter_for_analysis(&catalog, &prefs)
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(passed, vec!["salmon", "eggs"]);
}

#[test]
fn test_gluten_free_needs_a_claim_for_grains() {
    let wheat = make_food("wheat", FoodCategory::Grains);
    let mut quinoa = make_food("quinoa", FoodCategory::Grains);
    quinoa.dietary_info = Some(HashMap::from([(DietaryTag::GlutenFree, true)]));

    let catalog = vec![wheat, quinoa];
    let prefs = prefs_with(vec![DietaryTag::GlutenFree]);

    let passed: Vec<&str> = filter_for_analysis(&catalog, &prefs)
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(passed, vec!["quinoa"]);
}

#[test]
fn test_unknown_tag_fails_open_without_claims() {
    let keto = DietaryTag::Other("keto".to_string());

    let silent = make_food("silent", FoodCategory::Legumes);
    let mut denier = make_food("denier", FoodCategory::Legumes);
    denier.dietary_info = Some(HashMap::from([(keto.clone(), false)]));

    let catalog = vec![silent, denier];
    let prefs = prefs_with(vec![keto]);

    let passed: Vec<&str> = filter_for_analysis(&catalog, &prefs)
        .iter()
        .map(|f| f.id.as_str())
        .collect();
    assert_eq!(passed, vec!["silent"]);
}

#[test]
fn test_all_restrictions_must_hold() {
    // Passes vegetarian, fails dairy-free.
    let cheese = make_food("cheese", FoodCategory::Milks);
    let catalog = vec![cheese];
    let prefs = prefs_with(vec![DietaryTag::Vegetarian, DietaryTag::DairyFree]);

    assert!(filter_for_analysis(&catalog, &prefs).is_empty());
}

#[test]
fn test_analysis_respects_regional_availability() {
    let mut jamon = make_food("jamon", FoodCategory::Meats);
    jamon.location = Some(Location::ES);
    jamon.regional_data = Some(HashMap::from([(
        Location::UK,
        RegionalOverride {
            protein: 43.0,
            cost: 12.0,
            availability: false,
        },
    )]));
    let catalog = vec![jamon];

    let home = UserPreferences {
        location: Location::ES,
        ..Default::default()
    };
    assert_eq!(filter_for_analysis(&catalog, &home).len(), 1);

    let blocked = UserPreferences {
        location: Location::UK,
        ..Default::default()
    };
    assert!(filter_for_analysis(&catalog, &blocked).is_empty());

    // The shortlist path never looks at regional data.
    assert_eq!(filter_eligible(&catalog, &blocked).len(), 1);
}
