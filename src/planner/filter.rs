use crate::models::{DietaryTag, FoodCategory, FoodItem, Location, UserPreferences};

/// Filter the catalog down to foods compatible with the user's restrictions.
///
/// This is the shortlist path: it trusts each food's declared
/// `restrictions` list and nothing else. Foods with no declared
/// restrictions always pass, as does everything when the user has none.
pub fn filter_eligible<'a>(foods: &'a [FoodItem], prefs: &UserPreferences) -> Vec<&'a FoodItem> {
    foods
        .iter()
        .filter(|food| {
            if prefs.dietary_restrictions.is_empty() {
                return true;
            }
            match &food.restrictions {
                Some(violated) => !violated
                    .iter()
                    .any(|tag| prefs.dietary_restrictions.contains(tag)),
                None => true,
            }
        })
        .collect()
}

/// Filter the catalog for the market analysis view.
///
/// Stricter than the shortlist path: a food must be available in the
/// active region and pass category-level rules for every restriction.
pub fn filter_for_analysis<'a>(
    foods: &'a [FoodItem],
    prefs: &UserPreferences,
) -> Vec<&'a FoodItem> {
    foods
        .iter()
        .filter(|food| {
            regionally_available(food, prefs.location)
                && meets_restrictions(food, &prefs.dietary_restrictions)
        })
        .collect()
}

/// Whether a food can be bought in the given region.
///
/// Local and global foods are always available. Imported foods are
/// available unless a regional record says otherwise.
pub fn regionally_available(food: &FoodItem, location: Location) -> bool {
    food.is_local_to(location)
        || food.is_global()
        || food.override_for(location).map_or(true, |r| r.availability)
}

/// Whether a food satisfies every restriction in the list.
pub fn meets_restrictions(food: &FoodItem, restrictions: &[DietaryTag]) -> bool {
    restrictions
        .iter()
        .all(|tag| satisfies_restriction(food, tag))
}

/// Category-level rule for one restriction.
///
/// Gluten-free and dairy-free admit foods from the suspect category
/// only on an explicit claim. Unrecognized tags consult the food's
/// claims and pass when the food says nothing.
fn satisfies_restriction(food: &FoodItem, tag: &DietaryTag) -> bool {
    match tag {
        DietaryTag::None => true,
        DietaryTag::Vegetarian => !matches!(
            food.category,
            FoodCategory::Meats | FoodCategory::Seafoods
        ),
        DietaryTag::Vegan => !matches!(
            food.category,
            FoodCategory::Meats | FoodCategory::Seafoods | FoodCategory::Eggs | FoodCategory::Milks
        ),
        DietaryTag::Pescatarian => food.category != FoodCategory::Meats,
        DietaryTag::GlutenFree => {
            food.category != FoodCategory::Grains || food.dietary_flag(tag).unwrap_or(false)
        }
        DietaryTag::DairyFree => {
            food.category != FoodCategory::Milks || food.dietary_flag(tag).unwrap_or(false)
        }
        DietaryTag::Other(_) => food.dietary_flag(tag).unwrap_or(true),
    }
}
