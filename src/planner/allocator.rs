use crate::models::{Allocation, FoodItem};

/// Greedily pick foods to hit a protein goal within a budget.
///
/// Candidates are ranked by base protein per unit cost, best first,
/// and each is bought whole or skipped. Selection stops as soon as
/// the running protein total reaches the goal, so a zero goal buys at
/// most one item. Foods without positive protein and cost never rank.
///
/// Ties keep input order. The order among tied foods is an
/// implementation detail, not a contract.
pub fn allocate<'a>(eligible: &[&'a FoodItem], budget: f64, protein_goal: f64) -> Allocation<'a> {
    let mut ranked: Vec<&FoodItem> = eligible.iter().copied().filter(|f| f.is_valid()).collect();
    ranked.sort_by(|a, b| {
        b.protein_per_cost()
            .partial_cmp(&a.protein_per_cost())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut selected = Vec::new();
    let mut remaining = budget;
    let mut total_protein = 0.0;

    for food in ranked {
        if remaining >= food.cost {
            selected.push(food);
            remaining -= food.cost;
            total_protein += food.protein;

            if total_protein >= protein_goal {
                break;
            }
        }
    }

    Allocation {
        selected,
        total_protein,
        total_cost: budget - remaining,
    }
}
