use crate::models::{Allocation, PlanSummary, UserPreferences};

/// Express an allocation's totals against the user's targets.
pub fn summarize(allocation: &Allocation<'_>, prefs: &UserPreferences) -> PlanSummary {
    PlanSummary {
        total_protein: allocation.total_protein,
        total_cost: allocation.total_cost,
        protein_percent: percent_of(allocation.total_protein, prefs.protein_goal),
        cost_percent: percent_of(allocation.total_cost, prefs.budget),
    }
}

/// Percentage of `value` against `divisor`, undefined for non-positive divisors.
fn percent_of(value: f64, divisor: f64) -> Option<f64> {
    if divisor > 0.0 {
        Some(value / divisor * 100.0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentages_against_targets() {
        let allocation = Allocation {
            selected: Vec::new(),
            total_protein: 39.0,
            total_cost: 6.49,
        };
        let prefs = UserPreferences {
            protein_goal: 50.0,
            budget: 20.0,
            ..Default::default()
        };

        let summary = summarize(&allocation, &prefs);
        assert_eq!(summary.protein_percent, Some(78.0));
        assert!((summary.cost_percent.unwrap() - 32.45).abs() < 1e-9);
    }

    #[test]
    fn test_zero_targets_have_no_percentage() {
        let allocation = Allocation {
            selected: Vec::new(),
            total_protein: 10.0,
            total_cost: 5.0,
        };
        let prefs = UserPreferences {
            protein_goal: 0.0,
            budget: 0.0,
            ..Default::default()
        };

        let summary = summarize(&allocation, &prefs);
        assert_eq!(summary.protein_percent, None);
        assert_eq!(summary.cost_percent, None);
    }
}
