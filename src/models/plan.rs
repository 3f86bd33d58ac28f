use super::food::FoodItem;

/// Result of a greedy shopping-list allocation.
#[derive(Debug, Clone)]
pub struct Allocation<'a> {
    /// Selected foods in ranking order.
    pub selected: Vec<&'a FoodItem>,

    /// Protein in grams across the selection.
    pub total_protein: f64,

    /// Budget consumed by the selection.
    pub total_cost: f64,
}

impl Allocation<'_> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.selected.len()
    }
}

/// Allocation totals expressed against the user's targets.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanSummary {
    pub total_protein: f64,
    pub total_cost: f64,

    /// Share of the protein goal achieved. `None` when the goal is not positive.
    pub protein_percent: Option<f64>,

    /// Share of the budget spent. `None` when the budget is not positive.
    pub cost_percent: Option<f64>,
}
