//! Explicit state for the numeric inputs of a run.
//!
//! Commands build an [`InputSet`] from config defaults, then layer a loaded
//! preset and finally any flags on top. Nothing here is global; the set is
//! passed to whatever needs it.

use serde::{Deserialize, Serialize};

use crate::metrics::CalculationInput;

/// The five figures a run works with: the four calculator inputs plus the
/// current monthly revenue used for the gap analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSet {
    pub fixed_costs: f64,
    pub variable_cost_pct: f64,
    pub target_profit_pct: f64,
    pub average_ticket: f64,
    pub current_revenue: f64,
}

impl InputSet {
    /// The slice of the set the calculator consumes.
    pub fn calculation_input(&self) -> CalculationInput {
        CalculationInput {
            fixed_costs: self.fixed_costs,
            variable_cost_pct: self.variable_cost_pct,
            target_profit_pct: self.target_profit_pct,
            average_ticket: self.average_ticket,
        }
    }

    /// Overlay flag values onto the set; `None` keeps the current figure.
    pub fn apply_overrides(
        &mut self,
        fixed_costs: Option<f64>,
        variable_cost_pct: Option<f64>,
        target_profit_pct: Option<f64>,
        average_ticket: Option<f64>,
        current_revenue: Option<f64>,
    ) {
        if let Some(value) = fixed_costs {
            self.fixed_costs = value;
        }
        if let Some(value) = variable_cost_pct {
            self.variable_cost_pct = value;
        }
        if let Some(value) = target_profit_pct {
            self.target_profit_pct = value;
        }
        if let Some(value) = average_ticket {
            self.average_ticket = value;
        }
        if let Some(value) = current_revenue {
            self.current_revenue = value;
        }
    }
}
