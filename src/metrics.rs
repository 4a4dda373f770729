//! Break-even formulas.
//!
//! [`calculate`] is a pure function: it never reads config, storage or the
//! terminal, and callers decide how its output is rendered. Figures that
//! have no finite answer carry `f64::INFINITY` so downstream code can show
//! a placeholder instead of a misleading number.

use serde::{Deserialize, Serialize};

/// Warning attached to the result when no revenue level can work.
pub const MARGIN_WARNING: &str =
    "Variable costs plus target profit reach 100% of revenue; lower one of the percentages so a solution exists.";

/// The four figures the calculator consumes. Percentages are expressed as
/// 0-100, not fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Monthly fixed costs in R$
    pub fixed_costs: f64,
    /// Variable costs as a percentage of revenue
    pub variable_cost_pct: f64,
    /// Desired profit as a percentage of revenue
    pub target_profit_pct: f64,
    /// Average sale value in R$
    pub average_ticket: f64,
}

/// Derived figures. `f64::INFINITY` marks a figure with no finite answer.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Revenue needed to cover fixed costs, variable costs and the target profit
    pub minimum_revenue: f64,
    /// Revenue at which profit is exactly zero
    pub break_even_revenue: f64,
    /// Sales per month needed to reach the minimum revenue
    pub required_sales_count: f64,
    /// Set when the percentages leave no room for a solution
    pub warning: Option<String>,
}

impl CalculationResult {
    /// True when every figure came out finite.
    pub fn is_solvable(&self) -> bool {
        self.minimum_revenue.is_finite()
    }
}

/// Gap between the minimum revenue target and what the business currently
/// brings in per month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevenueGap {
    /// No finite minimum revenue exists, so there is nothing to compare
    Unbounded,
    /// Current revenue already covers the target
    Reached,
    /// Amount still missing per month, in R$
    Short(f64),
}

/// Compute the minimum revenue, the break-even point and the sales count.
///
/// When variable costs plus target profit eat 100% or more of each sale,
/// every figure is unbounded and the result carries [`MARGIN_WARNING`].
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let variable_fraction = input.variable_cost_pct / 100.0;
    let profit_fraction = input.target_profit_pct / 100.0;
    let denominator = 1.0 - variable_fraction - profit_fraction;

    if denominator <= 0.0 {
        return CalculationResult {
            minimum_revenue: f64::INFINITY,
            break_even_revenue: f64::INFINITY,
            required_sales_count: f64::INFINITY,
            warning: Some(MARGIN_WARNING.to_string()),
        };
    }

    let minimum_revenue = input.fixed_costs / denominator;

    let contribution = 1.0 - variable_fraction;
    let break_even_revenue = if contribution > 0.0 {
        input.fixed_costs / contribution
    } else {
        f64::INFINITY
    };

    let required_sales_count = if input.average_ticket > 0.0 {
        minimum_revenue / input.average_ticket
    } else {
        f64::INFINITY
    };

    CalculationResult {
        minimum_revenue,
        break_even_revenue,
        required_sales_count,
        warning: None,
    }
}

/// Compare the minimum revenue against the current monthly revenue.
pub fn revenue_gap(result: &CalculationResult, current_revenue: f64) -> RevenueGap {
    if !result.minimum_revenue.is_finite() {
        return RevenueGap::Unbounded;
    }

    let gap = result.minimum_revenue - current_revenue;
    if gap <= 0.0 {
        RevenueGap::Reached
    } else {
        RevenueGap::Short(gap)
    }
}
