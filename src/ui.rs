//! Centralized UI formatting and color utilities
//!
//! This module provides the terminal rendering for calculator results and
//! validation feedback, plus the color scheme used throughout the revmin CLI.

use colored::Colorize;

use crate::formatters::{format_brl, format_count, UNDEFINED_FIGURE};
use crate::metrics::{revenue_gap, CalculationResult, RevenueGap};
use crate::session::InputSet;

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("REVMIN_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Render the result block shown once the lead gate opens.
pub fn format_results(inputs: &InputSet, result: &CalculationResult) -> String {
    let mut output = vec![
        colors::heading("Results").to_string(),
        format::separator(7),
    ];

    if let Some(warning) = &result.warning {
        output.push(colors::warning(warning).to_string());
        output.push(String::new());
    }

    output.push(result_line(
        "Minimum revenue",
        &format_brl(result.minimum_revenue),
    ));
    output.push(result_line(
        "Break-even point",
        &format_brl(result.break_even_revenue),
    ));
    output.push(result_line(
        "Sales needed",
        &sales_value(result.required_sales_count),
    ));
    output.push(result_line(
        "Gap vs current",
        &gap_value(result, inputs.current_revenue),
    ));

    output.join("\n")
}

fn result_line(label: &str, value: &str) -> String {
    format!("  {:<18} {}", label, value.bold())
}

fn sales_value(count: f64) -> String {
    if count.is_finite() {
        format!("{}/month", format_count(count))
    } else {
        UNDEFINED_FIGURE.to_string()
    }
}

fn gap_value(result: &CalculationResult, current_revenue: f64) -> String {
    match revenue_gap(result, current_revenue) {
        RevenueGap::Unbounded => UNDEFINED_FIGURE.to_string(),
        RevenueGap::Reached => colors::success("reached").to_string(),
        RevenueGap::Short(gap) => format!("{} missing", format_brl(gap)),
    }
}

/// Feedback line for a field that passed validation.
pub fn field_ok(label: &str) -> String {
    format!("{} {}", "✔".green(), label)
}

/// Feedback line for a field that failed validation.
pub fn field_error(label: &str, message: &str) -> String {
    format!("{} {}: {}", "✗".red(), label, message)
}

/// Color scheme for terminal output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success/completion
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (e-mail keys, file paths)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Blue for informational text
    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "─".repeat(width)
    }
}
