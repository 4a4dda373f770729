//! # revmin - Minimum Revenue Diagnostics
//!
//! revmin computes the monthly revenue a small business needs before its
//! owner's target profit becomes real, starting from four figures: fixed
//! costs, variable cost percentage, target profit percentage and average
//! ticket.
//!
//! ## Overview
//!
//! The calculator itself is a pure function over [`metrics::CalculationInput`].
//! Everything around it handles capture and presentation: contact details are
//! validated and gate the display of results, inputs can be saved per e-mail
//! as presets, and a diagnostic report can be exported in several formats.
//!
//! ## Core Concepts
//!
//! - **Inputs**: the numeric figures a run works with, seeded from config defaults
//! - **Lead**: the contact details (name, e-mail, company, optional WhatsApp)
//!   that must validate before results are shown
//! - **Presets**: per-e-mail snapshots of inputs stored in a JSON file
//!
//! ## Modules
//!
//! - [`metrics`] - Break-even formulas and the revenue gap
//! - [`validate`] - Contact-field predicates (name, e-mail, company, phone)
//! - [`formatters`] - Brazilian-locale rendering of currency, counts and percentages
//! - [`lead`] - Lead record and the field-level gate
//! - [`session`] - Explicit state for the numeric inputs
//! - [`store`] - Preset persistence keyed by e-mail
//! - [`report`] - Diagnostic report rendering (text, markdown, JSON, HTML)
//! - [`config`] - Project and global configuration
//!
//! ## Example
//!
//! ```
//! use revmin::formatters::format_brl;
//! use revmin::metrics::{calculate, CalculationInput};
//!
//! let input = CalculationInput {
//!     fixed_costs: 5000.0,
//!     variable_cost_pct: 20.0,
//!     target_profit_pct: 10.0,
//!     average_ticket: 100.0,
//! };
//!
//! let result = calculate(&input);
//! assert_eq!(format_brl(result.minimum_revenue), "R$ 7.142,86");
//! ```

// Re-export all public modules
pub mod config;
pub mod formatters;
pub mod lead;
pub mod lock;
pub mod metrics;
pub mod report;
pub mod session;
pub mod store;
pub mod ui;
pub mod validate;

/// Default path constants for the revmin file layout.
pub mod paths {
    /// Project config file: `.revmin/config.md`
    pub const PROJECT_CONFIG: &str = ".revmin/config.md";
    /// Default preset store file, relative to the working directory
    pub const DEFAULT_STORE: &str = "presets.json";
}

/// Generate a UTC timestamp in ISO 8601 format: `YYYY-MM-DDTHH:MM:SSZ`
///
/// This function uses `chrono::Utc::now()` to ensure the timestamp is truly in UTC,
/// not local time with a misleading `Z` suffix.
pub fn utc_now_iso() -> String {
    chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
