//! Preset persistence keyed by contact e-mail.
//!
//! A preset is the snapshot of a lead's numeric inputs, saved so a returning
//! contact can pick up where they left off. Storage sits behind the
//! [`PresetStore`] trait; commands use the file-backed store and tests can
//! swap in the in-memory one.

mod file;
mod in_memory;

pub use file::FilePresetStore;
pub use in_memory::InMemoryPresetStore;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::lead::Lead;
use crate::session::InputSet;

/// One saved preset: contact details plus the full input set and a
/// timestamp. The e-mail is the store key and is not repeated inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetRecord {
    pub name: String,
    pub company: String,
    /// Empty when the lead gave no number
    #[serde(default)]
    pub whatsapp: String,
    pub fixed_costs: f64,
    pub variable_cost_pct: f64,
    pub target_profit_pct: f64,
    pub average_ticket: f64,
    pub current_revenue: f64,
    /// ISO 8601, set when the preset is written
    pub saved_at: String,
}

impl PresetRecord {
    /// Snapshot a lead's inputs, stamped with the current time.
    pub fn new(lead: &Lead, inputs: &InputSet) -> Self {
        Self {
            name: lead.name.trim().to_string(),
            company: lead.company.trim().to_string(),
            whatsapp: lead.whatsapp.trim().to_string(),
            fixed_costs: inputs.fixed_costs,
            variable_cost_pct: inputs.variable_cost_pct,
            target_profit_pct: inputs.target_profit_pct,
            average_ticket: inputs.average_ticket,
            current_revenue: inputs.current_revenue,
            saved_at: crate::utc_now_iso(),
        }
    }

    /// The numeric inputs stored in this preset.
    pub fn input_set(&self) -> InputSet {
        InputSet {
            fixed_costs: self.fixed_costs,
            variable_cost_pct: self.variable_cost_pct,
            target_profit_pct: self.target_profit_pct,
            average_ticket: self.average_ticket,
            current_revenue: self.current_revenue,
        }
    }

    /// Rebuild the lead this preset was saved for. The e-mail comes from
    /// the store key, so the caller supplies it.
    pub fn lead(&self, email: &str) -> Lead {
        Lead {
            name: self.name.clone(),
            email: email.to_string(),
            company: self.company.clone(),
            whatsapp: self.whatsapp.clone(),
        }
    }
}

/// A trait for loading and saving presets from a storage backend.
pub trait PresetStore {
    /// Look up the preset saved for an e-mail address.
    fn get(&self, email: &str) -> Result<Option<PresetRecord>>;

    /// Save or replace the preset for an e-mail address. The last write
    /// for a given e-mail wins.
    fn put(&self, email: &str, record: &PresetRecord) -> Result<()>;
}
