//! Preset commands: save, load and inspect stored inputs.

use anyhow::{Context, Result};

use revmin::formatters::{format_brl, format_pct};
use revmin::lead::Lead;
use revmin::metrics::calculate;
use revmin::session::InputSet;
use revmin::store::{PresetRecord, PresetStore};
use revmin::ui;

/// Save or update the preset for an e-mail address.
///
/// Starts from the stored preset when one exists so a partial update (say,
/// only `--fixed-costs`) keeps the other figures.
#[allow(clippy::too_many_arguments)]
pub fn cmd_preset_save(
    email: &str,
    name: Option<&str>,
    company: Option<&str>,
    whatsapp: Option<&str>,
    fixed_costs: Option<f64>,
    variable_pct: Option<f64>,
    profit_pct: Option<f64>,
    ticket: Option<f64>,
    current_revenue: Option<f64>,
) -> Result<()> {
    let config = crate::cmd::load_config()?;
    let store = crate::cmd::open_store(&config);

    let existing = store.get(email)?;

    let mut inputs = existing
        .as_ref()
        .map(|record| record.input_set())
        .unwrap_or_else(|| config.default_inputs());
    inputs.apply_overrides(
        fixed_costs,
        variable_pct,
        profit_pct,
        ticket,
        current_revenue,
    );

    let base = existing
        .as_ref()
        .map(|record| record.lead(email))
        .unwrap_or_default();
    let lead = Lead {
        name: name.map(str::to_string).unwrap_or(base.name),
        email: email.to_string(),
        company: company.map(str::to_string).unwrap_or(base.company),
        whatsapp: whatsapp.map(str::to_string).unwrap_or(base.whatsapp),
    };

    let errors = lead.field_errors();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("  {}", ui::field_error(error.field.label(), error.message));
        }
        anyhow::bail!("Preset not saved: contact details are invalid");
    }

    let record = PresetRecord::new(&lead, &inputs);
    store.put(email, &record)?;

    println!(
        "Preset saved for {} in {}",
        ui::colors::identifier(email),
        store.path().display()
    );

    Ok(())
}

/// Load a preset and re-run the diagnostic with its inputs.
pub fn cmd_preset_load(email: &str) -> Result<()> {
    let config = crate::cmd::load_config()?;
    let store = crate::cmd::open_store(&config);

    let record = crate::cmd::resolve_preset(&store, email)?;

    // The stored contact opened the gate when it was saved; a hand-edited
    // file can still break it, so check again.
    let lead = record.lead(email);
    if !lead.is_complete() {
        anyhow::bail!(
            "Stored preset for {} has invalid contact details; save it again",
            email
        );
    }

    let inputs = record.input_set();
    let result = calculate(&inputs.calculation_input());

    println!(
        "Loaded preset for {} {}",
        ui::colors::identifier(email),
        ui::colors::secondary(&format!("(saved {})", record.saved_at))
    );
    println!();
    print_inputs(&inputs);
    println!();
    println!("{}", ui::format_results(&inputs, &result));

    Ok(())
}

/// Print the raw stored record as pretty JSON.
pub fn cmd_preset_show(email: &str) -> Result<()> {
    let config = crate::cmd::load_config()?;
    let store = crate::cmd::open_store(&config);

    let record = crate::cmd::resolve_preset(&store, email)?;
    let json = serde_json::to_string_pretty(&record).context("Failed to serialize preset")?;

    println!("{}", json);
    Ok(())
}

fn print_inputs(inputs: &InputSet) {
    println!("{}", ui::colors::heading("Inputs"));
    println!("{}", ui::format::separator(6));
    println!("  {:<18} {}", "Fixed costs", format_brl(inputs.fixed_costs));
    println!(
        "  {:<18} {}",
        "Variable costs",
        format_pct(inputs.variable_cost_pct)
    );
    println!(
        "  {:<18} {}",
        "Target profit",
        format_pct(inputs.target_profit_pct)
    );
    println!(
        "  {:<18} {}",
        "Average ticket",
        format_brl(inputs.average_ticket)
    );
    println!(
        "  {:<18} {}",
        "Current revenue",
        format_brl(inputs.current_revenue)
    );
}
