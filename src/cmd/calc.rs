//! Calc command: run the break-even diagnostic.
//!
//! Numeric inputs come from config defaults, an optional stored preset and
//! flag overrides, in that order. Results stay behind the lead gate.

use anyhow::Result;

use revmin::metrics::calculate;
use revmin::report::Report;
use revmin::store::{PresetRecord, PresetStore};
use revmin::ui;

/// Main calc command handler
#[allow(clippy::too_many_arguments)]
pub fn cmd_calc(
    fixed_costs: Option<f64>,
    variable_pct: Option<f64>,
    profit_pct: Option<f64>,
    ticket: Option<f64>,
    current_revenue: Option<f64>,
    name: Option<&str>,
    email: Option<&str>,
    company: Option<&str>,
    whatsapp: Option<&str>,
    preset: Option<&str>,
    save_preset: bool,
    json: bool,
) -> Result<()> {
    let config = crate::cmd::load_config()?;
    let store = crate::cmd::open_store(&config);

    let record = match preset {
        Some(preset_email) => Some(crate::cmd::resolve_preset(&store, preset_email)?),
        None => None,
    };

    let mut inputs = match &record {
        Some(record) => record.input_set(),
        None => config.default_inputs(),
    };
    inputs.apply_overrides(
        fixed_costs,
        variable_pct,
        profit_pct,
        ticket,
        current_revenue,
    );

    let preset_lead = record
        .as_ref()
        .zip(preset)
        .map(|(record, preset_email)| record.lead(preset_email));
    let lead = crate::cmd::resolve_lead(name, email, company, whatsapp, preset_lead.as_ref())?;
    crate::cmd::enforce_gate(&lead, json)?;

    let result = calculate(&inputs.calculation_input());

    if json {
        let report = Report {
            lead: &lead,
            inputs: &inputs,
            result: &result,
        };
        println!("{}", report.render_json()?);
    } else {
        println!("{}", ui::format_results(&inputs, &result));

        if let Some(url) = &config.scheduling_url {
            println!();
            println!(
                "{} {}",
                ui::colors::info("Book a working session:"),
                url
            );
        }
    }

    if save_preset {
        let record = PresetRecord::new(&lead, &inputs);
        store.put(&lead.email, &record)?;

        if !json {
            println!();
            println!(
                "Preset saved for {} in {}",
                ui::colors::identifier(&lead.email),
                store.path().display()
            );
        }
    }

    Ok(())
}
