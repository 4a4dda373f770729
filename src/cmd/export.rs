//! Export command for the diagnostic report
//!
//! Supports text, markdown, JSON and HTML formats, to stdout or a file.
//!
//! When run without the --format flag, launches an interactive wizard to configure options.

use anyhow::{Context, Result};
use atty;
use dialoguer::{Input, Select};
use std::fs::File;
use std::io::Write;

use revmin::metrics::calculate;
use revmin::report::Report;
use revmin::ui;

/// Print usage hint for export command in non-TTY contexts
fn print_export_usage_hint() {
    println!("Usage: revmin export --format <FORMAT>\n");
    println!("Formats: text, markdown, json, html\n");
    println!("Examples:");
    println!("  revmin export --format text --preset ana@empresa.com.br");
    println!("  revmin export --format html --preset ana@empresa.com.br --output diagnostic.html");
    println!("  revmin export --format json --name \"Ana Souza\" --email ana@empresa.com.br --company \"Padaria Aurora\"\n");
    println!("Run 'revmin export --help' for all options.");
}

/// Holds the result of the interactive wizard
struct WizardOptions {
    format: String,
    output_file: Option<String>,
}

/// Main export command handler
#[allow(clippy::too_many_arguments)]
pub fn cmd_export(
    format: Option<&str>,
    output_file: Option<&str>,
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
) -> Result<()> {
    // Wizard mode: no format and no output file on the command line
    let is_wizard_mode = format.is_none() && output_file.is_none();

    let options = if is_wizard_mode {
        // If not a TTY, print usage hint instead of launching wizard
        if !atty::is(atty::Stream::Stdin) {
            print_export_usage_hint();
            return Ok(());
        }
        run_wizard()?
    } else {
        WizardOptions {
            format: format.unwrap_or("text").to_string(),
            output_file: output_file.map(|s| s.to_string()),
        }
    };

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
    // Quiet gate: the report itself is the output.
    crate::cmd::enforce_gate(&lead, true)?;

    let result = calculate(&inputs.calculation_input());
    let report = Report {
        lead: &lead,
        inputs: &inputs,
        result: &result,
    };

    // Generate output based on format
    let output = match options.format.to_lowercase().as_str() {
        "text" | "txt" => report.render_text(),
        "markdown" | "md" => report.render_markdown(),
        "json" => report.render_json()?,
        "html" => report.render_html()?,
        _ => anyhow::bail!(
            "Unknown format: {}. Supported formats: text, markdown, json, html",
            options.format
        ),
    };

    // Write output
    if let Some(file_path) = options.output_file {
        let mut file = File::create(&file_path).context("Failed to create output file")?;
        write!(file, "{}", output).context("Failed to write to output file")?;
        println!("Report written to: {}", ui::colors::identifier(&file_path));
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Run the interactive wizard to configure export options
fn run_wizard() -> Result<WizardOptions> {
    // 1. Ask for format
    let formats = vec!["Text", "Markdown", "JSON", "HTML"];
    let format_selection = Select::new()
        .with_prompt("Report format:")
        .items(&formats)
        .default(0)
        .interact()?;
    let format = formats[format_selection].to_lowercase();

    // 2. Ask for output destination
    let output_options = vec!["Print to stdout", "Save to file"];
    let output_selection = Select::new()
        .with_prompt("Output destination:")
        .items(&output_options)
        .default(0)
        .interact()?;

    let output_file = if output_selection == 1 {
        let file_name: String = Input::new()
            .with_prompt("Output file:")
            .default(format!("diagnostic.{}", extension_for(&format)))
            .interact_text()?;
        Some(file_name)
    } else {
        None
    };

    Ok(WizardOptions {
        format,
        output_file,
    })
}

fn extension_for(format: &str) -> &'static str {
    match format {
        "markdown" => "md",
        "json" => "json",
        "html" => "html",
        _ => "txt",
    }
}
