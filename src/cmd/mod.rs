//! Command module structure for revmin CLI

use anyhow::{Context, Result};

use revmin::config::Config;
use revmin::lead::{Lead, LeadField};
use revmin::store::{FilePresetStore, PresetRecord, PresetStore};
use revmin::ui;

pub mod calc;
pub mod export;
pub mod preset;

/// Load the merged configuration and check its constraints.
pub fn load_config() -> Result<Config> {
    let config = Config::load_merged()?;
    config.validate()?;
    Ok(config)
}

/// Open the preset store at the configured location.
pub fn open_store(config: &Config) -> FilePresetStore {
    FilePresetStore::new(config.store_path())
}

/// Fetch the preset for an e-mail, erroring when none was saved.
pub fn resolve_preset(store: &dyn PresetStore, email: &str) -> Result<PresetRecord> {
    store
        .get(email)?
        .with_context(|| format!("No preset saved for {}", email))
}

/// Build the lead for a run.
///
/// With no contact flag given and stdin on a terminal, a short form asks
/// for each field and re-asks until it validates. Otherwise the lead comes
/// from the flags, layered over `prefill` (a loaded preset) when present.
pub fn resolve_lead(
    name: Option<&str>,
    email: Option<&str>,
    company: Option<&str>,
    whatsapp: Option<&str>,
    prefill: Option<&Lead>,
) -> Result<Lead> {
    let flags_given =
        name.is_some() || email.is_some() || company.is_some() || whatsapp.is_some();

    if !flags_given && prefill.is_none() && atty::is(atty::Stream::Stdin) {
        return prompt_lead();
    }

    let base = prefill.cloned().unwrap_or_default();
    Ok(Lead {
        name: name.map(str::to_string).unwrap_or(base.name),
        email: email.map(str::to_string).unwrap_or(base.email),
        company: company.map(str::to_string).unwrap_or(base.company),
        whatsapp: whatsapp.map(str::to_string).unwrap_or(base.whatsapp),
    })
}

/// Enforce the lead gate: results only render for a complete lead.
///
/// `quiet` suppresses the unlock line for machine-readable output.
pub fn enforce_gate(lead: &Lead, quiet: bool) -> Result<()> {
    let errors = lead.field_errors();

    if errors.is_empty() {
        if !quiet && !ui::is_quiet() {
            println!(
                "{}",
                ui::colors::success("Details received. Results unlocked.")
            );
            println!();
        }
        return Ok(());
    }

    eprintln!(
        "{}",
        ui::colors::error("Results stay locked until your details check out:")
    );
    for field in [
        LeadField::Name,
        LeadField::Email,
        LeadField::Company,
        LeadField::Whatsapp,
    ] {
        match errors.iter().find(|error| error.field == field) {
            Some(error) => eprintln!("  {}", ui::field_error(field.label(), error.message)),
            None => eprintln!("  {}", ui::field_ok(field.label())),
        }
    }
    eprintln!();
    eprintln!(
        "{}",
        ui::colors::secondary(
            "Pass --name, --email and --company (and optionally --whatsapp), or run in a terminal for the form."
        )
    );

    anyhow::bail!("Lead details incomplete")
}

/// Interactive lead form: one prompt per field, looping until valid.
fn prompt_lead() -> Result<Lead> {
    use dialoguer::theme::ColorfulTheme;

    println!(
        "{}",
        ui::colors::heading("Before the results, tell us who you are.")
    );
    println!();

    let theme = ColorfulTheme::default();

    let name = prompt_field(&theme, LeadField::Name)?;
    let email = prompt_field(&theme, LeadField::Email)?;
    let company = prompt_field(&theme, LeadField::Company)?;
    let whatsapp = prompt_field(&theme, LeadField::Whatsapp)?;

    println!();
    Ok(Lead {
        name,
        email,
        company,
        whatsapp,
    })
}

fn prompt_field(theme: &dialoguer::theme::ColorfulTheme, field: LeadField) -> Result<String> {
    use dialoguer::Input;

    loop {
        let mut input = Input::with_theme(theme).with_prompt(prompt_label(field));
        if field == LeadField::Whatsapp {
            input = input.allow_empty(true);
        }

        let value: String = input.interact_text()?;
        if field.is_valid(&value) {
            return Ok(value);
        }

        println!("{}", ui::field_error(field.label(), field.requirement()));
    }
}

fn prompt_label(field: LeadField) -> &'static str {
    match field {
        LeadField::Name => "Your name",
        LeadField::Email => "E-mail",
        LeadField::Company => "Company",
        LeadField::Whatsapp => "WhatsApp (optional)",
    }
}
