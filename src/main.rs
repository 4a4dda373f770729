//! CLI entry point and command handlers for revmin.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

#[derive(Parser)]
#[command(name = "revmin")]
#[command(version)]
#[command(about = "Minimum revenue diagnostics for small businesses", long_about = None)]
#[command(
    after_help = "GETTING STARTED:\n    revmin calc                Run the diagnostic with an interactive lead form\n    revmin calc --help         Show every input flag\n\n    Results unlock once name, e-mail and company validate; inputs can be\n    saved per e-mail with --save-preset and reloaded with --preset."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the break-even diagnostic
    ///
    /// TIP: Run 'revmin calc' with no contact flags on a terminal for the
    /// interactive form. Every numeric flag falls back to the configured
    /// default when omitted.
    Calc {
        /// Monthly fixed costs in R$
        #[arg(long, value_name = "BRL")]
        fixed_costs: Option<f64>,
        /// Variable costs as a percentage of revenue (0-100)
        #[arg(long, value_name = "PCT")]
        variable_pct: Option<f64>,
        /// Target profit as a percentage of revenue (0-100)
        #[arg(long, value_name = "PCT")]
        profit_pct: Option<f64>,
        /// Average sale value in R$
        #[arg(long, value_name = "BRL")]
        ticket: Option<f64>,
        /// Current monthly revenue in R$, used for the gap analysis
        #[arg(long, value_name = "BRL")]
        current_revenue: Option<f64>,
        /// Contact name (first and last)
        #[arg(long)]
        name: Option<String>,
        /// Contact e-mail, also the preset key
        #[arg(long)]
        email: Option<String>,
        /// Company name
        #[arg(long)]
        company: Option<String>,
        /// WhatsApp number (optional)
        #[arg(long)]
        whatsapp: Option<String>,
        /// Load inputs from the preset saved for this e-mail
        #[arg(long, value_name = "EMAIL")]
        preset: Option<String>,
        /// Save the inputs as the preset for the contact e-mail
        #[arg(long)]
        save_preset: bool,
        /// Emit the result document as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Save, load or inspect input presets keyed by e-mail
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },
    /// Export the diagnostic report
    ///
    /// Runs a short wizard when no --format is given on a terminal.
    Export {
        /// Report format (text, markdown, json, html)
        #[arg(long)]
        format: Option<String>,
        /// Write the report to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<String>,
        /// Monthly fixed costs in R$
        #[arg(long, value_name = "BRL")]
        fixed_costs: Option<f64>,
        /// Variable costs as a percentage of revenue (0-100)
        #[arg(long, value_name = "PCT")]
        variable_pct: Option<f64>,
        /// Target profit as a percentage of revenue (0-100)
        #[arg(long, value_name = "PCT")]
        profit_pct: Option<f64>,
        /// Average sale value in R$
        #[arg(long, value_name = "BRL")]
        ticket: Option<f64>,
        /// Current monthly revenue in R$
        #[arg(long, value_name = "BRL")]
        current_revenue: Option<f64>,
        /// Contact name (first and last)
        #[arg(long)]
        name: Option<String>,
        /// Contact e-mail
        #[arg(long)]
        email: Option<String>,
        /// Company name
        #[arg(long)]
        company: Option<String>,
        /// WhatsApp number (optional)
        #[arg(long)]
        whatsapp: Option<String>,
        /// Build the report from the preset saved for this e-mail
        #[arg(long, value_name = "EMAIL")]
        preset: Option<String>,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
    /// Show version information
    Version {
        /// Show build metadata
        #[arg(long, short)]
        verbose: bool,
    },
}

#[derive(Subcommand)]
enum PresetCommands {
    /// Save or update the preset for an e-mail
    Save {
        /// E-mail address the preset is keyed by
        email: String,
        /// Contact name (first and last)
        #[arg(long)]
        name: Option<String>,
        /// Company name
        #[arg(long)]
        company: Option<String>,
        /// WhatsApp number (optional)
        #[arg(long)]
        whatsapp: Option<String>,
        /// Monthly fixed costs in R$
        #[arg(long, value_name = "BRL")]
        fixed_costs: Option<f64>,
        /// Variable costs as a percentage of revenue (0-100)
        #[arg(long, value_name = "PCT")]
        variable_pct: Option<f64>,
        /// Target profit as a percentage of revenue (0-100)
        #[arg(long, value_name = "PCT")]
        profit_pct: Option<f64>,
        /// Average sale value in R$
        #[arg(long, value_name = "BRL")]
        ticket: Option<f64>,
        /// Current monthly revenue in R$
        #[arg(long, value_name = "BRL")]
        current_revenue: Option<f64>,
    },
    /// Load a preset and re-run the diagnostic with its inputs
    Load {
        /// E-mail address the preset was saved for
        email: String,
    },
    /// Print the raw stored preset as JSON
    Show {
        /// E-mail address the preset was saved for
        email: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc {
            fixed_costs,
            variable_pct,
            profit_pct,
            ticket,
            current_revenue,
            name,
            email,
            company,
            whatsapp,
            preset,
            save_preset,
            json,
        } => cmd::calc::cmd_calc(
            fixed_costs,
            variable_pct,
            profit_pct,
            ticket,
            current_revenue,
            name.as_deref(),
            email.as_deref(),
            company.as_deref(),
            whatsapp.as_deref(),
            preset.as_deref(),
            save_preset,
            json,
        ),
        Commands::Preset { command } => match command {
            PresetCommands::Save {
                email,
                name,
                company,
                whatsapp,
                fixed_costs,
                variable_pct,
                profit_pct,
                ticket,
                current_revenue,
            } => cmd::preset::cmd_preset_save(
                &email,
                name.as_deref(),
                company.as_deref(),
                whatsapp.as_deref(),
                fixed_costs,
                variable_pct,
                profit_pct,
                ticket,
                current_revenue,
            ),
            PresetCommands::Load { email } => cmd::preset::cmd_preset_load(&email),
            PresetCommands::Show { email } => cmd::preset::cmd_preset_show(&email),
        },
        Commands::Export {
            format,
            output,
            fixed_costs,
            variable_pct,
            profit_pct,
            ticket,
            current_revenue,
            name,
            email,
            company,
            whatsapp,
            preset,
        } => cmd::export::cmd_export(
            format.as_deref(),
            output.as_deref(),
            fixed_costs,
            variable_pct,
            profit_pct,
            ticket,
            current_revenue,
            name.as_deref(),
            email.as_deref(),
            company.as_deref(),
            whatsapp.as_deref(),
            preset.as_deref(),
        ),
        Commands::Completion { shell } => cmd_completion(shell),
        Commands::Version { verbose } => cmd_version(verbose),
    }
}

fn cmd_completion(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "revmin", &mut io::stdout());
    Ok(())
}

fn cmd_version(verbose: bool) -> Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    println!("revmin {}", VERSION);

    if verbose {
        const GIT_SHA: &str = env!("GIT_SHA");
        const BUILD_DATE: &str = env!("BUILD_DATE");
        println!("commit: {}", GIT_SHA);
        println!("built: {}", BUILD_DATE);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_calc_flags() {
        let cli = Cli::try_parse_from([
            "revmin",
            "calc",
            "--fixed-costs",
            "5000",
            "--variable-pct",
            "20",
            "--profit-pct",
            "10",
            "--ticket",
            "100",
            "--name",
            "Ana Souza",
            "--email",
            "ana@empresa.com.br",
            "--company",
            "Padaria Aurora",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Calc {
                fixed_costs,
                variable_pct,
                profit_pct,
                ticket,
                email,
                json,
                save_preset,
                ..
            } => {
                assert_eq!(fixed_costs, Some(5000.0));
                assert_eq!(variable_pct, Some(20.0));
                assert_eq!(profit_pct, Some(10.0));
                assert_eq!(ticket, Some(100.0));
                assert_eq!(email.as_deref(), Some("ana@empresa.com.br"));
                assert!(json);
                assert!(!save_preset);
            }
            _ => panic!("expected calc command"),
        }
    }

    #[test]
    fn test_cli_parses_preset_save() {
        let cli = Cli::try_parse_from([
            "revmin",
            "preset",
            "save",
            "ana@empresa.com.br",
            "--name",
            "Ana Souza",
            "--company",
            "Padaria Aurora",
            "--fixed-costs",
            "6500",
        ])
        .unwrap();

        match cli.command {
            Commands::Preset {
                command:
                    PresetCommands::Save {
                        email, fixed_costs, ..
                    },
            } => {
                assert_eq!(email, "ana@empresa.com.br");
                assert_eq!(fixed_costs, Some(6500.0));
            }
            _ => panic!("expected preset save command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format_flag_value_type() {
        let result = Cli::try_parse_from(["revmin", "calc", "--fixed-costs", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["revmin"]).is_err());
    }
}
