//! Configuration for revmin runs.
//!
//! Config lives in a markdown file with YAML frontmatter so a project can
//! keep notes next to its settings. A project file at `.revmin/config.md`
//! overrides a global one at `~/.config/revmin/config.md`; both are
//! optional and every field has a built-in default.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::session::InputSet;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub store: StoreConfig,
    /// Booking link offered after a successful diagnostic
    #[serde(default)]
    pub scheduling_url: Option<String>,
}

/// Starting values for the numeric inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_fixed_costs")]
    pub fixed_costs: f64,
    #[serde(default = "default_variable_cost_pct")]
    pub variable_cost_pct: f64,
    #[serde(default = "default_target_profit_pct")]
    pub target_profit_pct: f64,
    #[serde(default = "default_average_ticket")]
    pub average_ticket: f64,
    #[serde(default = "default_current_revenue")]
    pub current_revenue: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Preset file location; `~` expands to the home directory
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_fixed_costs() -> f64 {
    5000.0
}

fn default_variable_cost_pct() -> f64 {
    20.0
}

fn default_target_profit_pct() -> f64 {
    10.0
}

fn default_average_ticket() -> f64 {
    100.0
}

fn default_current_revenue() -> f64 {
    8000.0
}

fn default_store_path() -> String {
    crate::paths::DEFAULT_STORE.to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            fixed_costs: default_fixed_costs(),
            variable_cost_pct: default_variable_cost_pct(),
            target_profit_pct: default_target_profit_pct(),
            average_ticket: default_average_ticket(),
            current_revenue: default_current_revenue(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl Config {
    #[allow(dead_code)]
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Load merged configuration from global and project configs.
    /// Project config values override global config values; missing files
    /// fall through to the built-in defaults.
    pub fn load_merged() -> Result<Self> {
        Self::load_merged_from(
            global_config_path().as_deref(),
            Path::new(crate::paths::PROJECT_CONFIG),
        )
    }

    /// Load merged configuration from specified global and project config paths.
    pub fn load_merged_from(global_path: Option<&Path>, project_path: &Path) -> Result<Self> {
        let global_config = global_path
            .filter(|p| p.exists())
            .map(PartialConfig::load_from)
            .transpose()?
            .unwrap_or_default();

        let project_config = if project_path.exists() {
            PartialConfig::load_from(project_path)?
        } else {
            PartialConfig::default()
        };

        Ok(global_config.merge_with(project_config))
    }

    /// Check constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if let Some(raw) = &self.scheduling_url {
            let parsed = Url::parse(raw)
                .with_context(|| format!("Invalid scheduling_url: {}", raw))?;

            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                bail!(
                    "scheduling_url must use http or https, got {}",
                    parsed.scheme()
                );
            }
        }

        Ok(())
    }

    /// Preset store location with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.store.path).into_owned())
    }

    /// The input set a run starts from.
    pub fn default_inputs(&self) -> InputSet {
        InputSet {
            fixed_costs: self.defaults.fixed_costs,
            variable_cost_pct: self.defaults.variable_cost_pct,
            target_profit_pct: self.defaults.target_profit_pct,
            average_ticket: self.defaults.average_ticket,
            current_revenue: self.defaults.current_revenue,
        }
    }
}

/// Returns the path to the global config file at ~/.config/revmin/config.md
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/revmin/config.md"))
}

/// Partial config for merging - all fields optional
#[derive(Debug, Deserialize, Default)]
struct PartialConfig {
    pub defaults: Option<PartialDefaultsConfig>,
    pub store: Option<PartialStoreConfig>,
    pub scheduling_url: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialDefaultsConfig {
    pub fixed_costs: Option<f64>,
    pub variable_cost_pct: Option<f64>,
    pub target_profit_pct: Option<f64>,
    pub average_ticket: Option<f64>,
    pub current_revenue: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
struct PartialStoreConfig {
    pub path: Option<String>,
}

impl PartialConfig {
    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let frontmatter =
            extract_frontmatter(content).context("Failed to extract frontmatter from config")?;

        serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")
    }

    /// Merge this global config with a project config, returning the merged result.
    /// Values from the project config take precedence over global.
    fn merge_with(self, project: PartialConfig) -> Config {
        let global_defaults = self.defaults.unwrap_or_default();
        let global_store = self.store.unwrap_or_default();
        let project_defaults = project.defaults.unwrap_or_default();
        let project_store = project.store.unwrap_or_default();

        Config {
            defaults: DefaultsConfig {
                // Project value > global value > default
                fixed_costs: project_defaults
                    .fixed_costs
                    .or(global_defaults.fixed_costs)
                    .unwrap_or_else(default_fixed_costs),
                variable_cost_pct: project_defaults
                    .variable_cost_pct
                    .or(global_defaults.variable_cost_pct)
                    .unwrap_or_else(default_variable_cost_pct),
                target_profit_pct: project_defaults
                    .target_profit_pct
                    .or(global_defaults.target_profit_pct)
                    .unwrap_or_else(default_target_profit_pct),
                average_ticket: project_defaults
                    .average_ticket
                    .or(global_defaults.average_ticket)
                    .unwrap_or_else(default_average_ticket),
                current_revenue: project_defaults
                    .current_revenue
                    .or(global_defaults.current_revenue)
                    .unwrap_or_else(default_current_revenue),
            },
            store: StoreConfig {
                path: project_store
                    .path
                    .or(global_store.path)
                    .unwrap_or_else(default_store_path),
            },
            scheduling_url: project.scheduling_url.or(self.scheduling_url),
        }
    }
}

fn extract_frontmatter(content: &str) -> Option<String> {
    let rest = content.trim().strip_prefix("---")?;
    let end = rest.find("---")?;
    Some(rest[..end].to_string())
}
