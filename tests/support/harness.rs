use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use revmin::config::Config;
use revmin::lead::Lead;
use revmin::session::InputSet;
use revmin::store::FilePresetStore;

/// TestHarness provides isolated test environments with a revmin project
/// structure. Each harness creates a temporary directory with
/// .revmin/config.md pointing the preset store inside the same directory,
/// so tests never touch the real filesystem layout.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    #[allow(dead_code)]
    pub store_path: PathBuf,
    #[allow(dead_code)]
    pub revmin_binary: PathBuf,
}

impl TestHarness {
    /// Creates a new test harness with default configuration.
    /// Sets up:
    /// - Temporary directory (auto-cleaned on drop)
    /// - .revmin/config.md keeping the preset store inside the temp dir
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path();

        let config_dir = base_path.join(".revmin");
        fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        let config_path = config_dir.join("config.md");
        let store_path = base_path.join("presets.json");

        let default_config = format!(
            "---\nstore:\n  path: {}\n---\n\n# Project Config\n",
            store_path.display()
        );
        fs::write(&config_path, default_config).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            store_path,
            revmin_binary: PathBuf::from(env!("CARGO_BIN_EXE_revmin")),
        }
    }

    /// Creates a test harness with custom config content.
    #[allow(dead_code)]
    pub fn with_config(config_content: &str) -> Self {
        let harness = Self::new();
        fs::write(&harness.config_path, config_content).expect("Failed to write custom config");
        harness
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Load the merged config exactly as commands run in this directory
    /// would, ignoring any global config on the machine.
    #[allow(dead_code)]
    pub fn load_config(&self) -> Config {
        Config::load_merged_from(None, &self.config_path).expect("Failed to load config")
    }

    /// Open the preset store the default config points at.
    #[allow(dead_code)]
    pub fn store(&self) -> FilePresetStore {
        FilePresetStore::new(self.store_path.clone())
    }

    /// Executes the revmin binary with the given arguments in the harness
    /// directory. HOME is redirected into the harness so a global config on
    /// the machine cannot leak into the run.
    #[allow(dead_code)]
    pub fn run(&self, args: &[&str]) -> std::io::Result<std::process::Output> {
        Command::new(&self.revmin_binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .output()
    }
}

/// A lead that passes every validator.
#[allow(dead_code)]
pub fn valid_lead() -> Lead {
    Lead {
        name: "Ana Souza".to_string(),
        email: "ana@empresa.com.br".to_string(),
        company: "Padaria Aurora".to_string(),
        whatsapp: "(11) 90000-0000".to_string(),
    }
}

/// The reference input set: R$ 5.000 fixed, 20% variable, 10% profit,
/// R$ 100 ticket, R$ 8.000 current revenue.
#[allow(dead_code)]
pub fn reference_inputs() -> InputSet {
    InputSet {
        fixed_costs: 5000.0,
        variable_cost_pct: 20.0,
        target_profit_pct: 10.0,
        average_ticket: 100.0,
        current_revenue: 8000.0,
    }
}
