//! Tests for preset persistence: the file store and the preset commands.

use revmin::store::{FilePresetStore, PresetRecord, PresetStore};
use serial_test::serial;

mod support;
use support::harness::{reference_inputs, valid_lead, TestHarness};

#[test]
fn test_store_round_trip_through_configured_path() {
    let harness = TestHarness::new();
    let store = harness.store();
    let record = PresetRecord::new(&valid_lead(), &reference_inputs());

    store.put("ana@empresa.com.br", &record).unwrap();

    let loaded = store.get("ana@empresa.com.br").unwrap();
    assert_eq!(loaded, Some(record));
    assert!(harness.store_path.exists());
}

#[test]
fn test_last_write_wins_per_email() {
    let harness = TestHarness::new();
    let store = harness.store();

    let mut inputs = reference_inputs();
    store
        .put("ana@empresa.com.br", &PresetRecord::new(&valid_lead(), &inputs))
        .unwrap();

    inputs.fixed_costs = 9000.0;
    store
        .put("ana@empresa.com.br", &PresetRecord::new(&valid_lead(), &inputs))
        .unwrap();

    let loaded = store.get("ana@empresa.com.br").unwrap().unwrap();
    assert_eq!(loaded.fixed_costs, 9000.0);
}

#[test]
#[serial]
fn test_store_with_relative_path_resolves_against_cwd() {
    let harness = TestHarness::new();
    std::env::set_current_dir(harness.path()).unwrap();

    let store = FilePresetStore::new("presets.json".into());
    store
        .put(
            "ana@empresa.com.br",
            &PresetRecord::new(&valid_lead(), &reference_inputs()),
        )
        .unwrap();

    assert!(harness.path().join("presets.json").exists());
}

#[test]
fn test_preset_save_load_show_via_cli() {
    let harness = TestHarness::new();

    let output = harness
        .run(&[
            "preset",
            "save",
            "ana@empresa.com.br",
            "--name",
            "Ana Souza",
            "--company",
            "Padaria Aurora",
            "--fixed-costs",
            "6000",
        ])
        .unwrap();
    assert!(
        output.status.success(),
        "save failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Preset saved for ana@empresa.com.br"));

    // load re-runs the diagnostic with the stored inputs
    let output = harness.run(&["preset", "load", "ana@empresa.com.br"]).unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("R$ 6.000,00"));
    // 6000 fixed at 20% variable and 10% profit needs R$ 8.571,43
    assert!(stdout.contains("R$ 8.571,43"));

    // show prints the raw record
    let output = harness.run(&["preset", "show", "ana@empresa.com.br"]).unwrap();
    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["name"], "Ana Souza");
    assert_eq!(doc["fixed_costs"], 6000.0);
    assert_eq!(doc["variable_cost_pct"], 20.0);
}

#[test]
fn test_preset_save_partial_update_keeps_other_figures() {
    let harness = TestHarness::new();

    harness
        .run(&[
            "preset",
            "save",
            "ana@empresa.com.br",
            "--name",
            "Ana Souza",
            "--company",
            "Padaria Aurora",
            "--fixed-costs",
            "6000",
            "--ticket",
            "80",
        ])
        .unwrap();

    // A later save with only one flag keeps the rest of the record.
    let output = harness
        .run(&[
            "preset",
            "save",
            "ana@empresa.com.br",
            "--fixed-costs",
            "7500",
        ])
        .unwrap();
    assert!(
        output.status.success(),
        "update failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let record = harness
        .store()
        .get("ana@empresa.com.br")
        .unwrap()
        .unwrap();
    assert_eq!(record.fixed_costs, 7500.0);
    assert_eq!(record.average_ticket, 80.0);
    assert_eq!(record.name, "Ana Souza");
}

#[test]
fn test_preset_save_rejects_invalid_contact() {
    let harness = TestHarness::new();

    let output = harness
        .run(&[
            "preset",
            "save",
            "not-an-email",
            "--name",
            "Ana Souza",
            "--company",
            "Padaria Aurora",
        ])
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid"));
    assert!(!harness.store_path.exists());
}

#[test]
fn test_preset_load_missing_email_errors() {
    let harness = TestHarness::new();

    let output = harness.run(&["preset", "load", "nobody@empresa.com.br"]).unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No preset saved for"));
}
