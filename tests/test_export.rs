//! End-to-end tests for the export command.

use std::fs;

mod support;
use support::harness::TestHarness;

fn valid_lead_flags() -> Vec<&'static str> {
    vec![
        "--name",
        "Ana Souza",
        "--email",
        "ana@empresa.com.br",
        "--company",
        "Padaria Aurora",
    ]
}

#[test]
fn test_export_without_format_prints_usage_outside_terminal() {
    let harness = TestHarness::new();

    let output = harness.run(&["export"]).unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage: revmin export --format"));
    assert!(stdout.contains("text, markdown, json, html"));
}

#[test]
fn test_export_text_report_to_stdout() {
    let harness = TestHarness::new();

    let mut args = vec!["export", "--format", "text"];
    args.extend(valid_lead_flags());

    let output = harness.run(&args).unwrap();
    assert!(
        output.status.success(),
        "export failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Minimum Revenue Diagnostic"));
    assert!(stdout.contains("Ana Souza"));
    assert!(stdout.contains("R$ 7.142,86"));
    assert!(stdout.contains("Gap vs current revenue"));
}

#[test]
fn test_export_markdown_report_uses_tables() {
    let harness = TestHarness::new();

    let mut args = vec!["export", "--format", "markdown"];
    args.extend(valid_lead_flags());

    let output = harness.run(&args).unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Minimum Revenue Diagnostic"));
    assert!(stdout.contains("| Minimum revenue | R$ 7.142,86 |"));
}

#[test]
fn test_export_json_report_keeps_gap_sign() {
    let harness = TestHarness::new();

    let mut args = vec!["export", "--format", "json"];
    args.extend(valid_lead_flags());

    let output = harness.run(&args).unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // Minimum of R$ 7.142,86 against the default R$ 8.000 current revenue
    assert_eq!(doc["gap"]["display"], "R$ -857,14");
    assert_eq!(doc["results"]["break_even_revenue"]["display"], "R$ 6.250,00");
}

#[test]
fn test_export_html_report_to_file() {
    let harness = TestHarness::new();

    let mut args = vec!["export", "--format", "html", "--output", "diagnostic.html"];
    args.extend(valid_lead_flags());

    let output = harness.run(&args).unwrap();
    assert!(
        output.status.success(),
        "export failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Report written to:"));

    let html = fs::read_to_string(harness.path().join("diagnostic.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("#00A899"));
    assert!(html.contains("Ana Souza"));
    assert!(html.contains("R$ 7.142,86"));
}

#[test]
fn test_export_unknown_format_errors() {
    let harness = TestHarness::new();

    let mut args = vec!["export", "--format", "pdf"];
    args.extend(valid_lead_flags());

    let output = harness.run(&args).unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown format"));
}

#[test]
fn test_export_requires_a_complete_lead() {
    let harness = TestHarness::new();

    let output = harness.run(&["export", "--format", "text"]).unwrap();

    assert!(!output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Minimum Revenue Diagnostic"));
}

#[test]
fn test_export_from_saved_preset() {
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
        ])
        .unwrap();

    let output = harness
        .run(&[
            "export",
            "--format",
            "text",
            "--preset",
            "ana@empresa.com.br",
        ])
        .unwrap();
    assert!(
        output.status.success(),
        "export failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Ana Souza"));
    assert!(stdout.contains("R$ 6.000,00"));
    assert!(stdout.contains("R$ 8.571,43"));
}
