//! End-to-end test for the CLI run path: JSON in, chart JSON out.

use std::fs;

use lineage_cli::{Args, CliError, run};

fn args(input: &str, output: &str) -> Args {
    Args {
        input: input.to_string(),
        output: output.to_string(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn test_run_produces_chart_document() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("tables.json");
    let output_path = dir.path().join("chart.json");

    fs::write(
        &input_path,
        r#"[
            {"table": "app_view", "deps": ["raw_events"], "engine": "Distributed"},
            {"table": "raw_events", "deps": [], "engine": "Kafka"}
        ]"#,
    )
    .unwrap();

    run(&args(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ))
    .expect("run should succeed");

    let document: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();

    assert_eq!(document["nodes"].as_array().unwrap().len(), 2);
    assert_eq!(document["nodes"][0]["id"], "app_view");
    assert_eq!(document["nodes"][0]["role"], "input");
    assert_eq!(document["nodes"][1]["background"], "#fec89a");
    assert_eq!(document["edges"][0]["id"], "app_view-raw_events");
}

#[test]
fn test_run_rejects_malformed_lineage() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("tables.json");
    let output_path = dir.path().join("chart.json");

    fs::write(
        &input_path,
        r#"[{"table": "app_view", "deps": ["nowhere"], "engine": "MergeTree"}]"#,
    )
    .unwrap();

    let err = run(&args(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ))
    .unwrap_err();

    assert!(matches!(err, CliError::Layout(_)));
    assert!(!output_path.exists());
}

#[test]
fn test_run_rejects_non_json_input() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("tables.json");
    let output_path = dir.path().join("chart.json");

    fs::write(&input_path, "not json at all").unwrap();

    let err = run(&args(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    ))
    .unwrap_err();

    assert!(matches!(err, CliError::Input(_)));
}
