//! CLI command tests

use std::io::Write;

use tempfile::NamedTempFile;

use crate::commands;

/// Write a snapshot fixture to a temp file and return it
fn snapshot_file(incomes: serde_json::Value, expenses: serde_json::Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let snapshot = serde_json::json!({
        "incomes": incomes,
        "expenses": expenses,
    });
    write!(file, "{}", snapshot).unwrap();
    file
}

#[test]
fn test_load_store_from_snapshot() {
    let file = snapshot_file(
        serde_json::json!([{
            "id": 1,
            "description": "Salary",
            "amount": 3000.0,
            "frequency": "monthly",
            "kind": "primary"
        }]),
        serde_json::json!([{
            "id": 1,
            "description": "Rent",
            "amount": 900.0,
            "category": "fixed",
            "created_at": "2026-01-15T12:00:00Z"
        }]),
    );

    let store = commands::load_store(file.path()).unwrap();
    assert_eq!(store.list_incomes().len(), 1);
    assert_eq!(store.list_expenses().len(), 1);
}

#[test]
fn test_load_store_missing_file_fails() {
    let result = commands::load_store(std::path::Path::new("/nonexistent/records.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_store_rejects_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(commands::load_store(file.path()).is_err());
}

#[test]
fn test_cmd_dashboard_runs() {
    let file = snapshot_file(
        serde_json::json!([{
            "id": 1,
            "description": "Salary",
            "amount": 3000.0,
            "frequency": "monthly",
            "kind": "primary"
        }]),
        serde_json::json!([]),
    );
    assert!(commands::cmd_dashboard(file.path()).is_ok());
}

#[test]
fn test_cmd_performance_runs() {
    let file = snapshot_file(
        serde_json::json!([]),
        serde_json::json!([{
            "id": 1,
            "description": "Car insurance",
            "amount": 80.0,
            "category": "fixed",
            "created_at": "2026-01-15T12:00:00Z"
        }]),
    );
    assert!(commands::cmd_performance(file.path()).is_ok());
}

#[test]
fn test_cli_parses_serve_defaults() {
    use clap::Parser;

    let cli = crate::cli::Cli::try_parse_from(["tally", "serve"]).unwrap();
    match cli.command {
        crate::cli::Commands::Serve { port, host, .. } => {
            assert_eq!(port, 3000);
            assert_eq!(host, "127.0.0.1");
        }
        _ => panic!("expected serve command"),
    }
}
