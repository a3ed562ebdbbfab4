//! Tests for loading and checking column config overrides.

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use regime_model::{ColumnConfig, ColumnRole, ConfigError, ConfigIssue};

fn unique_temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "regime-model-{}-{}-{}.json",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn parses_override_without_num_cols() {
    let config = ColumnConfig::from_json_str(
        r#"{
            "id_col": "spell_id",
            "drop_cols": ["country"],
            "cat_cols": ["region"],
            "duration_col": "years",
            "event_col": "ended"
        }"#,
    )
    .unwrap();
    assert!(config.num_cols.is_empty());
    assert_eq!(config.target_cols(), ["years", "ended"]);
    assert!(config.check().is_clean());
}

#[test]
fn rejects_explicit_target_cols() {
    let result = ColumnConfig::from_json_str(
        r#"{
            "id_col": "regime_id",
            "drop_cols": [],
            "cat_cols": [],
            "duration_col": "duration",
            "event_col": "observed",
            "target_cols": ["observed", "duration"]
        }"#,
    );
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn rejects_missing_event_col() {
    let result = ColumnConfig::from_json_str(
        r#"{"id_col": "regime_id", "drop_cols": [], "cat_cols": [], "duration_col": "duration"}"#,
    );
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn loads_override_from_disk() {
    let path = unique_temp_path("load");
    let json = serde_json::to_string(&ColumnConfig::regime()).unwrap();
    fs::write(&path, json).unwrap();
    let loaded = ColumnConfig::from_json_path(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, ColumnConfig::regime());
}

#[test]
fn missing_file_is_io_error() {
    let path = unique_temp_path("missing");
    let result = ColumnConfig::from_json_path(&path);
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn json_error_keeps_cause_as_source() {
    use std::error::Error;

    let error = ColumnConfig::from_json_str("{").unwrap_err();
    assert_eq!(error.to_string(), "invalid column config json");
    let source = error.source().unwrap().to_string();
    assert!(source.contains("EOF"), "{source}");
}

#[test]
fn target_sharing_a_name_is_a_conflict() {
    let mut config = ColumnConfig::regime();
    config.event_col = "duration".to_string();
    let report = config.check();
    assert_eq!(
        report.issues,
        vec![ConfigIssue::RoleConflict {
            column: "duration".to_string(),
            first: ColumnRole::Duration,
            second: ColumnRole::Event,
        }]
    );
}

#[test]
fn empty_id_is_reported() {
    let mut config = ColumnConfig::regime();
    config.id_col = String::new();
    let report = config.check();
    assert_eq!(
        report.issues,
        vec![ConfigIssue::EmptyName {
            role: ColumnRole::Identifier
        }]
    );
    assert!(matches!(
        config.validated(),
        Err(ConfigError::Invalid(report)) if report.issue_count() == 1
    ));
}

proptest! {
    #[test]
    fn duplicated_drop_column_is_always_reported(index in 0usize..6) {
        let mut config = ColumnConfig::regime();
        let column = config.drop_cols[index].clone();
        config.drop_cols.push(column.clone());
        let report = config.check();
        prop_assert_eq!(
            report.issues,
            vec![ConfigIssue::DuplicateInRole { role: ColumnRole::Drop, column }]
        );
    }

    #[test]
    fn feature_or_metadata_column_added_as_numeric_conflicts(index in 0usize..11) {
        let mut config = ColumnConfig::regime();
        let (first, column) = {
            let (role, name) = config.columns()[index];
            (role, name.to_string())
        };
        config.num_cols.push(column.clone());
        let report = config.check();
        prop_assert_eq!(report.issue_count(), 1);
        let conflict_first = match &report.issues[0] {
            ConfigIssue::RoleConflict { column: c, first, second } => {
                prop_assert_eq!(c, &column);
                prop_assert_eq!(*second, ColumnRole::Numeric);
                *first
            }
            other => return Err(TestCaseError::fail(format!("unexpected issue {other:?}"))),
        };
        prop_assert_eq!(conflict_first, first);
    }

    #[test]
    fn fresh_names_never_resolve(name in "[a-z]{1,12}_x") {
        let config = ColumnConfig::regime();
        prop_assert!(matches!(config.role_of(&name), Err(ConfigError::UnknownColumn(_))));
    }
}
