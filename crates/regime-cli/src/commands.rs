//! Command bodies for the column config inspector.
//!
//! Each `run_*` function prints its result to stdout and returns whether the
//! command succeeded, which `main` maps to the exit status.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::{debug, info, warn};

use regime_model::{ColumnConfig, ConfigError};

use crate::render::{config_table, render_config_json, render_json, report_table, role_table};

/// Output format of the `show` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    /// Role table.
    #[default]
    Table,
    /// Config fields plus derived target and feature columns (not accepted by `--config`).
    Json,
    /// Bare config document, accepted back by `--config`.
    Config,
}

/// Load the override at `path`, or the built-in regime columns.
///
/// With `validate`, an override that violates a config invariant is an error.
pub fn load_config(path: Option<&Path>, validate: bool) -> Result<ColumnConfig> {
    let Some(path) = path else {
        debug!("using built-in regime columns");
        return Ok(ColumnConfig::regime());
    };
    let config = ColumnConfig::from_json_path(path)
        .with_context(|| format!("load column config {}", path.display()))?;
    info!(path = %path.display(), "loaded column config override");
    if validate {
        config
            .validated()
            .with_context(|| format!("column config {} failed checks", path.display()))
    } else {
        Ok(config)
    }
}

pub fn run_show(config: &ColumnConfig, format: ShowFormat) -> Result<()> {
    match format {
        ShowFormat::Table => {
            println!("{}", config_table(config));
            println!(
                "Features: {}  Targets: {}",
                config.feature_cols().len(),
                config.target_cols().join(", ")
            );
        }
        ShowFormat::Json => {
            let json = render_json(config).context("serialize column config")?;
            println!("{json}");
        }
        ShowFormat::Config => {
            let json = render_config_json(config).context("serialize column config")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Returns true when the config has no issues.
pub fn run_check(config: &ColumnConfig) -> Result<bool> {
    let report = config.check();
    match report_table(&report) {
        None => {
            println!("Column config OK ({} columns)", config.columns().len());
            Ok(true)
        }
        Some(table) => {
            for issue in &report.issues {
                warn!(%issue, "column config issue");
            }
            println!("{table}");
            eprintln!("{} issue(s) found", report.issue_count());
            Ok(false)
        }
    }
}

/// Returns true when every requested column has a role.
pub fn run_role(config: &ColumnConfig, columns: &[String]) -> Result<bool> {
    let mut lookups = Vec::with_capacity(columns.len());
    let mut all_known = true;
    for column in columns {
        match config.role_of(column) {
            Ok(role) => lookups.push((column.clone(), Some(role))),
            Err(ConfigError::UnknownColumn(name)) => {
                warn!(column = %name, "column has no role");
                all_known = false;
                lookups.push((name, None));
            }
            Err(error) => return Err(error).context("look up column role"),
        }
    }
    println!("{}", role_table(&lookups));
    Ok(all_known)
}
