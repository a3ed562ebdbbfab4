use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::check::{ConfigReport, check_assignments};
use crate::columns::{CAT_COLS, DROP_COLS, DURATION_COL, EVENT_COL, ID_COL, NUM_COLS};
use crate::error::{ConfigError, Result};
use crate::role::ColumnRole;

/// Column role groupings for a survival dataset.
///
/// `target_cols` is not stored; it is always derived from `duration_col`
/// and `event_col`, so JSON documents carrying it are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnConfig {
    pub id_col: String,
    pub drop_cols: Vec<String>,
    pub cat_cols: Vec<String>,
    #[serde(default)]
    pub num_cols: Vec<String>,
    pub duration_col: String,
    pub event_col: String,
}

impl ColumnConfig {
    /// The built-in regime dataset columns.
    pub fn regime() -> Self {
        Self {
            id_col: ID_COL.to_string(),
            drop_cols: DROP_COLS.iter().map(|s| s.to_string()).collect(),
            cat_cols: CAT_COLS.iter().map(|s| s.to_string()).collect(),
            num_cols: NUM_COLS.iter().map(|s| s.to_string()).collect(),
            duration_col: DURATION_COL.to_string(),
            event_col: EVENT_COL.to_string(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON column config from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config
    /// document. Invariants are not checked here; see [`Self::validated`].
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!(
            path = %path.display(),
            columns = config.columns().len(),
            "loaded column config"
        );
        Ok(config)
    }

    pub fn target_cols(&self) -> [&str; 2] {
        [self.duration_col.as_str(), self.event_col.as_str()]
    }

    /// Categorical columns followed by numeric columns.
    pub fn feature_cols(&self) -> Vec<&str> {
        self.cat_cols
            .iter()
            .chain(&self.num_cols)
            .map(String::as_str)
            .collect()
    }

    /// Every configured column with its role, in declaration order.
    pub fn columns(&self) -> Vec<(ColumnRole, &str)> {
        let mut columns = Vec::with_capacity(
            3 + self.drop_cols.len() + self.cat_cols.len() + self.num_cols.len(),
        );
        columns.push((ColumnRole::Identifier, self.id_col.as_str()));
        let groups = [
            (ColumnRole::Drop, &self.drop_cols),
            (ColumnRole::Categorical, &self.cat_cols),
            (ColumnRole::Numeric, &self.num_cols),
        ];
        for (role, names) in groups {
            columns.extend(names.iter().map(|name| (role, name.as_str())));
        }
        columns.push((ColumnRole::Duration, self.duration_col.as_str()));
        columns.push((ColumnRole::Event, self.event_col.as_str()));
        columns
    }

    /// Columns assigned to `role`, in declaration order.
    pub fn columns_with_role(&self, role: ColumnRole) -> Vec<&str> {
        match role {
            ColumnRole::Identifier => vec![self.id_col.as_str()],
            ColumnRole::Drop => self.drop_cols.iter().map(String::as_str).collect(),
            ColumnRole::Categorical => self.cat_cols.iter().map(String::as_str).collect(),
            ColumnRole::Numeric => self.num_cols.iter().map(String::as_str).collect(),
            ColumnRole::Duration => vec![self.duration_col.as_str()],
            ColumnRole::Event => vec![self.event_col.as_str()],
        }
    }

    /// Look up the role of a column by exact name.
    ///
    /// When a column is (invalidly) listed under several roles, the first
    /// in declaration order wins.
    pub fn role_of(&self, column: &str) -> Result<ColumnRole> {
        self.columns()
            .into_iter()
            .find(|(_, name)| *name == column)
            .map(|(role, _)| role)
            .ok_or_else(|| ConfigError::UnknownColumn(column.to_string()))
    }

    pub fn check(&self) -> ConfigReport {
        let report = check_assignments(self.columns());
        debug!(issues = report.issue_count(), "checked column config");
        report
    }

    /// Consume the config, failing if any invariant is violated.
    pub fn validated(self) -> Result<Self> {
        let report = self.check();
        if report.is_clean() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(report))
        }
    }
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self::regime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_declaration_order() {
        let config = ColumnConfig::regime();
        let columns = config.columns();
        assert_eq!(columns.len(), 13);
        assert_eq!(columns[0], (ColumnRole::Identifier, "regime_id"));
        assert_eq!(columns[1], (ColumnRole::Drop, "ctryname"));
        assert_eq!(columns[7], (ColumnRole::Categorical, "un_region_name"));
        assert_eq!(columns[11], (ColumnRole::Duration, "duration"));
        assert_eq!(columns[12], (ColumnRole::Event, "observed"));
    }

    #[test]
    fn role_of_unknown_column_errors() {
        let config = ColumnConfig::regime();
        let error = config.role_of("gdp").unwrap_err();
        assert!(matches!(error, ConfigError::UnknownColumn(ref name) if name == "gdp"));
    }

    #[test]
    fn role_of_is_case_sensitive() {
        let config = ColumnConfig::regime();
        assert_eq!(config.role_of("regime").unwrap(), ColumnRole::Categorical);
        assert!(config.role_of("Regime").is_err());
    }

    #[test]
    fn validated_rejects_conflicts() {
        let mut config = ColumnConfig::regime();
        config.cat_cols.push("start_year".to_string());
        match config.validated() {
            Err(ConfigError::Invalid(report)) => assert_eq!(report.issue_count(), 1),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }
}
