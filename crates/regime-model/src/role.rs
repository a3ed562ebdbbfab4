use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semantic role a column plays in the survival dataset.
///
/// Variant order matches declaration order in the column config:
/// identifier, drop-list, categorical, numeric, then the two targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnRole {
    /// Record identifier (`id_col`).
    Identifier,
    /// Excluded from modeling (`drop_cols`).
    Drop,
    /// Categorical feature (`cat_cols`).
    Categorical,
    /// Numeric feature (`num_cols`).
    Numeric,
    /// Survival time target (`duration_col`).
    Duration,
    /// Event-observed target (`event_col`).
    Event,
}

impl ColumnRole {
    pub const ALL: [ColumnRole; 6] = [
        ColumnRole::Identifier,
        ColumnRole::Drop,
        ColumnRole::Categorical,
        ColumnRole::Numeric,
        ColumnRole::Duration,
        ColumnRole::Event,
    ];

    /// Returns true for the duration and event columns.
    pub fn is_target(&self) -> bool {
        matches!(self, ColumnRole::Duration | ColumnRole::Event)
    }

    /// Returns true for columns fed to a model as features.
    pub fn is_feature(&self) -> bool {
        matches!(self, ColumnRole::Categorical | ColumnRole::Numeric)
    }

    /// Returns the config field name for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::Identifier => "identifier",
            ColumnRole::Drop => "drop",
            ColumnRole::Categorical => "categorical",
            ColumnRole::Numeric => "numeric",
            ColumnRole::Duration => "duration",
            ColumnRole::Event => "event",
        }
    }

    /// Returns the config field that holds columns of this role.
    pub fn field_name(&self) -> &'static str {
        match self {
            ColumnRole::Identifier => "id_col",
            ColumnRole::Drop => "drop_cols",
            ColumnRole::Categorical => "cat_cols",
            ColumnRole::Numeric => "num_cols",
            ColumnRole::Duration => "duration_col",
            ColumnRole::Event => "event_col",
        }
    }
}

impl fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ColumnRole {
    type Err = String;

    /// Accepts the role name or its config field name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        ColumnRole::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized || role.field_name() == normalized)
            .ok_or_else(|| format!("Unknown column role: {}", s))
    }
}
