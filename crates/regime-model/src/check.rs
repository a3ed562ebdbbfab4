use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::role::ColumnRole;

/// A single violated column config invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConfigIssue {
    /// A column name is empty or whitespace.
    EmptyName { role: ColumnRole },
    /// The same column is listed twice within one role group.
    DuplicateInRole { role: ColumnRole, column: String },
    /// A column is assigned to two different roles.
    RoleConflict {
        column: String,
        first: ColumnRole,
        second: ColumnRole,
    },
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::EmptyName { role } => {
                write!(f, "{} contains an empty column name", role.field_name())
            }
            ConfigIssue::DuplicateInRole { role, column } => {
                write!(f, "{} lists `{}` more than once", role.field_name(), column)
            }
            ConfigIssue::RoleConflict {
                column,
                first,
                second,
            } => write!(
                f,
                "`{}` appears in both {} and {}",
                column,
                first.field_name(),
                second.field_name()
            ),
        }
    }
}

/// Issues found by [`crate::ColumnConfig::check`], in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigReport {
    pub issues: Vec<ConfigIssue>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Check role assignments given in declaration order.
pub(crate) fn check_assignments<'a, I>(assignments: I) -> ConfigReport
where
    I: IntoIterator<Item = (ColumnRole, &'a str)>,
{
    let mut seen: BTreeMap<&'a str, ColumnRole> = BTreeMap::new();
    let mut issues = Vec::new();
    for (role, column) in assignments {
        if column.trim().is_empty() {
            issues.push(ConfigIssue::EmptyName { role });
            continue;
        }
        match seen.get(column) {
            None => {
                seen.insert(column, role);
            }
            Some(first) if *first == role => issues.push(ConfigIssue::DuplicateInRole {
                role,
                column: column.to_string(),
            }),
            Some(first) => issues.push(ConfigIssue::RoleConflict {
                column: column.to_string(),
                first: *first,
                second: role,
            }),
        }
    }
    ConfigReport { issues }
}
