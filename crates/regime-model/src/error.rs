use thiserror::Error;

use crate::check::ConfigReport;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read column config")]
    Io(#[from] std::io::Error),
    #[error("invalid column config json")]
    Json(#[from] serde_json::Error),
    #[error("column `{0}` has no role in the column config")]
    UnknownColumn(String),
    #[error("column config has {} issue(s)", .0.issue_count())]
    Invalid(ConfigReport),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
