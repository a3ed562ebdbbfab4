//! Column configuration for the political regime survival dataset.
//!
//! The [`columns`] module holds the built-in names as constants. [`ColumnConfig`]
//! is the owned form used when a pipeline stage needs to check, override, or
//! look up column roles.

pub mod check;
pub mod columns;
pub mod config;
pub mod error;
pub mod role;

pub use check::{ConfigIssue, ConfigReport};
pub use columns::{CAT_COLS, DROP_COLS, DURATION_COL, EVENT_COL, ID_COL, NUM_COLS, TARGET_COLS};
pub use config::ColumnConfig;
pub use error::{ConfigError, Result};
pub use role::ColumnRole;
