//! Column names of the regime survival dataset, grouped by role.
//!
//! These are the built-in defaults. [`crate::ColumnConfig::regime`] builds an
//! owned config from them.

/// Uniquely identifies a regime record.
pub const ID_COL: &str = "regime_id";

/// Metadata and label columns excluded from modeling.
pub const DROP_COLS: [&str; 6] = [
    "ctryname",
    "cowcode2",
    "politycode",
    "ehead",
    "leaderspellreg",
    "start_year",
];

/// Categorical feature columns.
pub const CAT_COLS: [&str; 4] = ["un_region_name", "un_continent_name", "democracy", "regime"];

/// Numeric feature columns. The regime dataset has none.
pub const NUM_COLS: [&str; 0] = [];

/// Survival time column.
pub const DURATION_COL: &str = "duration";

/// Event-observed indicator column (1 when the regime ended, 0 when censored).
pub const EVENT_COL: &str = "observed";

/// Target columns, always `[DURATION_COL, EVENT_COL]`.
pub const TARGET_COLS: [&str; 2] = [DURATION_COL, EVENT_COL];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_cols_follow_duration_then_event() {
        assert_eq!(TARGET_COLS, [DURATION_COL, EVENT_COL]);
        assert_eq!(TARGET_COLS, ["duration", "observed"]);
    }

    #[test]
    fn num_cols_is_empty() {
        assert!(NUM_COLS.is_empty());
    }
}
