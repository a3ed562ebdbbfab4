//! Table and JSON rendering of column configs and check reports.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use regime_model::{ColumnConfig, ColumnRole, ConfigReport};

/// JSON view of a config, including the derived target columns.
#[derive(Serialize)]
struct ConfigView<'a> {
    #[serde(flatten)]
    config: &'a ColumnConfig,
    target_cols: [&'a str; 2],
    feature_cols: Vec<&'a str>,
}

pub fn render_json(config: &ColumnConfig) -> serde_json::Result<String> {
    let view = ConfigView {
        config,
        target_cols: config.target_cols(),
        feature_cols: config.feature_cols(),
    };
    serde_json::to_string_pretty(&view)
}

/// The config alone, in the shape `ColumnConfig::from_json_str` accepts.
pub fn render_config_json(config: &ColumnConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(config)
}

/// One row per column, grouped by role in declaration order.
pub fn config_table(config: &ColumnConfig) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Role"),
        header_cell("Field"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    let mut position = 0usize;
    for role in ColumnRole::ALL {
        let columns = config.columns_with_role(role);
        if columns.is_empty() {
            table.add_row(vec![
                dim_cell("-"),
                dim_cell("(none)"),
                role_cell(role),
                dim_cell(role.field_name()),
            ]);
            continue;
        }
        for column in columns {
            position += 1;
            table.add_row(vec![
                Cell::new(position),
                Cell::new(column),
                role_cell(role),
                dim_cell(role.field_name()),
            ]);
        }
    }
    table
}

/// Issue table for a check report; `None` when the report is clean.
pub fn report_table(report: &ConfigReport) -> Option<Table> {
    if report.is_clean() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Issue")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, issue) in report.issues.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(issue.to_string()).fg(Color::Red),
        ]);
    }
    Some(table)
}

/// Role lookups as rows; unknown columns render as `unknown`.
pub fn role_table(lookups: &[(String, Option<ColumnRole>)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Column"), header_cell("Role")]);
    apply_table_style(&mut table);
    for (column, role) in lookups {
        let role = match role {
            Some(role) => role_cell(*role),
            None => Cell::new("unknown").fg(Color::Red),
        };
        table.add_row(vec![Cell::new(column), role]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn role_cell(role: ColumnRole) -> Cell {
    let color = if role.is_target() {
        Color::Green
    } else if role.is_feature() {
        Color::Yellow
    } else {
        Color::Reset
    };
    Cell::new(role.as_str()).fg(color)
}
