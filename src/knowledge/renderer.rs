// Sentence templates for work item rows

use crate::store::{Record, Table};

/// Trimmed value of a column; missing columns read as empty.
fn field<'a>(record: &'a Record, column: &str) -> &'a str {
    record.get(column).map(|v| v.trim()).unwrap_or("")
}

/// True when every identifying column of the row is blank after trimming.
///
/// Such rows are left out of the knowledge base. Nothing else about a row is
/// validated.
pub fn is_blank_row(table: Table, record: &Record) -> bool {
    table
        .identifying_columns()
        .iter()
        .all(|column| field(record, column).is_empty())
}

/// Render one row as a sentence using the table's template.
pub fn render_row(table: Table, record: &Record) -> String {
    match table {
        Table::Projects => format!(
            "Project '{}' has work item {} titled '{}' of type '{}' with status '{}' assigned to '{}'.",
            field(record, "project_name"),
            field(record, "work_item_id"),
            field(record, "work_item_title"),
            field(record, "work_item_type"),
            field(record, "status"),
            field(record, "assigned_to"),
        ),
        Table::Developers => format!(
            "Developer '{}' works on work item {} titled '{}' in project '{}' with status '{}'.",
            field(record, "developer_name"),
            field(record, "work_item_id"),
            field(record, "work_item_title"),
            field(record, "project_name"),
            field(record, "status"),
        ),
    }
}

/// Render all non-blank rows of a table, keeping source order.
pub fn render_table(table: Table, records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter(|record| !is_blank_row(table, record))
        .map(|record| render_row(table, record))
        .collect()
}
