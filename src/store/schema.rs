// Table schemas for the two work item files

use std::fmt;

/// One of the two work item tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Projects,
    Developers,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Projects, Table::Developers];

    /// Fixed header row, written once when the file is created
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Table::Projects => &[
                "project_name",
                "work_item_id",
                "work_item_title",
                "work_item_type",
                "status",
                "assigned_to",
            ],
            Table::Developers => &[
                "developer_name",
                "work_item_id",
                "work_item_title",
                "project_name",
                "status",
            ],
        }
    }

    /// Columns that identify a row. A row with all of these blank is skipped.
    pub fn identifying_columns(&self) -> [&'static str; 3] {
        match self {
            Table::Projects => ["project_name", "work_item_id", "work_item_title"],
            Table::Developers => ["developer_name", "work_item_id", "work_item_title"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Projects => "projects",
            Table::Developers => "developers",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifying_columns_are_in_header() {
        for table in Table::ALL {
            for column in table.identifying_columns() {
                assert!(table.header().contains(&column), "{} missing {}", table, column);
            }
        }
    }
}
