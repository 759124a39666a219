// Knowledge base
//
// Flattens both work item tables into one newline-joined block of sentences.
// Rebuilt from disk on every call; nothing is cached between questions.

mod renderer;

pub use renderer::{is_blank_row, render_row, render_table};

use anyhow::Result;

use crate::store::{Table, WorkItemStore};

/// Project sentences first, then developer sentences, each in file order.
pub fn build_knowledge_base(store: &WorkItemStore) -> Result<String> {
    let mut sentences = Vec::new();

    for table in Table::ALL {
        let records = store.read_all(table)?;
        let rendered = render_table(table, &records);
        tracing::debug!(
            table = %table,
            rows = records.len(),
            sentences = rendered.len(),
            "Rendered table"
        );
        sentences.extend(rendered);
    }

    Ok(sentences.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Record;
    use tempfile::TempDir;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_tables_give_empty_knowledge_base() {
        let dir = TempDir::new().unwrap();
        let store = WorkItemStore::new(dir.path());
        store.ensure_schema().unwrap();

        assert_eq!(build_knowledge_base(&store).unwrap(), "");
    }

    #[test]
    fn test_projects_precede_developers() {
        let dir = TempDir::new().unwrap();
        let store = WorkItemStore::new(dir.path());

        store
            .append(
                Table::Developers,
                &record(&[("developer_name", "Sam"), ("work_item_id", "9")]),
            )
            .unwrap();
        store
            .append(
                Table::Projects,
                &record(&[("project_name", "Apollo"), ("work_item_id", "1")]),
            )
            .unwrap();
        store
            .append(
                Table::Projects,
                &record(&[("project_name", "Zephyr"), ("work_item_id", "2")]),
            )
            .unwrap();

        let kb = build_knowledge_base(&store).unwrap();
        let lines: Vec<&str> = kb.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Project 'Apollo'"));
        assert!(lines[1].starts_with("Project 'Zephyr'"));
        assert!(lines[2].starts_with("Developer 'Sam'"));
    }
}
