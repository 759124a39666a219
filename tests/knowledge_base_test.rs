// Knowledge base built from hand-written CSV files

use std::fs;
use tempfile::TempDir;

use workitem_analyzer::knowledge::build_knowledge_base;
use workitem_analyzer::store::{Table, WorkItemStore};

#[test]
fn test_knowledge_base_from_csv_files() {
    let dir = TempDir::new().unwrap();
    let store = WorkItemStore::new(dir.path());

    fs::write(
        store.table_path(Table::Projects),
        "project_name,work_item_id,work_item_title,work_item_type,status,assigned_to\n\
         Apollo,101,\"Login page, v2\",Feature,Active,Sam\n\
         ,,,Bug,New,\n\
         ,,Untitled spike,,,\n\
         Apollo,101,Duplicate id,Task,Closed,Lee\n",
    )
    .unwrap();
    fs::write(
        store.table_path(Table::Developers),
        "developer_name,work_item_id,work_item_title,project_name,status\n\
         \x20 Sam ,101,Login page,Apollo,Active\n\
         Ghost,999\n",
    )
    .unwrap();

    let kb = build_knowledge_base(&store).unwrap();

    assert_eq!(
        kb,
        "Project 'Apollo' has work item 101 titled 'Login page, v2' of type 'Feature' with status 'Active' assigned to 'Sam'.\n\
         Project '' has work item  titled 'Untitled spike' of type '' with status '' assigned to ''.\n\
         Project 'Apollo' has work item 101 titled 'Duplicate id' of type 'Task' with status 'Closed' assigned to 'Lee'.\n\
         Developer 'Sam' works on work item 101 titled 'Login page' in project 'Apollo' with status 'Active'.\n\
         Developer 'Ghost' works on work item 999 titled '' in project '' with status ''."
    );
}

#[test]
fn test_knowledge_base_without_files_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = WorkItemStore::new(dir.path().join("missing"));

    assert_eq!(build_knowledge_base(&store).unwrap(), "");
}

#[test]
fn test_knowledge_base_recomputed_each_call() {
    let dir = TempDir::new().unwrap();
    let store = WorkItemStore::new(dir.path());
    store.ensure_schema().unwrap();
    assert_eq!(build_knowledge_base(&store).unwrap(), "");

    let mut row = workitem_analyzer::store::Record::new();
    row.insert("developer_name".to_string(), "Lee".to_string());
    row.insert("work_item_id".to_string(), "7".to_string());
    store.append(Table::Developers, &row).unwrap();

    assert_eq!(
        build_knowledge_base(&store).unwrap(),
        "Developer 'Lee' works on work item 7 titled '' in project '' with status ''."
    );
}
