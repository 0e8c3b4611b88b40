use super::*;
use serde_json::json;

fn column(id: &str) -> StatusColumn {
    StatusColumn {
        id: id.to_string(),
        project_id: "p-1".to_string(),
        name: id.to_uppercase(),
        issue_ids: Vec::new(),
        created_at: None,
    }
}

fn detail_with_columns(count: usize) -> ProjectDetail {
    ProjectDetail {
        project: Project {
            id: "p-1".into(),
            name: "Managify".into(),
            description: String::new(),
            category: "software".into(),
            tags: Vec::new(),
            status: Some("active".into()),
        },
        columns: (0..count).map(|i| column(&format!("c{i}"))).collect(),
        members: Vec::new(),
    }
}

#[test]
fn project_detail_parses_statutes_key() {
    let detail: ProjectDetail = serde_json::from_value(json!({
        "project": { "id": "p-1", "name": "Managify", "tags": null },
        "statutes": [
            { "id": "todo", "project_id": "p-1", "name": "To Do", "issues_id": ["a", "b"],
              "created_at": "2025-01-01T10:00:00Z" },
            { "id": "done", "name": "Done", "issues_id": null }
        ],
        "members": [{ "id": "u-1", "full_name": "Ada", "email": "ada@example.com" }]
    }))
    .unwrap();

    assert_eq!(detail.column_ids(), vec!["todo".to_string(), "done".to_string()]);
    assert_eq!(detail.columns[0].issue_ids.len(), 2);
    assert!(detail.columns[1].issue_ids.is_empty());
    assert!(detail.columns[0].created_at.is_some());
    assert_eq!(detail.members[0].display_name(), "Ada");
    assert!(detail.project.tags.is_empty());
}

#[test]
fn project_detail_missing_lists_are_empty() {
    let detail: ProjectDetail =
        serde_json::from_value(json!({ "project": { "id": "p", "name": "n" }, "statutes": null }))
            .unwrap();
    assert!(detail.columns.is_empty());
    assert!(detail.members.is_empty());
}

#[test]
fn column_cap_is_six() {
    assert!(detail_with_columns(5).can_add_column());
    assert!(!detail_with_columns(MAX_STATUS_COLUMNS).can_add_column());
}

#[test]
fn add_column_ignores_duplicates() {
    let mut detail = detail_with_columns(1);
    detail.add_column(column("c0"));
    detail.add_column(column("extra"));
    assert_eq!(detail.column_ids(), vec!["c0".to_string(), "extra".to_string()]);
}

#[test]
fn remove_column_and_member_report_changes() {
    let mut detail = detail_with_columns(2);
    detail.members.push(Member { id: "u-1".into(), full_name: String::new(), email: "x@y.z".into() });

    assert!(detail.remove_column("c1"));
    assert!(!detail.remove_column("c1"));
    assert!(detail.remove_member("u-1"));
    assert!(!detail.remove_member("u-1"));
    assert_eq!(detail.columns.len(), 1);
}

#[test]
fn member_display_name_falls_back_to_email() {
    let m = Member { id: "1".into(), full_name: "  ".into(), email: "x@y.z".into() };
    assert_eq!(m.display_name(), "x@y.z");
}

#[test]
fn project_active_flag() {
    let mut p = detail_with_columns(0).project;
    assert!(p.is_active());
    p.status = None;
    assert!(!p.is_active());
}
