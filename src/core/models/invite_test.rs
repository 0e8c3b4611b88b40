use super::*;
use serde_json::json;

#[test]
fn invite_accepts_go_style_field_names() {
    let invite: PendingInvite = serde_json::from_value(json!({
        "ID": "inv-1",
        "ProjectID": "p-1",
        "Status": "pending",
        "CreatedAt": "2025-01-01T00:00:00Z"
    }))
    .unwrap();

    assert_eq!(invite.id, "inv-1");
    assert_eq!(invite.project_id, "p-1");
    assert!(invite.is_pending());
    assert_eq!(invite.summary(), "Someone invited you to a project");
}

#[test]
fn invite_summary_uses_names_when_present() {
    let invite: PendingInvite = serde_json::from_value(json!({
        "_id": "inv-2",
        "status": "accepted",
        "senderName": "Ada",
        "projectName": "Apollo"
    }))
    .unwrap();

    assert!(!invite.is_pending());
    assert_eq!(invite.summary(), "Ada invited you to Apollo");
}

#[test]
fn plan_catalog_matches_limits() {
    assert_eq!(PlanType::Basic.project_limit(), Some(3));
    assert_eq!(PlanType::Premium.project_limit(), Some(10));
    assert_eq!(PlanType::Pro.project_limit(), None);
    assert_eq!(PlanType::Pro.features()[0], "Unlimited Projects");
    assert_eq!(PlanType::all().len(), 3);
}

#[test]
fn plan_type_parses_and_defaults() {
    let plan: PlanType = serde_json::from_value(json!("PREMIUM")).unwrap();
    assert_eq!(plan, PlanType::Premium);
    let plan: PlanType = serde_json::from_value(json!("BASIC")).unwrap();
    assert_eq!(plan, PlanType::Basic);
    let plan: PlanType = serde_json::from_value(json!("ENTERPRISE")).unwrap();
    assert_eq!(plan, PlanType::Basic);
}

#[test]
fn overview_parses_and_enforces_plan_limit() {
    let overview: UserOverview = serde_json::from_value(json!({
        "user": { "id": "u-1", "full_name": "Ada", "email": "ada@example.com", "isverified": true },
        "subscription": { "plan_type": "BASIC", "is_valid": true },
        "project": [
            { "id": "p-1", "name": "One" },
            { "id": "p-2", "name": "Two" },
            { "id": "p-3", "name": "Three" }
        ],
        "recentIssues": null
    }))
    .unwrap();

    assert!(overview.user.is_verified);
    assert_eq!(overview.plan(), PlanType::Basic);
    assert_eq!(overview.projects.len(), 3);
    assert!(overview.recent_issues.is_empty());
    assert!(!overview.can_create_project());
}

#[test]
fn overview_without_subscription_is_basic() {
    let overview: UserOverview = serde_json::from_value(json!({
        "user": { "id": "u-1" },
        "project": null
    }))
    .unwrap();
    assert_eq!(overview.plan(), PlanType::Basic);
    assert!(overview.can_create_project());
}
