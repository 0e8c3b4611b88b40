use super::*;
use crate::core::models::Priority;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn update_status_path_carries_both_ids() {
    assert_eq!(
        endpoints::update_issue_status("i-1", "col-2"),
        "/issue/update-status/i-1/col-2"
    );
}

#[test]
fn column_and_project_paths() {
    assert_eq!(endpoints::issues_for_status("col-1"), "/issue/get/col-1");
    assert_eq!(endpoints::project_detail("p-1"), "/project/projects/p-1");
    assert_eq!(endpoints::delete_status("col-1", "p-1"), "/status/delete-status/col-1/p-1");
    assert_eq!(endpoints::remove_member("u-9"), "/project/projects/member/u-9");
}

#[test]
fn respond_invite_path_encodes_action() {
    assert_eq!(
        endpoints::respond_invite("inv-1", true),
        "/invite/project-invite/inv-1/respond?action=accept"
    );
    assert_eq!(
        endpoints::respond_invite("inv-1", false),
        "/invite/project-invite/inv-1/respond?action=decline"
    );
}

#[test]
fn url_joins_base_and_path_with_single_slash() {
    let client = ApiClient::new("http://api.test/api/v1/", None);
    assert_eq!(client.url("/issue/get/x"), "http://api.test/api/v1/issue/get/x");
    assert_eq!(client.url("users/auth"), "http://api.test/api/v1/users/auth");
}

#[test]
fn bearer_requires_token() {
    let anonymous = ApiClient::new("http://api.test", None);
    assert_eq!(anonymous.bearer(), Err(ApiError::Unauthenticated));

    let signed_in = anonymous.with_token(Some("abc".into()));
    assert!(signed_in.has_token());
    assert_eq!(signed_in.bearer().unwrap(), "Bearer abc");
}

// =============================================================
// Response decoding
// =============================================================

#[test]
fn decode_envelope_extracts_data() {
    let body = r#"{"message":"Resource fetched successfully","data":{"id":"i-1","title":"T","priority":"HIGH"}}"#;
    let issue: Issue = decode_envelope(body).unwrap();
    assert_eq!(issue.id, "i-1");
    assert_eq!(issue.priority, Priority::High);
}

#[test]
fn decode_envelope_without_data_is_decode_error() {
    let err = decode_envelope::<Issue>(r#"{"message":"ok"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_list_treats_null_as_empty() {
    let issues: Vec<Issue> = decode_list(r#"{"message":"ok","data":null}"#).unwrap();
    assert!(issues.is_empty());
}

#[test]
fn decode_list_rejects_garbage() {
    assert!(matches!(decode_list::<Issue>("<html>"), Err(ApiError::Decode(_))));
}

#[test]
fn decode_token_reads_top_level_token() {
    assert_eq!(decode_token(r#"{"token":"jwt.value.sig"}"#).unwrap(), "jwt.value.sig");
    assert!(decode_token(r#"{"token":""}"#).is_err());
}

#[test]
fn server_error_uses_message_verbatim() {
    let err = server_error(401, r#"{"message":"you are not a member of this project"}"#);
    assert_eq!(
        err,
        ApiError::Server { status: 401, message: "you are not a member of this project".into() }
    );
    assert_eq!(err.user_message("Failed to move issue"), "you are not a member of this project");
    assert!(err.is_unauthorized());
}

#[test]
fn server_error_without_message_falls_back() {
    let err = server_error(502, "Bad Gateway");
    assert_eq!(err.to_string(), "request failed with status 502");
    assert!(!err.is_unauthorized());
}

#[test]
fn user_message_falls_back_for_transport_errors() {
    let err = ApiError::Network("connection refused".into());
    assert_eq!(err.user_message("Failed to move issue"), "Failed to move issue");

    let blank = ApiError::Server { status: 500, message: "  ".into() };
    assert_eq!(blank.user_message("Failed to move issue"), "Failed to move issue");
}
