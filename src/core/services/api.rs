//! REST client for the Managify backend.
//!
//! Every authenticated call carries `Authorization: Bearer <token>`.
//! Successful responses wrap their payload as `{ "message": .., "data": .. }`;
//! failures carry a human-readable `message` that is shown to the user as-is.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{
    Issue, NewIssue, PendingInvite, ProjectDetail, StatusColumn, UserOverview,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not signed in")]
    Unauthenticated,
}

impl ApiError {
    /// Text for a user-facing notice: the server's own message when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated | ApiError::Server { status: 401, .. }
        )
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Request paths, relative to the configured base URL.
pub mod endpoints {
    pub const LOGIN: &str = "/users/auth";
    pub const CREATE_STATUS: &str = "/status/create-status";
    pub const CREATE_ISSUE: &str = "/issue/create-issue";
    pub const INVITE_MEMBER: &str = "/invite/project-invite";

    pub fn user_overview(user_id: &str) -> String {
        format!("/users/{user_id}")
    }

    pub fn project_detail(project_id: &str) -> String {
        format!("/project/projects/{project_id}")
    }

    pub fn delete_project(project_id: &str) -> String {
        format!("/project/delete-project/{project_id}")
    }

    pub fn remove_member(member_id: &str) -> String {
        format!("/project/projects/member/{member_id}")
    }

    pub fn pending_invites(user_id: &str) -> String {
        format!("/invite/project-invite/{user_id}")
    }

    pub fn respond_invite(invite_id: &str, accept: bool) -> String {
        let action = if accept { "accept" } else { "decline" };
        format!("/invite/project-invite/{invite_id}/respond?action={action}")
    }

    pub fn delete_status(status_id: &str, project_id: &str) -> String {
        format!("/status/delete-status/{status_id}/{project_id}")
    }

    pub fn issues_for_status(status_id: &str) -> String {
        format!("/issue/get/{status_id}")
    }

    pub fn delete_issue(issue_id: &str) -> String {
        format!("/issue/delete-issue/{issue_id}")
    }

    pub fn update_issue_status(issue_id: &str, status_id: &str) -> String {
        format!("/issue/update-status/{issue_id}/{status_id}")
    }
}

#[derive(Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct TokenBody {
    token: String,
}

/// Pulls `data` out of a success envelope.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response has no data".to_string()))
}

/// Like [`decode_envelope`], but a `null` or missing list reads as empty.
pub(crate) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let envelope: Envelope<Vec<T>> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(envelope.data.unwrap_or_default())
}

pub(crate) fn decode_token(body: &str) -> Result<String, ApiError> {
    let parsed: TokenBody =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if parsed.token.is_empty() {
        return Err(ApiError::Decode("empty token".to_string()));
    }
    Ok(parsed.token)
}

/// Builds the error for a non-2xx response.
pub(crate) fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Server { status, message }
}

/// The two remote operations the board depends on.
#[allow(async_fn_in_trait)]
pub trait BoardRemote {
    async fn issues_for_status(&self, status_id: &str) -> Result<Vec<Issue>, ApiError>;
    async fn update_issue_status(&self, issue_id: &str, status_id: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token,
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn bearer(&self) -> Result<String, ApiError> {
        self.token
            .as_ref()
            .map(|t| format!("Bearer {t}"))
            .ok_or(ApiError::Unauthenticated)
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(builder.header("Authorization", &self.bearer()?))
    }

    async fn read_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let ok = response.ok();
        let body = response.text().await.unwrap_or_default();
        if ok {
            Ok(body)
        } else {
            let err = server_error(status, &body);
            log::warn!("request failed: {err}");
            Err(err)
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.authorized(builder)?.send().await?;
        decode_envelope(&Self::read_body(response).await?)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<Vec<T>, ApiError> {
        let response = self.authorized(builder)?.send().await?;
        decode_list(&Self::read_body(response).await?)
    }

    async fn fetch_with_body<B, T>(&self, builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.authorized(builder)?.json(body)?.send().await?;
        decode_envelope(&Self::read_body(response).await?)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.authorized(builder)?.send().await?;
        Self::read_body(response).await.map(|_| ())
    }

    async fn execute_with_body<B: Serialize>(&self, builder: RequestBuilder, body: &B) -> Result<(), ApiError> {
        let response = self.authorized(builder)?.json(body)?.send().await?;
        Self::read_body(response).await.map(|_| ())
    }

    /// `POST /users/auth`; needs no token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response = Request::post(&self.url(endpoints::LOGIN))
            .json(&body)?
            .send()
            .await?;
        decode_token(&Self::read_body(response).await?)
    }

    pub async fn user_overview(&self, user_id: &str) -> Result<UserOverview, ApiError> {
        self.fetch(Request::get(&self.url(&endpoints::user_overview(user_id))))
            .await
    }

    pub async fn project_detail(&self, project_id: &str) -> Result<ProjectDetail, ApiError> {
        self.fetch(Request::get(&self.url(&endpoints::project_detail(project_id))))
            .await
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<(), ApiError> {
        self.execute(Request::delete(&self.url(&endpoints::delete_project(project_id))))
            .await
    }

    pub async fn remove_member(&self, member_id: &str) -> Result<(), ApiError> {
        self.execute(Request::delete(&self.url(&endpoints::remove_member(member_id))))
            .await
    }

    pub async fn pending_invites(&self, user_id: &str) -> Result<Vec<PendingInvite>, ApiError> {
        self.fetch_list(Request::get(&self.url(&endpoints::pending_invites(user_id))))
            .await
    }

    pub async fn respond_invite(&self, invite_id: &str, accept: bool) -> Result<(), ApiError> {
        self.execute(Request::put(&self.url(&endpoints::respond_invite(invite_id, accept))))
            .await
    }

    pub async fn invite_member(&self, project_id: &str, email: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "email": email, "project_id": project_id });
        self.execute_with_body(Request::post(&self.url(endpoints::INVITE_MEMBER)), &body)
            .await
    }

    pub async fn create_status(&self, project_id: &str, name: &str) -> Result<StatusColumn, ApiError> {
        let body = serde_json::json!({ "project_id": project_id, "name": name });
        self.fetch_with_body(Request::post(&self.url(endpoints::CREATE_STATUS)), &body)
            .await
    }

    pub async fn delete_status(&self, status_id: &str, project_id: &str) -> Result<(), ApiError> {
        self.execute(Request::delete(
            &self.url(&endpoints::delete_status(status_id, project_id)),
        ))
        .await
    }

    pub async fn create_issue(&self, issue: &NewIssue) -> Result<Issue, ApiError> {
        self.fetch_with_body(Request::post(&self.url(endpoints::CREATE_ISSUE)), issue)
            .await
    }

    pub async fn delete_issue(&self, issue_id: &str) -> Result<(), ApiError> {
        self.execute(Request::delete(&self.url(&endpoints::delete_issue(issue_id))))
            .await
    }
}

impl BoardRemote for ApiClient {
    async fn issues_for_status(&self, status_id: &str) -> Result<Vec<Issue>, ApiError> {
        self.fetch_list(Request::get(&self.url(&endpoints::issues_for_status(status_id))))
            .await
    }

    async fn update_issue_status(&self, issue_id: &str, status_id: &str) -> Result<(), ApiError> {
        self.execute(Request::put(
            &self.url(&endpoints::update_issue_status(issue_id, status_id)),
        ))
        .await
    }
}
