//! Bearer-token session.
//!
//! The token is a JWT issued by `POST /users/auth`. Only its payload is read
//! here (user id and expiry); signature checks are the server's business.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use super::storage::{read_token, remove_token, write_token};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: i64,
}

/// Decodes the payload segment of a JWT.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn is_token_valid(token: &str, now_unix: i64) -> bool {
    decode_claims(token)
        .map(|claims| claims.exp > now_unix)
        .unwrap_or(false)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    claims: Option<TokenClaims>,
}

impl Session {
    /// A session for `token`, or an anonymous one if the token is malformed
    /// or already expired.
    pub fn from_token(token: &str, now_unix: i64) -> Self {
        match decode_claims(token) {
            Some(claims) if claims.exp > now_unix => Self {
                token: Some(token.to_string()),
                claims: Some(claims),
            },
            _ => Self::default(),
        }
    }

    /// Restores the stored session, dropping a stale token from storage.
    pub fn restore(now_unix: i64) -> Self {
        let Some(token) = read_token() else {
            return Self::default();
        };
        let session = Self::from_token(&token, now_unix);
        if !session.is_authenticated() {
            log::info!("Stored session token is invalid or expired; clearing it");
            remove_token();
        }
        session
    }

    /// Starts a session from a fresh login and persists it.
    pub fn begin(token: &str, now_unix: i64) -> Self {
        let session = Self::from_token(token, now_unix);
        if session.is_authenticated() {
            write_token(token);
        } else {
            log::warn!("Login returned a token that is already invalid");
        }
        session
    }

    pub fn end() -> Self {
        remove_token();
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.claims.as_ref()?.id.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.claims.as_ref()?.email.as_deref()
    }

    pub fn expires_at(&self) -> Option<i64> {
        self.claims.as_ref().map(|c| c.exp)
    }
}
