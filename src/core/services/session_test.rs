use super::*;

fn make_token(payload: &str) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload)
    )
}

const NOW: i64 = 1_700_000_000;

#[test]
fn decode_claims_reads_payload() {
    let token = make_token(r#"{"id":"u-1","email":"ada@example.com","exp":1700003600}"#);
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.id.as_deref(), Some("u-1"));
    assert_eq!(claims.email.as_deref(), Some("ada@example.com"));
    assert_eq!(claims.exp, 1_700_003_600);
}

#[test]
fn decode_claims_tolerates_padding() {
    let token = format!("h.{}=.s", URL_SAFE_NO_PAD.encode(r#"{"exp":1}"#));
    assert_eq!(decode_claims(&token).unwrap().exp, 1);
}

#[test]
fn decode_claims_rejects_malformed_tokens() {
    assert!(decode_claims("").is_none());
    assert!(decode_claims("no-dots-here").is_none());
    assert!(decode_claims("a.!!!.c").is_none());
    assert!(decode_claims(&make_token(r#"{"id":"u-1"}"#)).is_none());
}

#[test]
fn token_validity_depends_on_expiry() {
    let live = make_token(&format!(r#"{{"exp":{}}}"#, NOW + 60));
    let expired = make_token(&format!(r#"{{"exp":{}}}"#, NOW - 1));
    let boundary = make_token(&format!(r#"{{"exp":{NOW}}}"#));

    assert!(is_token_valid(&live, NOW));
    assert!(!is_token_valid(&expired, NOW));
    assert!(!is_token_valid(&boundary, NOW));
    assert!(!is_token_valid("garbage", NOW));
}

#[test]
fn session_from_valid_token_exposes_claims() {
    let token = make_token(&format!(r#"{{"id":"u-7","exp":{}}}"#, NOW + 3600));
    let session = Session::from_token(&token, NOW);

    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some(token.as_str()));
    assert_eq!(session.user_id(), Some("u-7"));
    assert_eq!(session.expires_at(), Some(NOW + 3600));
    assert!(session.email().is_none());
}

#[test]
fn session_from_expired_token_is_anonymous() {
    let token = make_token(&format!(r#"{{"id":"u-7","exp":{}}}"#, NOW - 10));
    let session = Session::from_token(&token, NOW);

    assert_eq!(session, Session::default());
    assert!(session.user_id().is_none());
}
