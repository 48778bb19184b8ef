use super::*;
use crate::test_support::{MockBackend, TestClient};
use serde_json::json;

fn login_request() -> LoginRequest {
    LoginRequest { email: "admin@example.test".into(), password_hash: "hash".into() }
}

#[test]
fn extract_token_accepts_known_shapes() {
    assert_eq!(extract_token(&json!({ "token": "t1" })).as_deref(), Some("t1"));
    assert_eq!(extract_token(&json!({ "data": { "token": "t2" } })).as_deref(), Some("t2"));
    assert_eq!(extract_token(&json!("t3")).as_deref(), Some("t3"));
    assert_eq!(extract_token(&json!({ "token": "" })), None);
    assert_eq!(extract_token(&json!({ "user": 1 })), None);
}

#[tokio::test]
async fn login_stores_issued_token() {
    let backend = MockBackend::start(200, r#"{"token":"fresh-token"}"#).await;
    let t = TestClient::new(&backend.base_url, None);

    let token = login(&t.client, &login_request()).await.unwrap();

    assert_eq!(token, "fresh-token");
    assert_eq!(t.session.token().as_deref(), Some("fresh-token"));
    let req = backend.single_request();
    assert_eq!(req.path, "/admin/login");
    assert_eq!(req.body, Some(json!({ "email": "admin@example.test", "passwordHash": "hash" })));
    assert_eq!(req.token, None);
}

#[tokio::test]
async fn login_without_token_in_payload_fails() {
    let backend = MockBackend::start(200, r#"{"ok":true}"#).await;
    let t = TestClient::new(&backend.base_url, None);

    let err = login(&t.client, &login_request()).await.unwrap_err();

    assert!(matches!(err, LoginError::MissingToken));
    assert!(!t.session.is_authenticated());
}

#[test]
fn logout_clears_session() {
    let t = TestClient::new("http://127.0.0.1:1", Some("abc123"));
    logout(&t.client).unwrap();
    assert!(!t.session.is_authenticated());
}

#[tokio::test]
async fn incomplete_captcha_is_rejected_without_request_or_notice() {
    let backend = MockBackend::start(200, "{}").await;
    let t = TestClient::new(&backend.base_url, None);

    let answer = CaptchaAnswer { captcha_id: "c1".into(), captcha_code: String::new() };
    let err = verify_captcha(&t.client, &answer).await.unwrap_err();

    assert_eq!(err, ApiError::InvalidParams(INCOMPLETE_CAPTCHA));
    assert!(backend.requests().is_empty());
    assert!(t.sink.notices().is_empty());
}

#[tokio::test]
async fn captcha_code_is_sent_as_code() {
    let backend = MockBackend::start(200, "true").await;
    let t = TestClient::new(&backend.base_url, None);

    let answer = CaptchaAnswer { captcha_id: "c1".into(), captcha_code: "x7k2".into() };
    verify_captcha(&t.client, &answer).await.unwrap();

    assert_eq!(backend.single_request().body, Some(json!({ "captchaId": "c1", "code": "x7k2" })));
}

#[tokio::test]
async fn reset_password_defaults_is_admin() {
    let backend = MockBackend::start(200, "{}").await;
    let t = TestClient::new(&backend.base_url, None);

    let request = ResetPasswordRequest {
        email: "a@b.c".into(),
        code: "123456".into(),
        new_password: "n3w".into(),
        is_admin: None,
    };
    reset_password(&t.client, &request).await.unwrap();
    reset_password(&t.client, &ResetPasswordRequest { is_admin: Some(false), ..request }).await.unwrap();

    let requests = backend.requests();
    assert_eq!(
        requests[0].body,
        Some(json!({ "email": "a@b.c", "code": "123456", "newPassword": "n3w", "isAdmin": true }))
    );
    assert_eq!(requests[1].body.as_ref().and_then(|b| b.get("isAdmin")), Some(&json!(false)));
}
