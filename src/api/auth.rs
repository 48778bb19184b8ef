//! Administrator login, captcha and password-reset endpoints.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use serde::Serialize;
use serde_json::Value;

use super::defaults::{self, RESET_PASSWORD};
use crate::http::{ApiClient, ApiError, RequestDescriptor};
use crate::session::{StoreError, TOKEN_KEY};

pub const INCOMPLETE_CAPTCHA: &str = "captcha parameters are incomplete";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password_hash: String,
}

/// Captcha answer as entered on the login form.
#[derive(Debug, Clone, Default)]
pub struct CaptchaAnswer {
    pub captcha_id: String,
    pub captcha_code: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CaptchaVerifyBody<'a> {
    captcha_id: &'a str,
    code: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmailCodeRequest {
    pub email: String,
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub code: String,
    pub new_password: String,
    /// Defaults to `true` when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("login response did not include a token")]
    MissingToken,

    #[error("failed to store credential: {0}")]
    Store(#[from] StoreError),
}

/// `POST /admin/login`. Returns the raw payload, which carries the token.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn admin_login(client: &ApiClient, request: &LoginRequest) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/login").with_body(request)).await
}

/// Log in and store the issued credential in the client's session.
///
/// # Errors
///
/// Fails if the call fails, the payload has no token, or the token cannot be stored.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<String, LoginError> {
    let payload = admin_login(client, request).await?;
    let token = extract_token(&payload).ok_or(LoginError::MissingToken)?;
    client.session().set_token(&token)?;
    tracing::info!(email = %request.email, "administrator logged in");
    Ok(token)
}

/// Drop the local credential. The backend keeps no session to end.
///
/// # Errors
///
/// Returns the store's error if the removal cannot be persisted.
pub fn logout(client: &ApiClient) -> Result<(), StoreError> {
    client.session().clear()?;
    tracing::info!("administrator logged out");
    Ok(())
}

/// Token from a login payload: `{token}`, `{data: {token}}` or a bare string.
#[must_use]
pub fn extract_token(payload: &Value) -> Option<String> {
    let token = match payload {
        Value::String(token) => Some(token.as_str()),
        Value::Object(fields) => fields
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .or_else(|| fields.get("data").and_then(|data| data.get(TOKEN_KEY)).and_then(Value::as_str)),
        _ => None,
    };
    token.filter(|token| !token.is_empty()).map(str::to_owned)
}

/// `GET /captcha/generate`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn generate_captcha(client: &ApiClient) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/captcha/generate")).await
}

/// `POST /captcha/verify`. Rejects before sending when either field is empty.
///
/// # Errors
///
/// Returns [`ApiError::InvalidParams`] for an incomplete answer, otherwise the
/// classified failure from the client.
pub async fn verify_captcha(client: &ApiClient, answer: &CaptchaAnswer) -> Result<Value, ApiError> {
    if answer.captcha_id.is_empty() || answer.captcha_code.is_empty() {
        return Err(ApiError::InvalidParams(INCOMPLETE_CAPTCHA));
    }
    let body = CaptchaVerifyBody { captcha_id: &answer.captcha_id, code: &answer.captcha_code };
    client.send(RequestDescriptor::post("/captcha/verify").with_body(&body)).await
}

/// `POST /password/forgot`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn request_password_reset(client: &ApiClient, request: &EmailRequest) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/password/forgot").with_body(request)).await
}

/// `POST /password/verify`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn verify_email_code(client: &ApiClient, request: &EmailCodeRequest) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/password/verify").with_body(request)).await
}

/// `POST /password/reset`, with `isAdmin` defaulted.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn reset_password(client: &ApiClient, request: &ResetPasswordRequest) -> Result<Value, ApiError> {
    let mut descriptor = RequestDescriptor::post("/password/reset").with_body(request);
    defaults::apply_defaults(RESET_PASSWORD, &mut descriptor);
    client.send(descriptor).await
}
