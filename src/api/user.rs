//! User administration endpoints.

use serde::Serialize;
use serde_json::Value;

use super::PageQuery;
use crate::http::{ApiClient, ApiError, RequestDescriptor};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: i64,
}

/// `account_status`: 0 active, 1 disabled.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub user_id: i64,
    pub account_status: i32,
}

/// `auth_status`: 0 unverified, 1 verified, 2 pending.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAuthReview {
    pub user_id: i64,
    pub auth_status: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchUserStatusUpdate {
    pub user_ids: Vec<i64>,
    pub account_status: i32,
}

/// Multi-field user search. Text fields match fuzzily on the backend.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_status: Option<i32>,
    #[serde(flatten)]
    pub paging: PageQuery,
}

/// `GET /user/publicProfile`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn get_user_public_profile(client: &ApiClient, query: UserIdQuery) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/user/publicProfile").with_query(&query)).await
}

/// `POST /admin/user/updateStatus`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn update_user_status(client: &ApiClient, update: UserStatusUpdate) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/user/updateStatus").with_body(&update)).await
}

/// `POST /admin/user/verifyAuth`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn verify_user_auth(client: &ApiClient, review: UserAuthReview) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/user/verifyAuth").with_body(&review)).await
}

/// `POST /admin/user/searchUsers`. Criteria travel in the body.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn search_users(client: &ApiClient, search: &UserSearch) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/user/searchUsers").with_body(search)).await
}

/// `GET /admin/user/statistics`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn get_user_statistics(client: &ApiClient) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/user/statistics")).await
}

/// `POST /admin/user/batchUpdateStatus`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn batch_update_user_status(client: &ApiClient, update: &BatchUserStatusUpdate) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/user/batchUpdateStatus").with_body(update)).await
}

/// `GET /admin/user/onlineCount`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn get_online_user_count(client: &ApiClient) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/user/onlineCount")).await
}

/// `GET /admin/user/stats/new-users`: sign-ups over the last 30 days.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn get_new_user_stats(client: &ApiClient) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/user/stats/new-users")).await
}

/// `GET /admin/user/pageUsers`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn page_users(client: &ApiClient, paging: PageQuery) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/user/pageUsers").with_query(&paging)).await
}

/// `GET /admin/user/authDetail`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn get_user_auth_detail(client: &ApiClient, query: UserIdQuery) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/user/authDetail").with_query(&query)).await
}

/// `GET /admin/user/pendingAuth`.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn get_pending_auth_users(client: &ApiClient, paging: PageQuery) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/user/pendingAuth").with_query(&paging)).await
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
