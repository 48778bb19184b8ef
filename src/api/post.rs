//! Post ("moment") moderation endpoints.

use serde::Serialize;
use serde_json::Value;

use super::PageQuery;
use crate::http::{ApiClient, ApiError, RequestDescriptor};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostId {
    pub post_id: i64,
}

/// `status`: 0 visible, 1 blocked.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostStatusUpdate {
    pub post_id: i64,
    pub status: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostIds {
    pub post_ids: Vec<i64>,
}

pub async fn get_post_list(client: &ApiClient, paging: PageQuery) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/post/page").with_query(&paging)).await
}

pub async fn get_post_detail(client: &ApiClient, post: PostId) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/post/detail").with_query(&post)).await
}

pub async fn update_post_status(client: &ApiClient, update: PostStatusUpdate) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/post/updateStatus").with_body(&update)).await
}

pub async fn delete_post(client: &ApiClient, post: PostId) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/post/delete").with_body(&post)).await
}

/// Flip a post between visible and blocked.
pub async fn toggle_post_block(client: &ApiClient, post: PostId) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/post/toggleBlock").with_body(&post)).await
}

pub async fn get_post_statistics(client: &ApiClient) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/post/statistics")).await
}

pub async fn batch_delete_posts(client: &ApiClient, posts: &PostIds) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::post("/admin/post/batchDelete").with_body(posts)).await
}

#[cfg(test)]
#[path = "post_test.rs"]
mod tests;
