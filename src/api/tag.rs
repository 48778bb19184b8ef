//! Tag management endpoints.

use serde::Serialize;
use serde_json::Value;

use super::defaults::{self, CREATE_SYSTEM_TAG};
use crate::http::{ApiClient, ApiError, RequestDescriptor};

#[derive(Debug, Clone, Serialize)]
pub struct NewTag {
    pub name: String,
    /// 0 for a system tag; defaulted when unset.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagSearch {
    pub name: String,
}

pub async fn get_all_tags(client: &ApiClient) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/tag/all")).await
}

pub async fn create_system_tag(client: &ApiClient, tag: &NewTag) -> Result<Value, ApiError> {
    let mut descriptor = RequestDescriptor::post("/tag/create").with_body(tag);
    defaults::apply_defaults(CREATE_SYSTEM_TAG, &mut descriptor);
    client.send(descriptor).await
}

pub async fn search_tags(client: &ApiClient, search: &TagSearch) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/tag/search").with_query(search)).await
}

pub async fn delete_tag(client: &ApiClient, tag_id: i64) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::delete(format!("/tag/delete/{tag_id}"))).await
}

pub async fn get_tag_statistics(client: &ApiClient) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/tag/statistics")).await
}

#[cfg(test)]
#[path = "tag_test.rs"]
mod tests;
