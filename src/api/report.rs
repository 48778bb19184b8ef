//! Content report endpoints. Each call is logged on entry and on outcome at
//! debug level.

use serde::Serialize;
use serde_json::Value;

use crate::http::{ApiClient, ApiError, RequestDescriptor};

/// Filter for the report list. Pages start at 0 here, unlike the user and
/// post lists. Times use `yyyy-MM-dd HH:mm:ss`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// 1 post, 2 comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<i32>,
    /// 0 pending, 1 upheld, 2 dismissed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportId {
    pub report_id: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentId {
    pub comment_id: i64,
}

/// Moderator verdict. An upheld report (`status` 1) hides the reported post
/// or deletes the reported comment on the backend.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportVerdict {
    pub report_id: i64,
    pub status: i32,
    pub admin_id: i64,
}

async fn send_logged(
    client: &ApiClient,
    operation: &'static str,
    descriptor: RequestDescriptor,
) -> Result<Value, ApiError> {
    tracing::debug!(operation, query = ?descriptor.query(), "report call");
    let result = client.send(descriptor).await;
    match &result {
        Ok(_) => tracing::debug!(operation, "report call succeeded"),
        Err(error) => tracing::debug!(operation, status = ?error.status(), %error, "report call failed"),
    }
    result
}

pub async fn get_pending_reports(client: &ApiClient, filter: &ReportFilter) -> Result<Value, ApiError> {
    send_logged(client, "get_pending_reports", RequestDescriptor::get("/report/admin/pending").with_query(filter)).await
}

pub async fn filter_reports(client: &ApiClient, filter: &ReportFilter) -> Result<Value, ApiError> {
    send_logged(client, "filter_reports", RequestDescriptor::get("/report/admin/filter").with_query(filter)).await
}

pub async fn get_report_detail(client: &ApiClient, report: ReportId) -> Result<Value, ApiError> {
    send_logged(client, "get_report_detail", RequestDescriptor::get("/report/detail").with_query(&report)).await
}

/// Detail of a reported comment.
pub async fn get_comment_detail(client: &ApiClient, comment: CommentId) -> Result<Value, ApiError> {
    send_logged(client, "get_comment_detail", RequestDescriptor::get("/comment/detail").with_query(&comment)).await
}

/// `POST /report/admin/handle`. The verdict travels in the query string.
pub async fn handle_report(client: &ApiClient, verdict: ReportVerdict) -> Result<Value, ApiError> {
    send_logged(client, "handle_report", RequestDescriptor::post("/report/admin/handle").with_query(&verdict)).await
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
