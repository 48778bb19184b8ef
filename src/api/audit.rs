//! Audit log endpoint.

use serde_json::Value;

use super::PageQuery;
use crate::http::{ApiClient, ApiError, RequestDescriptor};

/// `GET /admin/audit-logs`, newest first.
///
/// # Errors
///
/// Returns the classified failure from the client.
pub async fn get_audit_logs(client: &ApiClient, paging: PageQuery) -> Result<Value, ApiError> {
    client.send(RequestDescriptor::get("/admin/audit-logs").with_query(&paging)).await
}

#[cfg(test)]
#[path = "audit_test.rs"]
mod tests;
