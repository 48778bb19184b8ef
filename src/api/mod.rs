//! Endpoint declarations for the admin backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! One async function per backend operation. Each builds a
//! [`RequestDescriptor`](crate::http::RequestDescriptor) and hands it to
//! [`ApiClient::send`](crate::http::ApiClient::send); auth, timeouts and
//! failure reporting all live in the client. Parameter structs serialize in
//! camelCase and skip unset optional fields.

pub mod audit;
pub mod auth;
pub mod defaults;
pub mod post;
pub mod report;
pub mod tag;
pub mod user;

use serde::Serialize;

/// Paging parameters. The backend applies its own defaults when unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl PageQuery {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self { page: Some(page), size: Some(size) }
    }
}
