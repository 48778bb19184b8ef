//! Admin console client for the moments platform.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every backend call goes through [`http::ApiClient`], which injects the
//! session credential, unwraps successful payloads and turns failures into
//! one user-facing notice. [`router::RouteGuard`] gates console views on the
//! same [`session::SessionContext`]. The [`api`] modules are thin endpoint
//! declarations on top of the client.

pub mod api;
pub mod config;
pub mod http;
pub mod navigate;
pub mod notify;
pub mod router;
pub mod session;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ClientConfig;
pub use http::{ApiClient, ApiError, RequestDescriptor};
pub use router::{GuardDecision, RouteGuard, RouteMeta};
pub use session::SessionContext;
