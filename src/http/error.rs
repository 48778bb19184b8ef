//! Failure taxonomy for backend calls.

/// Notice for a 401 response.
pub const UNAUTHORIZED_NOTICE: &str = "Unauthorized, please log in again";
pub const FORBIDDEN_NOTICE: &str = "You do not have permission to access this resource";
pub const NOT_FOUND_NOTICE: &str = "The requested resource does not exist";
pub const SERVER_ERROR_NOTICE: &str = "Server error";
pub const NO_RESPONSE_NOTICE: &str = "Server did not respond, please check your network connection";
/// Last-resort text for a non-2xx status with neither a message nor a reason phrase.
pub const REQUEST_FAILED_FALLBACK: &str = "Request failed";

/// Errors produced by [`super::ApiClient::send`] and the endpoint functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 401. The session has been torn down by the time the caller sees this.
    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("not found")]
    NotFound,

    /// HTTP 500 exactly; other 5xx statuses are [`ApiError::RequestFailed`].
    #[error("server error")]
    ServerError,

    #[error("request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    /// The request was sent but nothing came back (refused, timed out, reset).
    #[error("no response: {0}")]
    NoResponse(String),

    /// The request could not be built or sent locally.
    #[error("request error: {0}")]
    ClientFault(String),

    /// Rejected by an endpoint function before any request was made.
    #[error("{0}")]
    InvalidParams(&'static str),
}

impl ApiError {
    /// The text shown to the user for this failure.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            Self::Unauthorized => UNAUTHORIZED_NOTICE.to_owned(),
            Self::Forbidden => FORBIDDEN_NOTICE.to_owned(),
            Self::NotFound => NOT_FOUND_NOTICE.to_owned(),
            Self::ServerError => SERVER_ERROR_NOTICE.to_owned(),
            Self::RequestFailed { message, .. } => message.clone(),
            Self::NoResponse(_) => NO_RESPONSE_NOTICE.to_owned(),
            Self::ClientFault(description) => format!("Request error: {description}"),
            Self::InvalidParams(message) => (*message).to_owned(),
        }
    }

    /// HTTP status behind this failure, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::ServerError => Some(500),
            Self::RequestFailed { status, .. } => Some(*status),
            Self::NoResponse(_) | Self::ClientFault(_) | Self::InvalidParams(_) => None,
        }
    }
}
