//! Named error codes and their HTTP status.

use http::StatusCode;

/// Protocol-agnostic error code that maps to an HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// 400 Bad Request
    InvalidInput,
    /// 401 Unauthorized
    Unauthenticated,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 409 Conflict
    Conflict,
    /// 422 Unprocessable Entity
    FailedPrecondition,
    /// 429 Too Many Requests
    RateLimited,
    /// 500 Internal Server Error
    Internal,
    /// 501 Not Implemented
    NotImplemented,
    /// 503 Service Unavailable
    Unavailable,
}

impl ErrorCode {
    /// Convert to HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::FailedPrecondition => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Infer an error code from a variant name.
    ///
    /// Rules are tried in order against the lowercased name; the first one with
    /// a matching fragment wins, anything else is [`ErrorCode::Internal`].
    pub fn infer_from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        NAME_RULES
            .iter()
            .find(|(fragments, _)| fragments.iter().any(|fragment| name.contains(fragment)))
            .map_or(ErrorCode::Internal, |&(_, code)| code)
    }
}

/// Name fragments and the code they imply, most specific first.
const NAME_RULES: &[(&[&str], ErrorCode)] = &[
    (&["notfound", "not_found", "missing"], ErrorCode::NotFound),
    (&["invalid", "validation", "parse"], ErrorCode::InvalidInput),
    (&["unauthorized", "unauthenticated"], ErrorCode::Unauthenticated),
    (&["forbidden", "permission", "denied"], ErrorCode::Forbidden),
    (&["conflict", "exists", "duplicate"], ErrorCode::Conflict),
    (&["ratelimit", "rate_limit", "throttle"], ErrorCode::RateLimited),
    (&["unavailable", "temporarily"], ErrorCode::Unavailable),
    (&["unimplemented", "not_implemented"], ErrorCode::NotImplemented),
];

impl From<ErrorCode> for StatusCode {
    fn from(code: ErrorCode) -> Self {
        code.status()
    }
}
