use std::fmt;

use serde::Deserialize;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Opaque failure reported by an [`HttpTransport`](crate::transport::HttpTransport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure a [`Client`](crate::Client) call can return.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("base url error: {0}")]
    BaseUrl(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(#[source] TransportError),

    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The classified HTTP error, if this error carries one.
    ///
    /// Ineligible field sets are reported as a bad request, so they are
    /// returned here as well.
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            Error::Http(err) => Some(err),
            Error::Validation(ValidationError::IneligibleFields(err)) => Some(err),
            _ => None,
        }
    }
}

/// Raised while constructing a client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid api key provided")]
    InvalidApiKey,

    #[error("invalid base URL provided")]
    InvalidBaseUrl,
}

/// Raised before any request leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid latitude provided")]
    InvalidLatitude,

    #[error("invalid longitude provided")]
    InvalidLongitude,

    #[error("start time must be before end time")]
    InvalidTimeRange,

    #[error(transparent)]
    IneligibleFields(HttpError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpErrorKind {
    Generic,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    TooManyRequests,
    InternalServerError,
}

impl HttpErrorKind {
    /// Kind for a non-200 status code. Statuses without a dedicated kind map to `Generic`.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => HttpErrorKind::BadRequest,
            401 => HttpErrorKind::Unauthorized,
            403 => HttpErrorKind::Forbidden,
            404 => HttpErrorKind::NotFound,
            429 => HttpErrorKind::TooManyRequests,
            500 => HttpErrorKind::InternalServerError,
            _ => HttpErrorKind::Generic,
        }
    }

    pub const fn phrase(&self) -> &'static str {
        match self {
            HttpErrorKind::Generic => "error",
            HttpErrorKind::BadRequest => "bad request",
            HttpErrorKind::Unauthorized => "unauthorized",
            HttpErrorKind::Forbidden => "forbidden",
            HttpErrorKind::NotFound => "not found error",
            HttpErrorKind::TooManyRequests => "too many requests",
            HttpErrorKind::InternalServerError => "internal server error",
        }
    }
}

/// An error response from the API, tagged with the endpoint that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub kind: HttpErrorKind,
    pub endpoint: String,
    pub message: String,
}

impl HttpError {
    pub fn new(
        kind: HttpErrorKind,
        endpoint: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(HttpErrorKind::BadRequest, endpoint, message)
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.kind.phrase(), self.endpoint, self.message)
    }
}

impl std::error::Error for HttpError {}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// Turn a response status and body into a typed error.
///
/// `200` is the only success status; its body is left for the caller to decode.
/// Any other status requires a `{"message": ...}` body, and a body that is not
/// valid JSON is reported as [`Error::Decode`].
pub fn check_http_error(status: u16, body: &[u8], endpoint: &str) -> Result<()> {
    if status == 200 {
        return Ok(());
    }

    let parsed: ErrorBody = serde_json::from_slice(body).map_err(|source| Error::Decode {
        endpoint: endpoint.to_string(),
        source,
    })?;

    let kind = HttpErrorKind::from_status(status);
    tracing::warn!(status, endpoint, kind = kind.phrase(), "request rejected by api");

    Err(HttpError::new(kind, endpoint, parsed.message).into())
}
