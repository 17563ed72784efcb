use reqwest::header::HeaderMap;
use serde_json::Value;
use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Calls against the API fail in one of two ways: the HTTP exchange itself
/// failed ([`FlinksError::Transport`]), or it completed but the service
/// reported an application error or sent a body that is not JSON
/// ([`FlinksError::Protocol`]). The remaining variants are raised while
/// building a client or a request, before anything is sent.
#[derive(Debug, Error)]
pub enum FlinksError {
    /// The HTTP exchange failed: the service was unreachable, or it answered
    /// with a failure status other than 400.
    #[error("{message}")]
    Transport {
        /// Human readable description of the failure.
        message: String,
        /// The response, when the server answered at all.
        response: Option<Box<RawResponse>>,
        /// The underlying client error for connection-level failures.
        #[source]
        source: Option<reqwest::Error>,
    },

    /// The exchange completed but the body could not be decoded, or the
    /// decoded body carries a `FlinksCode` on a non-2xx status.
    #[error("{message}")]
    Protocol {
        /// The `FlinksCode` reported by the service, or a decode failure message.
        message: String,
        /// The raw response the error was derived from.
        response: Option<Box<RawResponse>>,
        /// The decoded body, when decoding succeeded.
        data: Option<Value>,
    },

    /// A base URL or request path could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A request payload could not be encoded as JSON.
    #[error("Invalid request payload: {0}")]
    Payload(#[source] serde_json::Error),

    /// The client configuration is invalid or incomplete.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// A request could not be assembled locally. Nothing was sent.
    #[error("Failed to build request: {0}")]
    Request(#[source] reqwest::Error),
}

impl FlinksError {
    /// Returns `true` for failures of the HTTP exchange itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, FlinksError::Transport { .. })
    }

    /// Returns `true` for undecodable bodies and `FlinksCode` errors.
    pub fn is_protocol(&self) -> bool {
        matches!(self, FlinksError::Protocol { .. })
    }

    /// The raw response attached to a transport or protocol error.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            FlinksError::Transport { response, .. } | FlinksError::Protocol { response, .. } => {
                response.as_deref()
            }
            _ => None,
        }
    }

    /// The HTTP status of the response attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    /// The decoded body attached to a protocol error.
    pub fn data(&self) -> Option<&Value> {
        match self {
            FlinksError::Protocol { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    /// The `FlinksCode` string of a protocol error, e.g. `INVALID_LOGIN`.
    pub fn flinks_code(&self) -> Option<&str> {
        self.data()?.get(FLINKS_CODE)?.as_str()
    }
}

/// Key under which the service reports application-level error codes.
pub(crate) const FLINKS_CODE: &str = "FlinksCode";

/// A response received from the service, captured before classification.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The final URL of the request.
    pub url: String,
    /// The response headers.
    pub headers: HeaderMap,
    /// The undecoded response body.
    pub body: String,
}
