//! Transport-level retries.
//!
//! Only failures where no response was received are retried. Responses with
//! a failure status are never retried here; they are classified and returned
//! to the caller.

use std::error::Error as StdError;
use std::io;

use reqwest::{Method, Request, Response};

use super::constants::DEFAULT_MAX_RETRIES;

/// Configuration for the automatic transport retry mechanism.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryConfig {
    /// The maximum number of retries to attempt. The total number of attempts will be `max_retries + 1`.
    pub max_retries: u32,
    /// Whether to retry when the connection could not be established. Applies to every method.
    pub retry_on_connect: bool,
    /// Whether to retry on request timeouts. Applies to idempotent methods only.
    pub retry_on_timeout: bool,
    /// Whether to retry when the connection was reset or closed after the
    /// request went out. Applies to idempotent methods only.
    pub retry_on_reset: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            retry_on_connect: true,
            retry_on_timeout: true,
            retry_on_reset: true,
        }
    }
}

impl RetryConfig {
    /// A configuration that never retries.
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    pub(crate) fn should_retry(&self, err: &reqwest::Error, method: &Method) -> bool {
        if err.is_connect() {
            return self.retry_on_connect;
        }
        if err.is_timeout() {
            return self.retry_on_timeout && is_idempotent(method);
        }
        if err.is_request() || is_connection_reset(err) {
            return self.retry_on_reset && is_idempotent(method);
        }
        false
    }
}

/// Whether any error in the `source` chain is an I/O error for a connection
/// the peer dropped mid-exchange.
fn is_connection_reset(err: &(dyn StdError + 'static)) -> bool {
    let mut cur = Some(err);
    while let Some(e) = cur {
        if let Some(io) = e.downcast_ref::<io::Error>()
            && matches!(
                io.kind(),
                io::ErrorKind::ConnectionReset
                    | io::ErrorKind::ConnectionAborted
                    | io::ErrorKind::BrokenPipe
                    | io::ErrorKind::UnexpectedEof
            )
        {
            return true;
        }
        cur = e.source();
    }
    false
}

fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS | Method::TRACE
    )
}

impl super::FlinksClient {
    /// Send `request`, retrying transport failures according to the client's [`RetryConfig`].
    pub(crate) async fn send_with_retry(&self, request: Request) -> Result<Response, reqwest::Error> {
        let method = request.method().clone();
        let mut attempt = 0u32;
        loop {
            // Bodies built from JSON are buffered and always clonable.
            let Some(next) = request.try_clone() else {
                return self.http.execute(request).await;
            };
            match self.http.execute(next).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < self.retry.max_retries && self.retry.should_retry(&e, &method) => {
                    attempt += 1;
                    #[cfg(feature = "tracing")]
                    tracing::warn!(attempt, max = self.retry.max_retries, error = %e, "retrying after transport failure");
                }
                Err(e) => return Err(e),
            }
        }
    }
}
