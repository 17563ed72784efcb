//! Public client surface + builder.
//! Internals are split into `retry` (transport retries) and `constants` (defaults).

mod constants;
mod retry;

pub use retry::RetryConfig;

use crate::attributes::Attributes;
use crate::banking_services::BankingServices;
use crate::core::{FlinksError, Operation, net};
use constants::{DEFAULT_BASE_URL, ENV_BASE_URL, ENV_CUSTOMER_ID, ENV_MAX_RETRIES, USER_AGENT};
use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Settings a [`FlinksClient`] was built with. Immutable once the client exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Customer identifier, used as the first path segment of every request.
    pub customer_id: String,
    /// API base, e.g. `https://sandbox.flinks.io/v3/`.
    pub base_url: Url,
    /// Transport-level retries per request.
    pub max_retries: u32,
}

/// Client for the Flinks API.
///
/// Holds a pooled HTTP client and the customer endpoint. Cloning is cheap and
/// clones share the connection pool. Entity operations are reached through
/// [`banking_services`](Self::banking_services) and [`attributes`](Self::attributes);
/// [`execute`](Self::execute) sends an arbitrary [`Operation`].
#[derive(Debug, Clone)]
pub struct FlinksClient {
    http: Client,
    config: ClientConfig,
    api_endpoint: Url,
    retry: RetryConfig,
}

impl FlinksClient {
    /// Create a client for `customer_id` against the sandbox with default settings.
    ///
    /// # Errors
    ///
    /// Fails if the customer id is empty or the HTTP client cannot be built.
    pub fn new(customer_id: impl Into<String>) -> Result<Self, FlinksError> {
        Self::builder(customer_id).build()
    }

    /// Create a new builder.
    pub fn builder(customer_id: impl Into<String>) -> FlinksClientBuilder {
        FlinksClientBuilder::new(customer_id)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The customer endpoint every request path is resolved against,
    /// e.g. `https://sandbox.flinks.io/v3/<customer id>/`.
    pub fn api_endpoint(&self) -> &Url {
        &self.api_endpoint
    }

    /// Banking services: authorization, accounts, statements and MFA questions.
    pub fn banking_services(&self) -> BankingServices<'_> {
        BankingServices::new(self)
    }

    /// Insight attributes computed for a login.
    pub fn attributes(&self) -> Attributes<'_> {
        Attributes::new(self)
    }

    /// Send one operation and classify the outcome.
    ///
    /// Returns the decoded JSON body on success, whatever its shape.
    ///
    /// # Errors
    ///
    /// - [`FlinksError::Transport`] if the service cannot be reached or answers
    ///   with a failure status other than 400.
    /// - [`FlinksError::Protocol`] if the body is not JSON, or if a non-2xx
    ///   body carries a `FlinksCode`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, op), err, fields(method = %op.method, path = %op.path))
    )]
    pub async fn execute(&self, op: Operation) -> Result<Value, FlinksError> {
        let url = self.api_endpoint.join(&op.path)?;

        let mut req = self
            .http
            .request(op.method.into(), url.clone())
            .header(CACHE_CONTROL, HeaderValue::from_static("no-cache"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !op.query.is_empty() {
            req = req.query(&op.query);
        }
        if let Some(payload) = &op.payload {
            req = req.json(payload);
        }
        let request = req.build().map_err(FlinksError::Request)?;

        let resp = self
            .send_with_retry(request)
            .await
            .map_err(|e| transport_error(&url, e))?;
        let raw = net::read_response(resp)
            .await
            .map_err(|e| transport_error(&url, e))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = raw.status, "response received");

        net::classify(raw)
    }
}

fn transport_error(url: &Url, e: reqwest::Error) -> FlinksError {
    FlinksError::Transport {
        message: format!("Unable to complete request to {url}: {e}"),
        response: None,
        source: Some(e),
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Debug, Clone)]
pub struct FlinksClientBuilder {
    customer_id: String,
    base_url: Option<Url>,
    retry: Option<RetryConfig>,
    max_retries: Option<u32>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl FlinksClientBuilder {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            base_url: None,
            retry: None,
            max_retries: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
        }
    }

    /// Start from environment variables.
    ///
    /// `FLINKS_CUSTOMER_ID` is required; `FLINKS_BASE_URL` and
    /// `FLINKS_MAX_RETRIES` are applied when set.
    ///
    /// # Errors
    ///
    /// Fails if the customer id is missing or an optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, FlinksError> {
        let customer_id = std::env::var(ENV_CUSTOMER_ID)
            .map_err(|_| FlinksError::Config(format!("{ENV_CUSTOMER_ID} is not set")))?;
        let mut builder = Self::new(customer_id);

        if let Ok(base) = std::env::var(ENV_BASE_URL) {
            builder = builder.base_url(Url::parse(&base)?);
        }
        if let Ok(raw) = std::env::var(ENV_MAX_RETRIES) {
            let n = raw.trim().parse::<u32>().map_err(|e| {
                FlinksError::Config(format!("{ENV_MAX_RETRIES}={raw:?} is not a valid count: {e}"))
            })?;
            builder = builder.max_retries(n);
        }
        Ok(builder)
    }

    /// Override the API base (default `https://sandbox.flinks.io/v3/`).
    ///
    /// The customer id is resolved against this URL like a relative link, so
    /// a base without a trailing slash loses its last path segment.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Number of transport-level retries per request. Default: 3.
    pub fn max_retries(mut self, n: u32) -> Self {
        self.max_retries = Some(n);
        self
    }

    /// Replace the whole retry configuration. `max_retries`, if also set, wins.
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<FlinksClient, FlinksError> {
        if self.customer_id.trim().is_empty() {
            return Err(FlinksError::Config("customer id must not be empty".into()));
        }

        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };
        let api_endpoint = api_endpoint(&base_url, &self.customer_id)?;

        let mut retry = self.retry.unwrap_or_default();
        if let Some(n) = self.max_retries {
            retry.max_retries = n;
        }

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        let http = httpb.build().map_err(FlinksError::Client)?;

        Ok(FlinksClient {
            http,
            config: ClientConfig {
                customer_id: self.customer_id,
                base_url,
                max_retries: retry.max_retries,
            },
            api_endpoint,
            retry,
        })
    }
}

/// `base` joined with `customer_id`, with a trailing slash so operation paths
/// resolve beneath it.
fn api_endpoint(base: &Url, customer_id: &str) -> Result<Url, FlinksError> {
    Ok(base.join(&format!("{customer_id}/"))?)
}
