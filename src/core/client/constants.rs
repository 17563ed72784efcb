//! Centralized defaults for the API endpoint and transport.

/// Sandbox API base (the customer id is appended).
pub(crate) const DEFAULT_BASE_URL: &str = "https://sandbox.flinks.io/v3/";

/// Transport-level retries attempted for each request.
pub(crate) const DEFAULT_MAX_RETRIES: u32 = 3;

/// User-Agent sent unless overridden on the builder.
pub(crate) const USER_AGENT: &str = concat!("flinks-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variables read by `FlinksClientBuilder::from_env`.
pub(crate) const ENV_CUSTOMER_ID: &str = "FLINKS_CUSTOMER_ID";
pub(crate) const ENV_BASE_URL: &str = "FLINKS_BASE_URL";
pub(crate) const ENV_MAX_RETRIES: &str = "FLINKS_MAX_RETRIES";
