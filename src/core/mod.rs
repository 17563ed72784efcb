//! Core components of the `flinks-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`FlinksClient`] and its builder.
//! - The primary [`FlinksError`] type.
//! - The request model ([`Operation`]) and path construction.
//! - Response classification and transport retries.

/// The main client (`FlinksClient`), builder, and configuration.
pub mod client;
/// Date parameters normalized to ISO calendar dates.
pub mod dates;
/// The primary error type (`FlinksError`) for the crate.
pub mod error;
pub(crate) mod net;
/// Relative path construction for entity endpoints.
pub mod path;
/// The request model sent by every operation.
pub mod request;

// convenient re-exports so most code can just `use crate::core::FlinksClient`
pub use client::{ClientConfig, FlinksClient, FlinksClientBuilder, RetryConfig};
pub use dates::DateParam;
pub use error::{FlinksError, RawResponse};
pub use path::build_path;
pub use request::{HttpMethod, Operation};
