//! flinks-rs: ergonomic client for the Flinks.io financial data API.
//!
//! Every call goes through [`FlinksClient::execute`], which sends one JSON
//! request and classifies the outcome:
//!
//! - success: the decoded body, as a [`serde_json::Value`] of any shape;
//! - [`FlinksError::Transport`]: the service could not be reached, or answered
//!   with a failure status other than 400;
//! - [`FlinksError::Protocol`]: the body was not JSON, or a non-2xx body
//!   carried a `FlinksCode` (e.g. `INVALID_LOGIN` on a 400).
//!
//! ```no_run
//! # async fn run() -> Result<(), flinks_rs::FlinksError> {
//! let client = flinks_rs::FlinksClient::new("your-customer-id")?;
//! let auth = client
//!     .banking_services()
//!     .authorize()
//!     .institution("FlinksCapital")
//!     .credentials("Greatday", "Everyday")
//!     .save(true)
//!     .send()
//!     .await?;
//! println!("{auth}");
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod banking_services;
pub mod core;

pub use attributes::Attributes;
pub use banking_services::{
    AccountsDetailBuilder, AuthorizeBuilder, BankingServices, DaysOfTransactions, MfaAnswer,
    NumberOfStatements, RefreshDelta, StatementsBuilder,
};
pub use crate::core::{
    ClientConfig, DateParam, FlinksClient, FlinksClientBuilder, FlinksError, HttpMethod,
    Operation, RawResponse, RetryConfig,
};
