//! Authorize against the Flinks sandbox and print account details.
//!
//! Run with `FLINKS_CUSTOMER_ID=<id> cargo run --example authorize_and_fetch`.
//! Add `--features tracing-subscriber` and `RUST_LOG=flinks_rs=debug` to see request logs.

use std::time::Duration;

use chrono::{Duration as Days, Utc};
use flinks_rs::{DaysOfTransactions, FlinksClientBuilder, FlinksError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build a client from the environment with a 30-second timeout.
    let client = FlinksClientBuilder::from_env()?
        .timeout(Duration::from_secs(30))
        .build()?;
    println!("Using endpoint {}", client.api_endpoint());

    // 2. Exchange sandbox credentials for a RequestId.
    let banking = client.banking_services();
    let auth = match banking
        .authorize()
        .institution("FlinksCapital")
        .credentials("Greatday", "Everyday")
        .save(true)
        .most_recent_cached(false)
        .send()
        .await
    {
        Ok(body) => body,
        Err(e @ FlinksError::Protocol { .. }) => {
            // e.g. SECURITYRESPONSES_REQUIRED or INVALID_LOGIN
            eprintln!("Authorization refused: {e} ({:?})", e.data());
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    let request_id = auth["RequestId"]
        .as_str()
        .ok_or("authorize response has no RequestId")?
        .to_string();
    println!("RequestId: {request_id}");

    // 3. Fetch the last 30 days of transactions.
    let today = Utc::now();
    let detail = banking
        .get_accounts_detail(&request_id)
        .with_transactions(true)
        .days_of_transactions(DaysOfTransactions::Days90)
        .date_from(today - Days::days(30))
        .date_to(today)
        .send()
        .await?;

    for account in detail["Accounts"].as_array().into_iter().flatten() {
        println!(
            "  {} ({}): {} transactions",
            account["Title"].as_str().unwrap_or("?"),
            account["AccountNumber"].as_str().unwrap_or("?"),
            account["Transactions"].as_array().map_or(0, Vec::len)
        );
    }

    Ok(())
}
