use serde::Serialize;

/// How much transaction history `GetAccountsDetail` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DaysOfTransactions {
    Days90,
    Days365,
}

/// How many statements `GetStatements` returns per account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NumberOfStatements {
    MostRecent,
    Months3,
    Months12,
}

/// The last transaction already known for an account.
///
/// Passed to `GetAccountsDetail` so only newer transactions are returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefreshDelta {
    pub account_id: String,
    pub transaction_id: String,
}

impl RefreshDelta {
    pub fn new(account_id: impl Into<String>, transaction_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            transaction_id: transaction_id.into(),
        }
    }
}

/// A security question and the answer to store for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MfaAnswer {
    pub question: String,
    pub answer: String,
}

impl MfaAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}
