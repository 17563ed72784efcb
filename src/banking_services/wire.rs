//! Request bodies for the `BankingServices` endpoints. Keys are the API's PascalCase names.

use serde::Serialize;
use serde_json::{Map, Value};

use super::model::{DaysOfTransactions, MfaAnswer, NumberOfStatements, RefreshDelta};
use crate::core::DateParam;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthorizeBody {
    pub(crate) most_recent_cached: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) login_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) security_responses: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schedule_refresh: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tag: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthorizeMultipleBody {
    pub(crate) login_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct RequestIdBody<'a> {
    pub(crate) request_id: &'a str,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AccountsDetailBody {
    pub(crate) request_id: String,
    pub(crate) with_account_identity: bool,
    pub(crate) with_transactions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) days_of_transactions: Option<DaysOfTransactions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) date_from: Option<DateParam>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) date_to: Option<DateParam>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) refresh_delta: Vec<RefreshDelta>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) accounts_filter: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct StatementsBody {
    pub(crate) request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) number_of_statements: Option<NumberOfStatements>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) accounts_filter: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AnswerMfaBody<'a> {
    pub(crate) login_id: &'a str,
    pub(crate) questions: &'a [MfaAnswer],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ScheduledRefreshBody<'a> {
    pub(crate) login_id: &'a str,
    pub(crate) is_activated: bool,
}
