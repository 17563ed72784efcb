//! The `BankingServices` entity: authorization, account data, statements and MFA questions.
//!
//! Operations with only required parameters are plain async methods.
//! Operations with optional parameters return a builder; only the options
//! that are set end up in the request body.

mod model;
pub(crate) mod wire;

pub use model::{DaysOfTransactions, MfaAnswer, NumberOfStatements, RefreshDelta};

use serde_json::{Map, Value};

use crate::core::{DateParam, FlinksClient, FlinksError, Operation, build_path};
use wire::{
    AccountsDetailBody, AnswerMfaBody, AuthorizeBody, AuthorizeMultipleBody, RequestIdBody,
    ScheduledRefreshBody, StatementsBody,
};

const ENDPOINT: &str = "BankingServices";

fn path(segments: &[&str]) -> String {
    build_path(ENDPOINT, segments)
}

/// Handle on the `BankingServices` endpoints, obtained from
/// [`FlinksClient::banking_services`].
#[derive(Debug, Clone, Copy)]
pub struct BankingServices<'a> {
    client: &'a FlinksClient,
}

impl<'a> BankingServices<'a> {
    pub(crate) fn new(client: &'a FlinksClient) -> Self {
        Self { client }
    }

    /// Exchanges credentials (or a stored `LoginId`) for a `RequestId`.
    pub fn authorize(&self) -> AuthorizeBuilder<'a> {
        AuthorizeBuilder {
            client: self.client,
            body: AuthorizeBody::default(),
        }
    }

    /// Authorizes several stored logins at once. An empty list is sent as `[]`.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, login_ids), err))]
    pub async fn authorize_multiple<I, S>(&self, login_ids: I) -> Result<Value, FlinksError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let body = AuthorizeMultipleBody {
            login_ids: login_ids.into_iter().map(Into::into).collect(),
        };
        let op = Operation::post(path(&["AuthorizeMultiple"])).payload(&body)?;
        self.client.execute(op).await
    }

    /// Quick summary of the accounts behind an authorized request.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_accounts_summary(&self, request_id: &str) -> Result<Value, FlinksError> {
        let op = Operation::post(path(&["GetAccountsSummary"])).payload(&RequestIdBody { request_id })?;
        self.client.execute(op).await
    }

    /// Full account details, optionally with identity and transactions.
    pub fn get_accounts_detail(&self, request_id: impl Into<String>) -> AccountsDetailBuilder<'a> {
        AccountsDetailBuilder {
            client: self.client,
            body: AccountsDetailBody {
                request_id: request_id.into(),
                ..Default::default()
            },
        }
    }

    /// Polls an account detail retrieval that is still being processed.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_accounts_detail_async(&self, request_id: &str) -> Result<Value, FlinksError> {
        let op = Operation::get(path(&["GetAccountsDetailAsync", request_id]));
        self.client.execute(op).await
    }

    /// Deletes every trace of a login (credentials and cached data) on the service.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn delete_card(&self, login_id: &str) -> Result<Value, FlinksError> {
        let op = Operation::delete(path(&["DeleteCard", login_id]));
        self.client.execute(op).await
    }

    /// Official PDF statements for the accounts behind an authorized request.
    pub fn get_statements(&self, request_id: impl Into<String>) -> StatementsBuilder<'a> {
        StatementsBuilder {
            client: self.client,
            body: StatementsBody {
                request_id: request_id.into(),
                ..Default::default()
            },
        }
    }

    /// Polls a statements retrieval that is still being processed.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_statements_async(&self, request_id: &str) -> Result<Value, FlinksError> {
        let op = Operation::get(path(&["GetStatementsAsync", request_id]));
        self.client.execute(op).await
    }

    /// Security questions stored for a login.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_mfa_questions(&self, login_id: &str) -> Result<Value, FlinksError> {
        let op = Operation::get(path(&["GetMFAQuestions", login_id]));
        self.client.execute(op).await
    }

    /// Stores answers to security questions for a login.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, questions), err))]
    pub async fn set_mfa_questions(
        &self,
        login_id: &str,
        questions: &[MfaAnswer],
    ) -> Result<Value, FlinksError> {
        let body = AnswerMfaBody {
            login_id,
            questions,
        };
        let op = Operation::patch(path(&["AnswerMFAQuestions"])).payload(&body)?;
        self.client.execute(op).await
    }

    /// Turns nightly background refreshes on or off for a login.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn set_scheduled_refresh(
        &self,
        login_id: &str,
        is_activated: bool,
    ) -> Result<Value, FlinksError> {
        let body = ScheduledRefreshBody {
            login_id,
            is_activated,
        };
        let op = Operation::patch(path(&["SetScheduledRefresh"])).payload(&body)?;
        self.client.execute(op).await
    }
}

/* ----------------------- Authorize ----------------------- */

/// Builder for `BankingServices/Authorize`.
#[derive(Debug, Clone)]
pub struct AuthorizeBuilder<'a> {
    client: &'a FlinksClient,
    body: AuthorizeBody,
}

impl AuthorizeBuilder<'_> {
    /// Serve cached data instead of connecting to the institution. Always sent; default `false`.
    pub fn most_recent_cached(mut self, yes: bool) -> Self {
        self.body.most_recent_cached = yes;
        self
    }

    /// Continue an existing request, typically to answer an MFA challenge.
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.body.request_id = Some(id.into());
        self
    }

    /// Authorize with stored credentials.
    pub fn login_id(mut self, id: impl Into<String>) -> Self {
        self.body.login_id = Some(id.into());
        self
    }

    pub fn institution(mut self, name: impl Into<String>) -> Self {
        self.body.institution = Some(name.into());
        self
    }

    /// Online banking username and password. Sent only when both are non-empty.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        let (username, password) = (username.into(), password.into());
        if username.is_empty() || password.is_empty() {
            self.body.username = None;
            self.body.password = None;
        } else {
            self.body.username = Some(username);
            self.body.password = Some(password);
        }
        self
    }

    /// Whether the service keeps the credentials after this request.
    pub fn save(mut self, yes: bool) -> Self {
        self.body.save = Some(yes);
        self
    }

    /// Answer to a security question. The answer is usually a string or a list of strings.
    pub fn security_response(mut self, question: impl Into<String>, answer: impl Into<Value>) -> Self {
        self.body
            .security_responses
            .get_or_insert_with(Map::new)
            .insert(question.into(), answer.into());
        self
    }

    /// Replace all security responses at once.
    pub fn security_responses(mut self, responses: Map<String, Value>) -> Self {
        self.body.security_responses = Some(responses);
        self
    }

    /// Enroll the login in nightly background refreshes.
    pub fn schedule_refresh(mut self, yes: bool) -> Self {
        self.body.schedule_refresh = Some(yes);
        self
    }

    /// Custom value associated with the generated `RequestId`.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.body.tag = Some(tag.into());
        self
    }

    /// Sends the authorization request.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an
    /// error (for instance `INVALID_LOGIN` or a pending MFA challenge).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn send(self) -> Result<Value, FlinksError> {
        let op = Operation::post(path(&["Authorize"])).payload(&self.body)?;
        self.client.execute(op).await
    }
}

/* ----------------------- GetAccountsDetail ----------------------- */

/// Builder for `BankingServices/GetAccountsDetail`.
#[derive(Debug, Clone)]
pub struct AccountsDetailBuilder<'a> {
    client: &'a FlinksClient,
    body: AccountsDetailBody,
}

impl AccountsDetailBuilder<'_> {
    /// Include holder identity (name, address, ...). Always sent; default `false`.
    pub fn with_account_identity(mut self, yes: bool) -> Self {
        self.body.with_account_identity = yes;
        self
    }

    /// Include transactions. Always sent; default `false`.
    pub fn with_transactions(mut self, yes: bool) -> Self {
        self.body.with_transactions = yes;
        self
    }

    pub fn days_of_transactions(mut self, days: DaysOfTransactions) -> Self {
        self.body.days_of_transactions = Some(days);
        self
    }

    /// Start of the transaction range. Date-times are truncated to their date.
    pub fn date_from(mut self, date: impl Into<DateParam>) -> Self {
        self.body.date_from = Some(date.into());
        self
    }

    /// End of the transaction range. Date-times are truncated to their date.
    pub fn date_to(mut self, date: impl Into<DateParam>) -> Self {
        self.body.date_to = Some(date.into());
        self
    }

    /// Only return transactions newer than the given ones. Omitted when empty.
    pub fn refresh_delta(mut self, deltas: impl IntoIterator<Item = RefreshDelta>) -> Self {
        self.body.refresh_delta = deltas.into_iter().collect();
        self
    }

    /// Restrict the response to these account ids. Omitted when empty.
    pub fn accounts_filter<I, S>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.accounts_filter = accounts.into_iter().map(Into::into).collect();
        self
    }

    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(request_id = %self.body.request_id)))]
    pub async fn send(self) -> Result<Value, FlinksError> {
        let op = Operation::post(path(&["GetAccountsDetail"])).payload(&self.body)?;
        self.client.execute(op).await
    }
}

/* ----------------------- GetStatements ----------------------- */

/// Builder for `BankingServices/GetStatements`.
#[derive(Debug, Clone)]
pub struct StatementsBuilder<'a> {
    client: &'a FlinksClient,
    body: StatementsBody,
}

impl StatementsBuilder<'_> {
    pub fn number_of_statements(mut self, n: NumberOfStatements) -> Self {
        self.body.number_of_statements = Some(n);
        self
    }

    /// Restrict the response to these account ids. Omitted when empty.
    pub fn accounts_filter<I, S>(mut self, accounts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.accounts_filter = accounts.into_iter().map(Into::into).collect();
        self
    }

    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(request_id = %self.body.request_id)))]
    pub async fn send(self) -> Result<Value, FlinksError> {
        let op = Operation::post(path(&["GetStatements"])).payload(&self.body)?;
        self.client.execute(op).await
    }
}
