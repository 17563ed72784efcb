//! Insight attributes: values derived by the service from a login's accounts.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::core::{FlinksClient, FlinksError, Operation, build_path};

const ENDPOINT: &str = "insight/login";

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AttributesBody<'a> {
    attributes: &'a Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a Map<String, Value>>,
}

/// Handle on the `insight/login` endpoints, obtained from [`FlinksClient::attributes`].
#[derive(Debug, Clone, Copy)]
pub struct Attributes<'a> {
    client: &'a FlinksClient,
}

impl<'a> Attributes<'a> {
    pub(crate) fn new(client: &'a FlinksClient) -> Self {
        Self { client }
    }

    /// Computes the requested attributes for an authorized request.
    ///
    /// `attributes` lists the attributes to compute, grouped by level
    /// (e.g. `{"Card": ["Count_Days_Overdrafts"]}`); `filters` optionally
    /// narrows the data they are computed on.
    ///
    /// # Errors
    ///
    /// Returns a [`FlinksError`] if the request fails or the service reports an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, attributes, filters), err))]
    pub async fn get_attributes(
        &self,
        login_id: &str,
        request_id: &str,
        attributes: &Map<String, Value>,
        filters: Option<&Map<String, Value>>,
    ) -> Result<Value, FlinksError> {
        let path = build_path(ENDPOINT, [login_id, "attributes", request_id]);
        let body = AttributesBody {
            attributes,
            filters,
        };
        let op = Operation::post(path).payload(&body)?;
        self.client.execute(op).await
    }
}
