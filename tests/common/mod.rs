#![allow(dead_code)]

use flinks_rs::FlinksClient;
use httpmock::MockServer;
use url::Url;

pub const CUSTOMER_ID: &str = "foo-12345";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Client whose base is the mock server root, like a custom `https://<name>.flinks-custom.io` host.
pub fn client_for(server: &MockServer) -> FlinksClient {
    FlinksClient::builder(CUSTOMER_ID)
        .base_url(Url::parse(&server.base_url()).unwrap())
        .max_retries(0)
        .build()
        .unwrap()
}

/// Absolute request path for an operation path under the test customer.
pub fn endpoint(path: &str) -> String {
    format!("/{CUSTOMER_ID}/{path}")
}
