use httpmock::Method::POST;
use serde_json::json;

use crate::common::{client_for, endpoint, setup_server};

#[tokio::test]
async fn authorize_sends_only_the_options_that_were_set() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/Authorize"))
            .header("cache-control", "no-cache")
            .header("content-type", "application/json")
            .json_body(json!({
                "Institution": "Test",
                "MostRecentCached": false,
                "Username": "foo",
                "Password": "bar",
                "Save": true,
                "Tag": "42",
            }));
        then.status(200)
            .json_body(json!({"RequestId": "test-1234", "LoginId": "test-5678"}));
    });

    let client = client_for(&server);
    let resp = client
        .banking_services()
        .authorize()
        .institution("Test")
        .credentials("foo", "bar")
        .save(true)
        .most_recent_cached(false)
        .tag("42")
        .send()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp["RequestId"], "test-1234");
    assert_eq!(resp["LoginId"], "test-5678");
}

#[tokio::test]
async fn authorize_with_security_responses() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/Authorize"))
            .json_body(json!({
                "RequestId": "test-1234",
                "Username": "foo",
                "Password": "bar",
                "SecurityResponses": {"Who is the best?": "ME"},
                "MostRecentCached": false,
            }));
        then.status(200)
            .json_body(json!({"RequestId": "test-1234", "LoginId": "test-5678"}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .authorize()
        .request_id("test-1234")
        .credentials("foo", "bar")
        .security_response("Who is the best?", "ME")
        .send()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn authorize_with_scheduled_refresh() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/Authorize"))
            .json_body(json!({
                "Institution": "AwesomeBank",
                "Username": "foobar",
                "Password": "pwd",
                "Save": true,
                "ScheduleRefresh": true,
                "MostRecentCached": false,
            }));
        then.status(200)
            .json_body(json!({"RequestId": "test-1234", "LoginId": "test-5678"}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .authorize()
        .institution("AwesomeBank")
        .credentials("foobar", "pwd")
        .save(true)
        .schedule_refresh(true)
        .send()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn authorize_with_stored_login_and_half_credentials_omits_both() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/Authorize"))
            .json_body(json!({"LoginId": "login-1234", "MostRecentCached": true}));
        then.status(200)
            .json_body(json!({"RequestId": "r", "LoginId": "login-1234"}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .authorize()
        .login_id("login-1234")
        .credentials("foo", "")
        .most_recent_cached(true)
        .send()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn authorize_multiple_sends_login_ids() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/AuthorizeMultiple"))
            .json_body(json!({"LoginIds": ["test-1234"]}));
        then.status(200).json_body(json!({
            "ValidLoginIds": [{"LoginId": "login-1234", "RequestId": "request-1234"}],
            "InvalidLoginIds": [],
        }));
    });

    let client = client_for(&server);
    let resp = client
        .banking_services()
        .authorize_multiple(["test-1234"])
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp["ValidLoginIds"][0]["RequestId"], "request-1234");
}

#[tokio::test]
async fn authorize_multiple_defaults_to_empty_list() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/AuthorizeMultiple"))
            .json_body(json!({"LoginIds": []}));
        then.status(200)
            .json_body(json!({"ValidLoginIds": [], "InvalidLoginIds": []}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .authorize_multiple(Vec::<String>::new())
        .await
        .unwrap();

    mock.assert();
}
