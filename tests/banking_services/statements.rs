use flinks_rs::NumberOfStatements;
use httpmock::Method::{GET, POST};
use serde_json::json;

use crate::common::{client_for, endpoint, setup_server};

#[tokio::test]
async fn statements_with_only_request_id() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/GetStatements"))
            .json_body(json!({"RequestId": "request-1234"}));
        then.status(200).json_body(json!({"Statements": []}));
    });

    let client = client_for(&server);
    let resp = client
        .banking_services()
        .get_statements("request-1234")
        .send()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp, json!({"Statements": []}));
}

#[tokio::test]
async fn statements_with_number_of_statements() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/GetStatements"))
            .json_body(json!({"RequestId": "request-1234", "NumberOfStatements": "Months3"}));
        then.status(200).json_body(json!({"Statements": []}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .get_statements("request-1234")
        .number_of_statements(NumberOfStatements::Months3)
        .send()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn statements_with_accounts_filter() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(endpoint("BankingServices/GetStatements"))
            .json_body(json!({"RequestId": "request-1234", "AccountsFilter": ["acc-1234"]}));
        then.status(200).json_body(json!({"Statements": []}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .get_statements("request-1234")
        .accounts_filter(vec!["acc-1234".to_string()])
        .send()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn statements_async_polls_by_request_id() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(endpoint("BankingServices/GetStatementsAsync/request-1234"));
        then.status(200).json_body(json!({"Result": ""}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .get_statements_async("request-1234")
        .await
        .unwrap();

    mock.assert();
}
