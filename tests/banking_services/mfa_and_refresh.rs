use flinks_rs::MfaAnswer;
use httpmock::Method::{GET, PATCH};
use serde_json::json;

use crate::common::{client_for, endpoint, setup_server};

#[tokio::test]
async fn mfa_questions_are_fetched_by_login() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(endpoint("BankingServices/GetMFAQuestions/login-1234"));
        then.status(200).json_body(json!({"Questions": []}));
    });

    let client = client_for(&server);
    let resp = client
        .banking_services()
        .get_mfa_questions("login-1234")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp, json!({"Questions": []}));
}

#[tokio::test]
async fn mfa_answers_are_patched() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path(endpoint("BankingServices/AnswerMFAQuestions"))
            .json_body(json!({
                "LoginId": "login-1234",
                "Questions": [{"Question": "Who is the best?", "Answer": "ME"}],
            }));
        then.status(200).json_body(json!({"Result": ""}));
    });

    let client = client_for(&server);
    client
        .banking_services()
        .set_mfa_questions("login-1234", &[MfaAnswer::new("Who is the best?", "ME")])
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn scheduled_refresh_can_be_activated() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path(endpoint("BankingServices/SetScheduledRefresh"))
            .json_body(json!({"LoginId": "login-1234", "IsActivated": true}));
        then.status(200).json_body(json!("ACTIVATED"));
    });

    let client = client_for(&server);
    let resp = client
        .banking_services()
        .set_scheduled_refresh("login-1234", true)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp, json!("ACTIVATED"));
}

#[tokio::test]
async fn scheduled_refresh_can_be_deactivated() {
    let server = setup_server();

    let mock = server.mock(|when, then| {
        when.method(PATCH)
            .path(endpoint("BankingServices/SetScheduledRefresh"))
            .json_body(json!({"LoginId": "login-1234", "IsActivated": false}));
        then.status(200).json_body(json!("DEACTIVATED"));
    });

    let client = client_for(&server);
    let resp = client
        .banking_services()
        .set_scheduled_refresh("login-1234", false)
        .await
        .unwrap();

    mock.assert();
    assert_eq!(resp, json!("DEACTIVATED"));
}
