use std::time::Duration;

use checklist_core::Check;
use checklist_engine::{ChecklistClient, FailureKind, FetchSettings, HttpChecklistClient};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn http_client_decodes_json_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/checks"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"title":"milk"},{"title":"eggs","detail":"a dozen"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = HttpChecklistClient::new(
        format!("{}/checks", server.uri()),
        FetchSettings::default(),
    );
    let checks = client.fetch().await.expect("fetch ok");

    assert_eq!(
        checks,
        vec![
            Check::new("milk"),
            Check {
                title: "eggs".to_string(),
                detail: Some("a dozen".to_string()),
            },
        ]
    );
}

#[tokio::test]
async fn http_client_fails_on_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = HttpChecklistClient::new(
        format!("{}/missing", server.uri()),
        FetchSettings::default(),
    );
    let err = client.fetch().await.expect_err("should fail");

    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn http_client_rejects_oversized_body() {
    let server = MockServer::start().await;
    let body = format!(r#"[{{"title":"{}"}}]"#, "x".repeat(256));
    Mock::given(method("GET"))
        .and(path("/big"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 64,
        ..FetchSettings::default()
    };
    let client = HttpChecklistClient::new(format!("{}/big", server.uri()), settings);
    let err = client.fetch().await.expect_err("should fail");

    assert!(matches!(
        err.kind,
        FailureKind::TooLarge { max_bytes: 64, .. }
    ));
}

#[tokio::test]
async fn http_client_reports_malformed_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let client = HttpChecklistClient::new(
        format!("{}/broken", server.uri()),
        FetchSettings::default(),
    );
    let err = client.fetch().await.expect_err("should fail");

    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn http_client_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("[]", "application/json")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Duration::from_millis(100),
        ..FetchSettings::default()
    };
    let client = HttpChecklistClient::new(format!("{}/slow", server.uri()), settings);
    let err = client.fetch().await.expect_err("should time out");

    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn http_client_rejects_invalid_url() {
    let client = HttpChecklistClient::new("not a url", FetchSettings::default());
    let err = client.fetch().await.expect_err("should fail");

    assert_eq!(err.kind, FailureKind::InvalidUrl);
}
