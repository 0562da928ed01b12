use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kundali::config::Config;
use kundali::flow::{FlowClient, FlowError};
use kundali::form::{BirthDetails, Gender};
use kundali::source::hosted::HostedSource;
use kundali::source::{KundaliSource, Report};

const RUN_PATH: &str = "/lf/org-1/api/v1/run/flow-1";

fn config_for(server: &MockServer) -> Config {
    Config {
        app_token: Some("test-token".to_string()),
        base_url: server.uri(),
        langflow_id: "org-1".to_string(),
        flow_id: "flow-1".to_string(),
        ..Config::default()
    }
}

fn details() -> BirthDetails {
    BirthDetails {
        name: "Vihan Verma".to_string(),
        dob: NaiveDate::from_ymd_opt(1994, 3, 7).unwrap(),
        tob: NaiveTime::from_hms_opt(14, 5, 0).unwrap(),
        place: "Vadodara, Gujarat".to_string(),
        gender: Gender::Male,
    }
}

#[tokio::test]
async fn posts_message_with_bearer_token() {
    let server = MockServer::start().await;
    let reply = json!({"session_id": "s1", "outputs": [{"outputs": []}]});

    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .and(header("authorization", "Bearer test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "input_value": "hello",
            "output_type": "chat",
            "input_type": "chat",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = FlowClient::new(&config_for(&server)).unwrap();
    let got = client.run_flow("hello").await.unwrap();
    assert_eq!(got, reply);
}

#[tokio::test]
async fn named_endpoint_replaces_flow_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/lf/org-1/api/v1/run/kundali"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        endpoint: Some("kundali".to_string()),
        ..config_for(&server)
    };
    let got = FlowClient::new(&config).unwrap().run_flow("x").await.unwrap();
    assert_eq!(got, json!({"ok": true}));
}

#[tokio::test]
async fn error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&server)
        .await;

    let err = FlowClient::new(&config_for(&server))
        .unwrap()
        .run_flow("hello")
        .await
        .unwrap_err();
    match err {
        FlowError::Status { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert_eq!(body, "bad token");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_reply_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = FlowClient::new(&config_for(&server))
        .unwrap()
        .run_flow("hello")
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::Request(_)));
    assert!(err.to_string().starts_with("API request failed"));
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    let config = Config {
        app_token: Some("t".to_string()),
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Some(Duration::from_secs(5)),
        ..Config::default()
    };
    let err = FlowClient::new(&config)
        .unwrap()
        .run_flow("hello")
        .await
        .unwrap_err();
    assert!(matches!(err, FlowError::Request(_)));
}

#[tokio::test]
async fn slow_reply_hits_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = Config {
        timeout: Some(Duration::from_millis(200)),
        ..config_for(&server)
    };
    let err = FlowClient::new(&config)
        .unwrap()
        .run_flow("hello")
        .await
        .unwrap_err();
    match err {
        FlowError::Request(e) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn hosted_source_sends_birth_message_and_returns_reply_unchanged() {
    let server = MockServer::start().await;
    let reply = json!({"outputs": [{"outputs": [{"results": {"message": {"text": "chart"}}}]}]});
    Mock::given(method("POST"))
        .and(path(RUN_PATH))
        .and(body_json(json!({
            "input_value": "Generate Kundali for Vihan Verma, born on 1994-03-07 at 14:05:00 in Vadodara, Gujarat. Gender: Male.",
            "output_type": "chat",
            "input_type": "chat",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let source = HostedSource::new(FlowClient::new(&config_for(&server)).unwrap());
    let report = source.generate(&details()).await.unwrap();
    assert_eq!(report, Report::Remote(reply));
}

#[tokio::test]
async fn hosted_source_failure_keeps_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let source = HostedSource::new(FlowClient::new(&config_for(&server)).unwrap());
    let err = source.generate(&details()).await.unwrap_err();
    let text = format!("{err:#}");
    assert!(text.starts_with("API request failed"));
    assert!(text.contains("500"));
}

#[tokio::test]
async fn hosted_source_rejects_empty_replies() {
    for reply in [json!({}), json!([]), json!(null)] {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(RUN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let source = HostedSource::new(FlowClient::new(&config_for(&server)).unwrap());
        let err = source.generate(&details()).await.unwrap_err();
        assert!(
            err.to_string().contains("empty reply"),
            "reply {reply} gave {err}"
        );
    }
}
