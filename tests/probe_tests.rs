use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dirprobe::http_client::create_probe_client;
use dirprobe::probe::{probe_url, ProbeOutcome};

#[tokio::test]
async fn ok_response_classifies_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/admin"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_probe_client(5).unwrap();
    let outcome = probe_url(&client, &format!("{}/admin", server.uri()), 5).await;

    assert_eq!(outcome, ProbeOutcome::Success(200));
    assert_eq!(outcome.finding_status(), Some(200));
}

#[tokio::test]
async fn not_found_keeps_its_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_probe_client(5).unwrap();
    let outcome = probe_url(&client, &format!("{}/nope", server.uri()), 5).await;

    assert_eq!(outcome, ProbeOutcome::NotFound(404));
    assert_eq!(outcome.status(), Some(404));
}

#[tokio::test]
async fn server_error_is_not_a_finding() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = create_probe_client(5).unwrap();
    let outcome = probe_url(&client, &format!("{}/flaky", server.uri()), 5).await;

    assert_eq!(outcome, ProbeOutcome::NotFound(503));
    assert_eq!(outcome.finding_status(), None);
}

#[tokio::test]
async fn redirect_is_followed_to_the_final_status() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(301).insert_header("Location", "/real"))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/real"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_probe_client(5).unwrap();
    let outcome = probe_url(&client, &format!("{}/moved", server.uri()), 5).await;

    assert_eq!(outcome, ProbeOutcome::Success(200));
}

#[tokio::test]
async fn connection_failure_is_unreachable() {
    let client = create_probe_client(2).unwrap();
    let outcome = probe_url(&client, "http://127.0.0.1:1/admin", 2).await;

    assert_eq!(outcome, ProbeOutcome::Unreachable);
}

#[tokio::test]
async fn slow_response_times_out_as_unreachable() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = create_probe_client(1).unwrap();
    let outcome = probe_url(&client, &format!("{}/slow", server.uri()), 1).await;

    assert_eq!(outcome, ProbeOutcome::Unreachable);
}
