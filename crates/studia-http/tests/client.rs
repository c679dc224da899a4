use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;
use studia_http::{Empty, Envelope, HttpClient, HttpClientConfig, MemoryStorage, error_code};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, PartialEq, Deserialize)]
struct Note {
    id: i64,
    title: String,
}

fn client_for(uri: &str) -> (HttpClient, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let config = HttpClientConfig::new(uri).expect("valid base url");
    let client = HttpClient::new(config, storage.clone()).expect("client build");
    (client, storage)
}

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind temp port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

#[tokio::test]
async fn test_success_resolves_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/notes/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Note fetched",
            "data": { "id": 1, "title": "Syllabus" }
        })))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let response: Envelope<Note> = client.get("/admin/notes/1").await;

    assert!(response.is_success());
    assert_eq!(response.message, "Note fetched");
    assert_eq!(
        response.into_data(),
        Some(Note {
            id: 1,
            title: "Syllabus".to_owned()
        })
    );
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/notes"))
        .and(body_json(json!({ "title": "Syllabus" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Note created",
            "data": { "id": 7, "title": "Syllabus" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let response: Envelope<Note> = client.post("/admin/notes", &json!({ "title": "Syllabus" })).await;

    assert!(response.is_success());
    assert_eq!(response.data.map(|note| note.id), Some(7));

    server.verify().await;
}

#[tokio::test]
async fn test_attaches_bearer_token_when_present() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "ok"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    client.credentials().set_token("tok123");

    let response: Envelope<Empty> = client.get("/admin/books").await;
    assert!(response.is_success());

    server.verify().await;
}

#[tokio::test]
async fn test_omits_authorization_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "ok"
        })))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let _: Envelope<Empty> = client.get("/admin/books").await;

    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_status_preserves_envelope_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/admin/login"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": false,
            "message": "Validation failed",
            "errors": { "email": ["must be a valid address"] },
            "error": "VALIDATION"
        })))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let response: Envelope<Empty> = client
        .post("/auth/admin/login", &json!({ "email": "nope" }))
        .await;

    assert!(!response.is_success());
    assert_eq!(response.message, "Validation failed");
    assert_eq!(response.error.as_deref(), Some("VALIDATION"));
    let errors = response.errors.expect("field errors");
    assert_eq!(errors["email"], vec!["must be a valid address"]);
}

#[tokio::test]
async fn test_error_status_without_json_body_uses_fallbacks() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let response: Envelope<Empty> = client.get("/admin/books").await;

    assert!(!response.is_success());
    assert_eq!(response.message, "An error occurred");
    assert_eq!(response.error.as_deref(), Some(error_code::REQUEST_FAILED));
    assert_eq!(response.errors, None);
}

#[tokio::test]
async fn test_success_with_text_body_becomes_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let response: Envelope<Empty> = client.get("/health").await;

    assert!(response.is_success());
    assert_eq!(response.message, "OK");
    assert_eq!(response.data, None);
}

#[tokio::test]
async fn test_undecodable_success_body_fails_closed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{ not json", "application/json"),
        )
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let response: Envelope<Note> = client.get("/admin/books").await;

    assert!(!response.is_success());
    assert_eq!(response.error.as_deref(), Some(error_code::NETWORK_ERROR));
    assert_eq!(response.data, None);
}

#[tokio::test]
async fn test_connection_refused_resolves_to_failure() {
    let port = free_port();
    let (client, _) = client_for(&format!("http://127.0.0.1:{port}"));

    let response: Envelope<Empty> = client.get("/admin/books").await;

    assert!(!response.is_success());
    assert_eq!(response.message, "Connection failed");
    assert_eq!(response.error.as_deref(), Some(error_code::NETWORK_ERROR));
}

#[tokio::test]
async fn test_timeout_resolves_to_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/books"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": true, "message": "ok" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let storage = Arc::new(MemoryStorage::new());
    let config = HttpClientConfig::new(server.uri())
        .expect("valid base url")
        .with_timeout(Duration::from_millis(50));
    let client = HttpClient::new(config, storage).expect("client build");

    let response: Envelope<Empty> = client.get("/admin/books").await;

    assert!(!response.is_success());
    assert_eq!(response.message, "Request timed out");
    assert_eq!(response.error.as_deref(), Some(error_code::NETWORK_ERROR));
}

#[tokio::test]
async fn test_multipart_posts_form_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/books/3/cover"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "Cover uploaded"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client_for(&server.uri());
    let part = Part::bytes(vec![0x89, 0x50, 0x4e, 0x47])
        .file_name("cover.png")
        .mime_str("image/png")
        .expect("valid mime");
    let form = Form::new().part("cover", part);

    let response: Envelope<Empty> = client.post_multipart("/admin/books/3/cover", form).await;
    assert!(response.is_success());

    let requests = server.received_requests().await.expect("recorded requests");
    let content_type = requests[0]
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .expect("content type");
    assert!(content_type.starts_with("multipart/form-data"));
}
