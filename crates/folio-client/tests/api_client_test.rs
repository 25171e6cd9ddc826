//! Contract tests for `ApiClient` against a wiremock backend.
//!
//! ## Endpoints Tested
//!
//! | Method | Path        | Test                     |
//! |--------|-------------|--------------------------|
//! | GET    | `/projects` | `fetch_projects_*`       |
//! | POST   | `/contact`  | `send_contact_message_*` |

use folio_client::{ApiClient, ApiConfig, ApiError, PortfolioApi};
use folio_core::{ContactForm, Project, ProjectId, ProjectStatus};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build an ApiClient whose base URL is `{mock}/api`.
fn test_client(mock_server: &MockServer) -> ApiClient {
    let config = ApiConfig::new(&format!("{}/api", mock_server.uri()))
        .unwrap()
        .with_timeout_secs(5);
    ApiClient::new(config).unwrap()
}

// ── GET /projects ────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_projects_returns_parsed_listing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 1,
                "name": "Project Alpha",
                "description": "Portfolio site in React",
                "status": "active",
                "github": "https://github.com/example/alpha"
            },
            {
                "id": 2,
                "name": "Project Beta",
                "description": "Flask API",
                "status": "inactive",
                "github": "https://github.com/example/beta"
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let projects = client.fetch_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, ProjectId::from(1));
    assert_eq!(projects[0].name, "Project Alpha");
    assert_eq!(projects[0].status, ProjectStatus::Active);
    assert_eq!(projects[1].status, ProjectStatus::Inactive);
}

#[tokio::test]
async fn fetch_projects_passes_malformed_items_through() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "x", "title": "Only a title"},
            {"id": 9, "status": "paused", "name": null}
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let projects = client.fetch_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Only a title");
    assert_eq!(projects[0].description, "");
    assert_eq!(projects[1].status, ProjectStatus::Unknown(serde_json::json!("paused")));
    assert_eq!(projects[1].name, "");
}

#[tokio::test]
async fn fetch_projects_keeps_good_items_beside_non_object_items() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "name": "Good", "status": "active"},
            null
        ])))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let projects = client.fetch_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "Good");
    assert_eq!(projects[0].status, ProjectStatus::Active);
    assert_eq!(projects[1], Project::default());
}

#[tokio::test]
async fn fetch_projects_maps_500_to_fixed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(serde_json::json!({"error": "db down"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let err = client.fetch_projects().await.unwrap_err();

    assert_eq!(err, ApiError::FetchProjects);
    assert_eq!(err.to_string(), "Failed to fetch projects");
}

#[tokio::test]
async fn fetch_projects_maps_404_to_fixed_error() {
    let mock_server = MockServer::start().await;
    // Nothing mounted: wiremock answers 404.

    let client = test_client(&mock_server);
    assert_eq!(client.fetch_projects().await.unwrap_err(), ApiError::FetchProjects);
}

#[tokio::test]
async fn fetch_projects_maps_non_array_body_to_fixed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    assert_eq!(client.fetch_projects().await.unwrap_err(), ApiError::FetchProjects);
}

#[tokio::test]
async fn fetch_projects_maps_transport_failure_to_fixed_error() {
    // Port 1 is closed: connection refused.
    let config = ApiConfig::new("http://127.0.0.1:1/api")
        .unwrap()
        .with_timeout_secs(1);
    let client = ApiClient::new(config).unwrap();

    assert_eq!(client.fetch_projects().await.unwrap_err(), ApiError::FetchProjects);
}

// ── POST /contact ────────────────────────────────────────────────────

#[tokio::test]
async fn send_contact_message_posts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hi"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"message": "Thanks for reaching out"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let form = ContactForm::new("Ada", "ada@example.com", "Hi");
    let reply = client.send_contact_message(&form).await.unwrap();

    assert_eq!(reply.message(), Some("Thanks for reaching out"));
}

#[tokio::test]
async fn send_contact_message_accepts_reply_without_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let form = ContactForm::new("Ada", "ada@example.com", "Hi");
    let reply = client.send_contact_message(&form).await.unwrap();

    assert_eq!(reply.message(), None);
}

#[tokio::test]
async fn send_contact_message_accepts_non_string_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"message": 42})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let form = ContactForm::new("Ada", "ada@example.com", "Hi");
    let reply = client.send_contact_message(&form).await.unwrap();

    assert_eq!(reply.message(), Some("42"));
}

#[tokio::test]
async fn send_contact_message_maps_400_to_fixed_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"error": "All fields are required"})),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let form = ContactForm::new("", "", "");
    let err = client.send_contact_message(&form).await.unwrap_err();

    // The server's own error text is not surfaced.
    assert_eq!(err, ApiError::SendMessage);
    assert_eq!(err.to_string(), "Failed to send message");
}
