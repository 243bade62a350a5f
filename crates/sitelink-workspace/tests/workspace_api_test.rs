//! Integration tests for the workspace client against a mocked HTTP API.

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sitelink_core::{DocumentStore, Error, SearchFilter};
use sitelink_workspace::{WorkspaceClient, WorkspaceConfig};

fn client_for(server: &MockServer) -> WorkspaceClient {
    WorkspaceClient::new(WorkspaceConfig {
        base_url: server.uri(),
        api_key: "test-key".to_string(),
        timeout_seconds: 5,
    })
    .expect("Failed to create workspace client")
}

#[tokio::test]
async fn search_sends_rendered_filter_and_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents"))
        .and(query_param(
            "query",
            "(externalMetadataName.1 = 'salesforceWorkOrderId' AND externalMetadataValue.1 = 'WO-1')",
        ))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "documents": [
                {"id": "D1", "title": "Pump housing", "parentID": "P1"},
                {"id": "D2", "title": "Gasket", "parentID": "P1"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let documents = client
        .search(&SearchFilter::for_work_order("WO-1"))
        .await
        .unwrap();

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].id, "D1");
    assert_eq!(documents[1].parent_id.as_deref(), Some("P1"));
}

#[tokio::test]
async fn search_with_no_documents_field_returns_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let documents = client
        .search(&SearchFilter::for_work_order("WO-1"))
        .await
        .unwrap();
    assert!(documents.is_empty());
}

#[tokio::test]
async fn search_failure_surfaces_status_and_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({"message": "malformed query"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .search(&SearchFilter::for_work_order("WO-1"))
        .await
        .unwrap_err();

    match err {
        Error::Request(msg) => {
            assert!(msg.contains("400"), "missing status in: {}", msg);
            assert!(msg.contains("malformed query"), "missing message in: {}", msg);
        }
        other => panic!("Expected Request error, got: {}", other),
    }
}

#[tokio::test]
async fn fetch_returns_the_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/P1"))
        .and(header("X-Api-Key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "P1",
            "title": "Call 1"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let document = client.fetch("P1").await.unwrap();
    assert_eq!(document.id, "P1");
    assert_eq!(document.title, "Call 1");
    assert!(document.parent_id.is_none());
}

#[tokio::test]
async fn fetch_missing_document_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/P2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.fetch("P2").await.unwrap_err();

    match err {
        Error::NotFound(msg) => assert!(msg.contains("P2")),
        other => panic!("Expected NotFound, got: {}", other),
    }
}
