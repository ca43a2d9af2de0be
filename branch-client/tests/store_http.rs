//! Integration tests for BranchStore over the network client.
//!
//! Uses wiremock for HTTP mocking. Tests cover the list query, bearer auth,
//! the PUT body, and how HTTP failures reach the store's error field.

use branch_client::{
    BranchApi, BranchStore, BranchUpdate, ClientConfig, ClientError, NetworkHttpClient,
    StoreError, UpdateOutcome, count_reservable_tables,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(mock_server: &MockServer) -> ClientConfig {
    ClientConfig::new(format!("{}/api/", mock_server.uri())).with_token("test-token")
}

fn create_test_store(mock_server: &MockServer) -> BranchStore {
    BranchStore::from_config(&config(mock_server)).expect("failed to create store")
}

fn branches_body() -> serde_json::Value {
    json!({
        "data": [
            {
                "id": "br-1",
                "name": "Centro",
                "reference": "CEN",
                "accepts_reservations": true,
                "reservation_duration": 90,
                "sections": [
                    {
                        "id": "sec-1",
                        "name": "Hall",
                        "tables": [
                            { "id": "t-1", "name": "1", "accepts_reservations": true },
                            { "id": "t-2", "name": "2", "accepts_reservations": false }
                        ]
                    },
                    {
                        "id": "sec-2",
                        "name": "Terrace",
                        "tables": [
                            { "id": "t-3", "name": "3", "accepts_reservations": true }
                        ]
                    }
                ]
            },
            {
                "id": "br-2",
                "name": "Puerto",
                "reference": "PUE",
                "accepts_reservations": false,
                "reservation_duration": 60,
                "sections": []
            },
            {
                "id": "br-3",
                "name": "Norte",
                "reference": "NOR",
                "accepts_reservations": true,
                "reservation_duration": 120
            }
        ],
        "meta": { "current_page": 1, "total": 3 }
    })
}

async fn mount_branches(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .and(query_param("include[0]", "sections"))
        .and(query_param("include[1]", "sections.tables"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(branches_body()))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_fetch_branches_success() {
    let mock_server = MockServer::start().await;
    mount_branches(&mock_server).await;

    let store = create_test_store(&mock_server);
    store.fetch_branches().await;

    let branches = store.branches().await;
    let ids: Vec<_> = branches.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["br-1", "br-3"]);
    assert!(store.error().await.is_none());

    assert_eq!(count_reservable_tables(branches.first()), 2);
    assert_eq!(count_reservable_tables(store.branch_by_id("br-3").await.as_ref()), 0);
    assert!(store.branch_by_id("br-2").await.is_none());
}

#[tokio::test]
async fn test_fetch_branches_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&mock_server)
        .await;

    let store = create_test_store(&mock_server);
    store.fetch_branches().await;

    assert!(store.branches().await.is_empty());
    assert_eq!(store.error().await, Some(StoreError::FetchFailed));
}

#[tokio::test]
async fn test_fetch_branches_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let store = create_test_store(&mock_server);
    store.fetch_branches().await;

    assert_eq!(store.error().await, Some(StoreError::FetchFailed));
}

#[tokio::test]
async fn test_disable_reservation_sends_partial_body() {
    let mock_server = MockServer::start().await;
    mount_branches(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/api/branches/br-1"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_json(json!({ "accepts_reservations": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_test_store(&mock_server);
    store.fetch_branches().await;
    let before = store.branch_by_id("br-1").await.expect("br-1 cached");

    let outcome = store.disable_reservation("br-1").await;

    assert_eq!(outcome, UpdateOutcome::Applied);
    let after = store.branch_by_id("br-1").await.expect("br-1 still cached");
    assert!(!after.accepts_reservations);
    assert_eq!(after.name, before.name);
    assert_eq!(after.reference, before.reference);
    assert_eq!(after.sections, before.sections);
    assert!(store.error().await.is_none());
}

#[tokio::test]
async fn test_update_unknown_branch_hits_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/branches/ghost"))
        .and(body_json(json!({ "name": "Ghost", "reservation_duration": 45 })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_test_store(&mock_server);
    let update = BranchUpdate::new().name("Ghost").reservation_duration(45);
    let outcome = store.update_branch("ghost", &update).await;

    assert_eq!(outcome, UpdateOutcome::NotCached);
    assert!(store.branches().await.is_empty());
    assert!(store.error().await.is_none());
}

#[tokio::test]
async fn test_update_encodes_branch_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/branches/a%2Fb%3Fc"))
        .and(body_json(json!({ "accepts_reservations": true })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = create_test_store(&mock_server);
    let outcome = store.enable_reservation("a/b?c").await;

    assert_eq!(outcome, UpdateOutcome::NotCached);
    assert!(store.error().await.is_none());

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].url.query().is_none());
}

#[tokio::test]
async fn test_update_rejected() {
    let mock_server = MockServer::start().await;
    mount_branches(&mock_server).await;

    Mock::given(method("PUT"))
        .and(path("/api/branches/br-1"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid duration"))
        .mount(&mock_server)
        .await;

    let store = create_test_store(&mock_server);
    store.fetch_branches().await;
    let before = store.branches().await;

    let outcome = store.enable_reservation("br-1").await;

    assert_eq!(outcome, UpdateOutcome::Failed);
    assert_eq!(store.branches().await, before);
    assert_eq!(
        store.error_message().await,
        Some("Failed to update branch. Please try again later.")
    );
}

#[tokio::test]
async fn test_status_mapping() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/branches/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such branch"))
        .mount(&mock_server)
        .await;

    let client = NetworkHttpClient::new(&config(&mock_server)).expect("failed to create client");

    let err = client.list_branches().await.unwrap_err();
    assert!(matches!(err, ClientError::Unauthorized), "got {err:?}");

    let err = client
        .update_branch("missing", &BranchUpdate::enable_reservations())
        .await
        .unwrap_err();
    match err {
        ClientError::NotFound(body) => assert_eq!(body, "no such branch"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_token_sends_no_authorization() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/branches"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&mock_server)
        .await;

    let client = NetworkHttpClient::new(&ClientConfig::new(format!("{}/api", mock_server.uri())))
        .expect("failed to create client");
    assert!(client.list_branches().await.unwrap().is_empty());

    let requests = mock_server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}
