use axum::http::StatusCode;
use axum_test::TestServer;
use erp_services::{config::Config, database::mock::MockMpsStorage, routes};
use serde_json::{Value, json};

fn server(storage: MockMpsStorage, config: Config) -> TestServer {
    TestServer::new(routes(storage, config)).unwrap()
}

#[tokio::test]
async fn test_mps_returns_camel_case_rows_in_id_order() {
    let storage = MockMpsStorage::with_rows(MockMpsStorage::sample_rows(3));
    let server = server(storage.clone(), Config::new_for_test());

    let response = server.get("/api/mps").await;
    response.assert_status_ok();

    let body: Value = response.json();
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 3);

    let ids: Vec<i64> = rows.iter().filter_map(|r| r["id"].as_i64()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    assert_eq!(
        rows[0],
        json!({
            "id": 1,
            "productName": "Product 1",
            "workOrderId": "WO-1001",
            "quantity": 25,
            "dueDate": "2024-01-16",
            "status": "In Progress",
        })
    );
    assert_eq!(storage.query_count(), 1);
}

#[tokio::test]
async fn test_mps_empty_table_is_empty_array() {
    let server = server(MockMpsStorage::with_rows(vec![]), Config::new_for_test());

    let response = server.get("/api/mps").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_mps_query_failure_returns_error_body() {
    let server = server(MockMpsStorage::failing(), Config::new_for_test());

    let response = server.get("/api/mps").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Failed to fetch MPS data" }));
}

#[tokio::test]
async fn test_mps_snapshot_matches_response() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("mpsData.json");
    let server = server(
        MockMpsStorage::with_rows(MockMpsStorage::sample_rows(2)),
        Config::new_for_test_with_snapshot(&path),
    );

    let response = server.get("/api/mps").await;
    response.assert_status_ok();
    let body: Value = response.json();

    let snapshot: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(snapshot, body);
}

#[tokio::test]
async fn test_mps_snapshot_failure_still_responds() {
    let dir = tempfile::tempdir().unwrap();
    // A directory where the file should be makes the write fail
    let path = dir.path().join("occupied");
    std::fs::create_dir(&path).unwrap();

    let server = server(
        MockMpsStorage::with_rows(MockMpsStorage::sample_rows(1)),
        Config::new_for_test_with_snapshot(&path),
    );

    let response = server.get("/api/mps").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_mps_failure_does_not_touch_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mpsData.json");
    let server = server(
        MockMpsStorage::failing(),
        Config::new_for_test_with_snapshot(&path),
    );

    let response = server.get("/api/mps").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!path.exists());
}
