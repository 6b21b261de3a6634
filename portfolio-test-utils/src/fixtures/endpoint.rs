//! Mockito endpoints imitating the hosted store's PostgREST API.

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::Value;

use crate::constant::{TEST_REST_PATH, TEST_STORE_KEY};

fn collection_path(collection: &str) -> String {
    format!("{}/{}", TEST_REST_PATH, collection)
}

/// Create a select endpoint answering with `rows`.
///
/// When `order` is given (e.g. `created_at.desc`) the request must carry that `order`
/// parameter to match.
pub async fn mock_select_endpoint(
    server: &mut ServerGuard,
    collection: &str,
    order: Option<&str>,
    rows: Vec<Value>,
    expected_requests: usize,
) -> Mock {
    let query = match order {
        Some(order) => Matcher::AllOf(vec![
            Matcher::UrlEncoded("select".into(), "*".into()),
            Matcher::UrlEncoded("order".into(), order.into()),
        ]),
        None => Matcher::UrlEncoded("select".into(), "*".into()),
    };

    server
        .mock("GET", collection_path(collection).as_str())
        .match_query(query)
        .match_header("apikey", TEST_STORE_KEY)
        .match_header("authorization", format!("Bearer {}", TEST_STORE_KEY).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(Value::Array(rows).to_string())
        .expect(expected_requests)
        .create_async()
        .await
}

/// Create a select endpoint that fails with `status`.
///
/// Concurrent reads are dropped once one of them fails, so the endpoint is asserted to be
/// called at most `expected_requests` times.
pub async fn mock_failing_select_endpoint(
    server: &mut ServerGuard,
    collection: &str,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("GET", collection_path(collection).as_str())
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"mock store failure"}"#)
        .expect_at_most(expected_requests)
        .create_async()
        .await
}

/// Create an insert endpoint accepting exactly `body` and answering with `status`.
pub async fn mock_insert_endpoint(
    server: &mut ServerGuard,
    collection: &str,
    body: Value,
    status: usize,
    expected_requests: usize,
) -> Mock {
    server
        .mock("POST", collection_path(collection).as_str())
        .match_header("apikey", TEST_STORE_KEY)
        .match_header("prefer", "return=minimal")
        .match_body(Matcher::Json(body))
        .with_status(status)
        .expect(expected_requests)
        .create_async()
        .await
}
