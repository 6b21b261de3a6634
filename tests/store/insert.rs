//! Tests for appending rows through RestStore.

use portfolio::{
    error::{Error, StoreError},
    model::NewMessage,
    store::insert_one,
};
use portfolio_test_utils::prelude::*;
use serde_json::json;

use crate::util::rest_store;

fn message() -> NewMessage {
    NewMessage {
        sender_name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello there".to_string(),
    }
}

/// Tests inserting one record.
///
/// Verifies that the record is sent as a one-element JSON array with the
/// `Prefer: return=minimal` header.
///
/// Expected: Ok(())
#[tokio::test]
async fn inserts_record_as_json_array() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_insert_endpoint(
            "messages",
            json!([{
                "sender_name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            }]),
            1,
        )
        .build()
        .await;
    let store = rest_store(&test)?;

    insert_one(&store, "messages", &message()).await?;

    test.assert_mocks().await;

    Ok(())
}

/// Tests that a rejected insert surfaces the status code.
///
/// Expected: Err(StoreError::Status) with status 403
#[tokio::test]
async fn rejected_insert_is_a_status_error() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_failing_insert_endpoint(
            "messages",
            json!([{
                "sender_name": "Ada",
                "email": "ada@example.com",
                "message": "Hello there",
            }]),
            403,
            1,
        )
        .build()
        .await;
    let store = rest_store(&test)?;

    let result = insert_one(&store, "messages", &message()).await;

    assert!(matches!(result, Err(StoreError::Status { status: 403, .. })));

    test.assert_mocks().await;

    Ok(())
}
