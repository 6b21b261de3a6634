//! Tests for reading collections through RestStore.
//!
//! These tests verify the PostgREST request shape (query parameters and auth headers),
//! decoding of returned rows, and mapping of non-success statuses to store errors.

use portfolio::{
    error::{Error, StoreError},
    model::{Project, RecordId},
    store::{fetch_all, fetch_one, DataStore, Select},
};
use portfolio_test_utils::prelude::*;

use crate::util::rest_store;

/// Tests reading an ordered collection.
///
/// Verifies that the request carries the select and order parameters along with the
/// API key headers, and that rows are returned in the order the store sent them.
///
/// Expected: Ok with both projects, newest first
#[tokio::test]
async fn selects_rows_in_store_order() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_ordered_collection(
            "projects",
            "created_at.desc",
            vec![
                factory::project(2, "Smart Helmet", "IoT & Hardware"),
                factory::project(1, "Crop Doctor", "AI & Software"),
            ],
        )
        .build()
        .await;
    let store = rest_store(&test)?;

    let query = Select::collection("projects").order_by("created_at", false);
    let projects: Vec<Project> = fetch_all(&store, &query).await?;

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].title, "Smart Helmet");
    assert_eq!(projects[0].id, RecordId::Int(2));
    assert_eq!(projects[1].title, "Crop Doctor");
    assert_eq!(projects[1].live_link(), None);

    test.assert_mocks().await;

    Ok(())
}

/// Tests reading a single row from an empty collection.
///
/// Expected: Ok(None)
#[tokio::test]
async fn fetch_one_of_empty_collection_is_none() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_collection("profiles", Vec::new())
        .build()
        .await;
    let store = rest_store(&test)?;

    let profile: Option<portfolio::model::Profile> =
        fetch_one(&store, Select::collection("profiles")).await?;

    assert!(profile.is_none());

    test.assert_mocks().await;

    Ok(())
}

/// Tests that a rejected read surfaces the status code.
///
/// Expected: Err(StoreError::Status) carrying 401 and the collection name
#[tokio::test]
async fn non_success_status_is_an_error() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_failing_collection("projects", 401, 1)
        .build()
        .await;
    let store = rest_store(&test)?;

    let result = store.select(&Select::collection("projects")).await;

    assert!(matches!(
        result,
        Err(StoreError::Status { status: 401, ref collection, .. }) if collection == "projects"
    ));

    test.assert_mocks().await;

    Ok(())
}

/// Tests that rows not matching the record shape fail to decode.
///
/// Expected: Err(StoreError::Parse)
#[tokio::test]
async fn undecodable_rows_are_a_parse_error() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_collection("skills", vec![serde_json::json!({ "id": 1, "level": "expert" })])
        .build()
        .await;
    let store = rest_store(&test)?;

    let result: Result<Vec<portfolio::model::Skill>, StoreError> =
        fetch_all(&store, &Select::collection("skills")).await;

    assert!(matches!(result, Err(StoreError::Parse { .. })));

    test.assert_mocks().await;

    Ok(())
}

/// Tests that an unconfigured store fails without any request.
///
/// Expected: Err(StoreError::NotConfigured)
#[tokio::test]
async fn unconfigured_store_is_not_configured() {
    let store: Option<portfolio::store::RestStore> = None;

    let result = store.select(&Select::collection("projects")).await;

    assert!(matches!(result, Err(StoreError::NotConfigured)));
}
