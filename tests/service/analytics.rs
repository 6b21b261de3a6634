//! Tests for best-effort analytics events.

use portfolio::{
    error::Error,
    model::{AnalyticsEvent, LinkKind},
    service::analytics::record_event,
};
use portfolio_test_utils::prelude::*;
use serde_json::json;

use crate::util::rest_store;

/// Tests recording a project link click.
///
/// Verifies that exactly one row tagged `project_view` with the title and link type is
/// appended to the analytics collection.
///
/// Expected: one insert with `{"type": "project_view", "details": {...}}`
#[tokio::test]
async fn records_project_view() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_insert_endpoint(
            "analytics",
            json!([{
                "type": "project_view",
                "details": { "title": "Smart Helmet", "link": "github" },
            }]),
            1,
        )
        .build()
        .await;
    let store = rest_store(&test)?;

    let event = AnalyticsEvent::project_view("Smart Helmet", LinkKind::Github);
    record_event(&store, &event).await;

    test.assert_mocks().await;

    Ok(())
}

/// Tests recording a page view.
///
/// Expected: one insert tagged `page_view` for the `portfolio` page
#[tokio::test]
async fn records_page_view() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_insert_endpoint(
            "analytics",
            json!([{
                "type": "page_view",
                "details": {
                    "page": "portfolio",
                    "referrer": "",
                    "user_agent": "",
                },
            }]),
            1,
        )
        .build()
        .await;
    let store = rest_store(&test)?;

    record_event(&store, &AnalyticsEvent::page_view("", "")).await;

    test.assert_mocks().await;

    Ok(())
}

/// Tests that a rejected analytics write is swallowed.
///
/// Verifies that the write is attempted once and the failure never reaches the caller.
///
/// Expected: returns normally after one rejected insert
#[tokio::test]
async fn rejected_event_is_swallowed() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_failing_insert_endpoint(
            "analytics",
            json!([{
                "type": "project_view",
                "details": { "title": "Crop Doctor", "link": "live" },
            }]),
            500,
            1,
        )
        .build()
        .await;
    let store = rest_store(&test)?;

    let event = AnalyticsEvent::project_view("Crop Doctor", LinkKind::Live);
    record_event(&store, &event).await;

    test.assert_mocks().await;

    Ok(())
}
