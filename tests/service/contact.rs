//! Tests for the contact form submission.
//!
//! These tests verify that a submission issues exactly one insert carrying the form values
//! verbatim, that success clears the form, and that failure keeps it without retrying.

use portfolio::{
    error::Error,
    service::contact::{submit_message, ContactForm, SubmitOutcome, FAILED_NOTICE, SENT_NOTICE},
    store::RestStore,
};
use portfolio_test_utils::prelude::*;
use serde_json::json;

use crate::util::rest_store;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        message: "  Loved the Smart Helmet project!  ".to_string(),
    }
}

fn expected_row() -> serde_json::Value {
    json!([{
        "sender_name": "Ada Lovelace",
        "email": "ada@example.com",
        "message": "  Loved the Smart Helmet project!  ",
    }])
}

/// Tests a successful submission.
///
/// Verifies that exactly one insert is sent with the values untouched and that the form
/// is cleared afterwards.
///
/// Expected: SubmitOutcome::Sent with an empty form
#[tokio::test]
async fn sends_message_and_clears_form() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_insert_endpoint("messages", expected_row(), 1)
        .build()
        .await;
    let store = rest_store(&test)?;
    let mut form = filled_form();

    let outcome = submit_message(&store, &mut form).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(outcome.notice(), SENT_NOTICE);
    assert_eq!(form, ContactForm::default());

    test.assert_mocks().await;

    Ok(())
}

/// Tests a rejected submission.
///
/// Verifies that the store is called once, the form keeps every value and no retry is
/// attempted.
///
/// Expected: SubmitOutcome::Failed with the form intact
#[tokio::test]
async fn rejected_message_keeps_form() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_failing_insert_endpoint("messages", expected_row(), 400, 1)
        .build()
        .await;
    let store = rest_store(&test)?;
    let mut form = filled_form();

    let outcome = submit_message(&store, &mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(outcome.notice(), FAILED_NOTICE);
    assert_eq!(form, filled_form());

    test.assert_mocks().await;

    Ok(())
}

/// Tests submitting without a configured store.
///
/// Expected: SubmitOutcome::Failed with the form intact
#[tokio::test]
async fn unconfigured_store_fails_submission() {
    let store: Option<RestStore> = None;
    let mut form = filled_form();

    let outcome = submit_message(&store, &mut form).await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(form, filled_form());
}
