//! Tests for the portfolio load batch.
//!
//! These tests verify that every collection is read once with its expected ordering, that
//! a missing profile row yields the fallback profile, and that any failing read falls back
//! to the default data set.

use portfolio::{
    error::{Error, StoreError},
    model::{Profile, RecordId},
    service::loader::{load_or_default, load_portfolio, PortfolioData},
    store::RestStore,
};
use portfolio_test_utils::{builder::PORTFOLIO_COLLECTIONS, prelude::*};
use serde_json::json;

use crate::util::rest_store;

/// Tests loading every collection.
///
/// Verifies that one read is issued per collection and that each record lands in its
/// section of the result in the order the store returned it.
///
/// Expected: Ok with the stored profile and every collection populated
#[tokio::test]
async fn loads_every_collection() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_portfolio_collections(vec![
            ("profiles", vec![factory::profile("Ada Lovelace", "Engineer")]),
            (
                "projects",
                vec![
                    factory::project(2, "Smart Helmet", "IoT & Hardware"),
                    factory::project(1, "Crop Doctor", "AI & Software"),
                ],
            ),
            ("experience", vec![factory::experience(1, "Intern", "Acme")]),
            ("education", vec![factory::education(1, "B.Tech CSE", "KTU")]),
            (
                "skills",
                vec![factory::skill(1, "Rust", 80), factory::skill(2, "Python", 90)],
            ),
            (
                "certificates",
                vec![factory::certificate(1, "Machine Learning", "Course Certificates")],
            ),
            ("gallery", vec![factory::gallery_item(2), factory::gallery_item(1)]),
        ])
        .build()
        .await;
    let store = rest_store(&test)?;

    let data = load_portfolio(&store).await?;

    assert_eq!(data.profile.name, "Ada Lovelace");
    assert_eq!(data.profile.role, "Engineer");
    assert_eq!(
        data.profile.bio_paragraphs(),
        vec!["First paragraph.", "Second paragraph."]
    );
    assert_eq!(data.projects.len(), 2);
    assert_eq!(data.projects[0].title, "Smart Helmet");
    assert_eq!(data.experience[0].role, "Intern");
    assert_eq!(data.education[0].degree, "B.Tech CSE");
    assert_eq!(data.education[0].description, None);
    assert_eq!(data.skills[0].name, "Rust");
    assert_eq!(data.skills[1].id, RecordId::Int(2));
    assert_eq!(data.certificates[0].subtitle(), Some("Example Academy"));
    assert_eq!(data.gallery.len(), 2);

    test.assert_mocks().await;

    Ok(())
}

/// Tests loading when the store has no profile row.
///
/// Expected: Ok with Profile::fallback() and empty collections
#[tokio::test]
async fn missing_profile_uses_fallback() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_portfolio_collections(Vec::new())
        .build()
        .await;
    let store = rest_store(&test)?;

    let data = load_portfolio(&store).await?;

    assert_eq!(data.profile, Profile::fallback());
    assert_eq!(data, PortfolioData::default());

    test.assert_mocks().await;

    Ok(())
}

/// Tests loading rows whose nullable columns are `null` or missing.
///
/// Verifies that a sparse row decodes with empty values instead of failing the batch, so
/// the stored profile and every other collection still load.
///
/// Expected: Ok with the stored profile and every sparse row present
#[tokio::test]
async fn null_and_missing_columns_do_not_fail_the_batch() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_portfolio_collections(vec![
            (
                "profiles",
                vec![json!({ "name": "Ada Lovelace", "role": null, "bio": null })],
            ),
            (
                "projects",
                vec![
                    json!({
                        "id": 9,
                        "title": null,
                        "description": null,
                        "category": null,
                        "github_link": null,
                        "live_link": "",
                        "created_at": "2024-11-25T10:00:00.123456",
                    }),
                    factory::project(1, "Crop Doctor", "AI & Software"),
                ],
            ),
            ("experience", vec![json!({ "id": 2, "role": null })]),
            ("education", vec![json!({ "degree": null, "created_at": null })]),
            (
                "skills",
                vec![json!({ "id": 1, "name": "Rust", "level": null }), json!({ "id": 2 })],
            ),
            ("certificates", vec![json!({ "id": "c-1", "title": null })]),
            ("gallery", vec![json!({ "id": 3, "image_url": null })]),
        ])
        .build()
        .await;
    let store = rest_store(&test)?;

    let data = load_portfolio(&store).await?;

    assert_eq!(data.profile.name, "Ada Lovelace");
    assert_eq!(data.profile.role, "");
    assert!(data.profile.bio_paragraphs().is_empty());

    assert_eq!(data.projects.len(), 2);
    assert_eq!(data.projects[0].title, "");
    assert_eq!(data.projects[0].github_link(), None);
    assert_eq!(data.projects[0].live_link(), None);
    assert_eq!(data.projects[0].subtitle(), None);
    assert!(data.projects[0].created_at.is_some());
    assert_eq!(
        data.projects[1].github_link(),
        Some("https://github.com/example/project-1")
    );

    assert_eq!(data.experience[0].role, "");
    assert_eq!(data.education[0].degree, "");
    assert_eq!(data.education[0].created_at, None);
    assert_eq!(data.skills[0].percent(), 0);
    assert_eq!(data.skills[1].name, "");
    assert_eq!(data.certificates[0].id, RecordId::Text("c-1".to_string()));
    assert_eq!(data.certificates[0].subtitle(), None);
    assert_eq!(data.gallery[0].image_url, None);

    test.assert_mocks().await;

    Ok(())
}

/// Tests that a null column in one row keeps the stored profile.
///
/// Expected: load_or_default returns the stored profile, not the fallback
#[tokio::test]
async fn null_skill_level_keeps_stored_profile() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_portfolio_collections(vec![
            ("profiles", vec![factory::profile("Ada Lovelace", "Engineer")]),
            ("projects", vec![factory::project(1, "Crop Doctor", "AI & Software")]),
            ("skills", vec![json!({ "id": 1, "name": "Rust", "level": null })]),
        ])
        .build()
        .await;
    let store = rest_store(&test)?;

    let data = load_or_default(&store).await;

    assert_eq!(data.profile.name, "Ada Lovelace");
    assert_eq!(data.projects.len(), 1);
    assert_eq!(data.skills.len(), 1);

    test.assert_mocks().await;

    Ok(())
}

/// Tests that one failing read fails the whole batch.
///
/// Expected: Err(StoreError::Status) with the failing status
#[tokio::test]
async fn failing_read_fails_the_batch() -> Result<(), Error> {
    let mut builder = TestBuilder::new();
    for (collection, _) in PORTFOLIO_COLLECTIONS {
        builder = builder.with_failing_collection(collection, 500, 1);
    }
    let test = builder.build().await;
    let store = rest_store(&test)?;

    let result = load_portfolio(&store).await;

    assert!(matches!(result, Err(StoreError::Status { status: 500, .. })));

    test.assert_mocks().await;

    Ok(())
}

/// Tests that a failed load renders the default data set.
///
/// Verifies that `load_or_default` swallows the error, issues no retry, and returns
/// the fallback profile with empty collections.
///
/// Expected: PortfolioData::default()
#[tokio::test]
async fn failed_load_falls_back_to_defaults() -> Result<(), Error> {
    let mut builder = TestBuilder::new();
    for (collection, _) in PORTFOLIO_COLLECTIONS {
        builder = builder.with_failing_collection(collection, 503, 1);
    }
    let test = builder.build().await;
    let store = rest_store(&test)?;

    let data = load_or_default(&store).await;

    assert_eq!(data, PortfolioData::default());

    test.assert_mocks().await;

    Ok(())
}

/// Tests loading without a configured store.
///
/// Expected: PortfolioData::default()
#[tokio::test]
async fn unconfigured_store_renders_defaults() {
    let store: Option<RestStore> = None;

    let data = load_or_default(&store).await;

    assert_eq!(data.profile, Profile::fallback());
    assert!(data.projects.is_empty());
}
