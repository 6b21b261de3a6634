//! Declarative test builder for Phase 1 setup.
//!
//! Endpoints are queued by the `with_*` methods and created on the mock server during the
//! final `build()` call, in declaration order.

use serde_json::Value;

use crate::{
    fixtures::endpoint::{mock_failing_select_endpoint, mock_insert_endpoint, mock_select_endpoint},
    TestContext,
};

/// Collections read by the portfolio loader with the order each is requested in.
pub static PORTFOLIO_COLLECTIONS: [(&str, Option<&str>); 7] = [
    ("profiles", None),
    ("projects", Some("created_at.desc")),
    ("experience", Some("created_at.desc")),
    ("education", Some("created_at.desc")),
    ("skills", Some("id.asc")),
    ("certificates", Some("created_at.desc")),
    ("gallery", Some("created_at.desc")),
];

enum Endpoint {
    Select {
        collection: String,
        order: Option<String>,
        rows: Vec<Value>,
        expected_requests: usize,
    },
    FailingSelect {
        collection: String,
        status: usize,
        expected_requests: usize,
    },
    Insert {
        collection: String,
        body: Value,
        status: usize,
        expected_requests: usize,
    },
}

/// Builder for declarative test initialization.
#[derive(Default)]
pub struct TestBuilder {
    endpoints: Vec<Endpoint>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no endpoints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `rows` for one read of `collection`, whatever its ordering.
    pub fn with_collection(mut self, collection: &str, rows: Vec<Value>) -> Self {
        self.endpoints.push(Endpoint::Select {
            collection: collection.to_string(),
            order: None,
            rows,
            expected_requests: 1,
        });
        self
    }

    /// Serve `rows` for one read of `collection` that requests `order`
    /// (e.g. `created_at.desc`).
    pub fn with_ordered_collection(
        mut self,
        collection: &str,
        order: &str,
        rows: Vec<Value>,
    ) -> Self {
        self.endpoints.push(Endpoint::Select {
            collection: collection.to_string(),
            order: Some(order.to_string()),
            rows,
            expected_requests: 1,
        });
        self
    }

    /// Serve every portfolio collection once, with `overrides` replacing the empty default
    /// rows of the collections they name.
    ///
    /// Each read must use the ordering the loader is expected to request.
    pub fn with_portfolio_collections(mut self, overrides: Vec<(&str, Vec<Value>)>) -> Self {
        let mut overrides = overrides;

        for (collection, order) in PORTFOLIO_COLLECTIONS {
            let rows = overrides
                .iter()
                .position(|(name, _)| *name == collection)
                .map(|index| overrides.swap_remove(index).1)
                .unwrap_or_default();

            self.endpoints.push(Endpoint::Select {
                collection: collection.to_string(),
                order: order.map(str::to_string),
                rows,
                expected_requests: 1,
            });
        }
        self
    }

    /// Fail reads of `collection` with `status`, expecting at most `expected_requests`.
    pub fn with_failing_collection(
        mut self,
        collection: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::FailingSelect {
            collection: collection.to_string(),
            status,
            expected_requests,
        });
        self
    }

    /// Accept inserts into `collection` whose JSON body equals `body`.
    pub fn with_insert_endpoint(
        mut self,
        collection: &str,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Insert {
            collection: collection.to_string(),
            body,
            status: 201,
            expected_requests,
        });
        self
    }

    /// Reject inserts into `collection` whose JSON body equals `body` with `status`.
    pub fn with_failing_insert_endpoint(
        mut self,
        collection: &str,
        body: Value,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Insert {
            collection: collection.to_string(),
            body,
            status,
            expected_requests,
        });
        self
    }

    /// Start the mock server and create every queued endpoint.
    pub async fn build(self) -> TestContext {
        let mut context = TestContext::new().await;

        for endpoint in self.endpoints {
            let mock = match endpoint {
                Endpoint::Select {
                    collection,
                    order,
                    rows,
                    expected_requests,
                } => {
                    mock_select_endpoint(
                        &mut context.server,
                        &collection,
                        order.as_deref(),
                        rows,
                        expected_requests,
                    )
                    .await
                }
                Endpoint::FailingSelect {
                    collection,
                    status,
                    expected_requests,
                } => {
                    mock_failing_select_endpoint(
                        &mut context.server,
                        &collection,
                        status,
                        expected_requests,
                    )
                    .await
                }
                Endpoint::Insert {
                    collection,
                    body,
                    status,
                    expected_requests,
                } => {
                    mock_insert_endpoint(
                        &mut context.server,
                        &collection,
                        body,
                        status,
                        expected_requests,
                    )
                    .await
                }
            };

            context.mocks.push(mock);
        }

        context
    }
}
