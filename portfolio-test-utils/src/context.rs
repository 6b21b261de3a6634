//! Test context returned by [`TestBuilder::build`](crate::TestBuilder::build).

use mockito::{Mock, Server, ServerGuard};

use crate::constant::TEST_STORE_KEY;

/// Running mock data store and the endpoints declared on it.
///
/// ```ignore
/// let test = TestBuilder::new()
///     .with_collection("projects", vec![factory::project(1, "Crop Doctor", "AI & Software")])
///     .build()
///     .await;
///
/// let config = Config::new(test.url(), test.store_key())?;
/// // ... run code against RestStore::new(&config)
///
/// test.assert_mocks().await;
/// ```
pub struct TestContext {
    /// Mock HTTP server standing in for the hosted store
    pub(crate) server: ServerGuard,
    /// Endpoints declared by the builder, asserted by `assert_mocks`
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock store.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// API key accepted by the mock store.
    pub fn store_key(&self) -> String {
        TEST_STORE_KEY.to_string()
    }

    /// Assert every declared endpoint was called the expected number of times.
    ///
    /// # Panics
    /// Panics if any endpoint was not called the expected number of times
    pub async fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert_async().await;
        }
    }
}
