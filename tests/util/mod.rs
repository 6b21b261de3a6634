use portfolio::{config::Config, error::Error, store::RestStore};
use portfolio_test_utils::TestContext;

/// Build a [`RestStore`] pointed at the mock store of `test`.
pub fn rest_store(test: &TestContext) -> Result<RestStore, Error> {
    let config = Config::new(test.url(), test.store_key())?;

    Ok(RestStore::new(&config))
}
