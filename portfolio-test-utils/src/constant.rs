//! Constants shared by all tests.

/// Anonymous API key the mock store expects on every request.
///
/// Placeholder value, not a real credential.
pub static TEST_STORE_KEY: &str = "test-anon-key";

/// Path prefix of the mocked PostgREST API.
pub static TEST_REST_PATH: &str = "/rest/v1";
