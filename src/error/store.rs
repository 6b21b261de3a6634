use thiserror::Error;

/// Failure while reading from or writing to the remote data store.
///
/// The application does not branch on the variant: every load failure falls back to the
/// default view and every write failure takes the caller's single failure path. The variants
/// exist so the logged message says what actually went wrong.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request never produced a response (network failure, CORS, DNS).
    #[error("Failed to send request to {collection:?}: {reason}")]
    Request { collection: String, reason: String },
    /// The store answered with a non-success status code.
    #[error("Request to {collection:?} failed with status {status}: {body}")]
    Status {
        collection: String,
        status: u16,
        body: String,
    },
    /// The response body could not be decoded into the expected records.
    #[error("Failed to parse rows from {collection:?}: {source}")]
    Parse {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
    /// Records could not be encoded into a request body.
    #[error("Failed to encode rows for {collection:?}: {source}")]
    Encode {
        collection: String,
        #[source]
        source: serde_json::Error,
    },
    /// No store connection was configured for this build.
    #[error("Data store is not configured")]
    NotConfigured,
}
