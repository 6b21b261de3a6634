//! Client for the hosted data store.
//!
//! The application only needs two operations from the store: read the rows of a named
//! collection (optionally ordered and limited) and append rows to a collection. They are
//! expressed by the [`DataStore`] trait so services can be exercised against any
//! implementation; [`RestStore`] is the PostgREST implementation used by the site.

pub mod http;
pub mod rest;
pub mod select;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::StoreError;

pub use rest::RestStore;
pub use select::{Order, Select};

/// Read/insert surface of a remote collection store.
#[allow(async_fn_in_trait)]
pub trait DataStore {
    /// Return the raw rows matched by `query`.
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError>;

    /// Append `rows` (a JSON object or array of objects) to `collection`.
    async fn insert(&self, collection: &str, rows: Value) -> Result<(), StoreError>;
}

/// An unconfigured store fails every call with [`StoreError::NotConfigured`].
impl<S: DataStore> DataStore for Option<S> {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError> {
        match self {
            Some(store) => store.select(query).await,
            None => Err(StoreError::NotConfigured),
        }
    }

    async fn insert(&self, collection: &str, rows: Value) -> Result<(), StoreError> {
        match self {
            Some(store) => store.insert(collection, rows).await,
            None => Err(StoreError::NotConfigured),
        }
    }
}

/// Fetch and decode every row matched by `query`.
pub async fn fetch_all<T, S>(store: &S, query: &Select) -> Result<Vec<T>, StoreError>
where
    T: DeserializeOwned,
    S: DataStore,
{
    let rows = store.select(query).await?;

    serde_json::from_value(Value::Array(rows)).map_err(|source| StoreError::Parse {
        collection: query.collection.to_string(),
        source,
    })
}

/// Fetch the first row matched by `query`, if any.
pub async fn fetch_one<T, S>(store: &S, query: Select) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: DataStore,
{
    let query = query.limit(1);
    let rows: Vec<T> = fetch_all(store, &query).await?;

    Ok(rows.into_iter().next())
}

/// Serialize `record` and append it to `collection`.
pub async fn insert_one<T, S>(store: &S, collection: &str, record: &T) -> Result<(), StoreError>
where
    T: Serialize,
    S: DataStore,
{
    let value = serde_json::to_value(record).map_err(|source| StoreError::Encode {
        collection: collection.to_string(),
        source,
    })?;

    store.insert(collection, Value::Array(vec![value])).await
}
