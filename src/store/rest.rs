use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    config::Config,
    error::{Error, StoreError},
    store::{
        http::{HttpClient, HttpResponse},
        DataStore, Select,
    },
};

/// Path prefix of the PostgREST API on a hosted project.
pub static REST_PATH: &str = "/rest/v1";

/// [`DataStore`] speaking PostgREST over HTTP.
#[derive(Clone)]
pub struct RestStore {
    base_url: String,
    api_key: String,
    http: HttpClient,
}

impl RestStore {
    /// Creates a new instance of [`RestStore`]
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.store_url.clone(),
            api_key: config.store_key.clone(),
            http: HttpClient::default(),
        }
    }

    /// Build a store from the environment, see [`Config::from_env`].
    pub fn from_env() -> Result<Self, Error> {
        let config = Config::from_env()?;

        Ok(Self::new(&config))
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}{}/{}", self.base_url, REST_PATH, collection)
    }

    pub fn select_url(&self, query: &Select) -> String {
        format!(
            "{}?{}",
            self.collection_url(query.collection),
            query.query_string()
        )
    }

    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    fn check_status(collection: &str, response: HttpResponse) -> Result<HttpResponse, StoreError> {
        if response.is_success() {
            Ok(response)
        } else {
            Err(StoreError::Status {
                collection: collection.to_string(),
                status: response.status,
                body: response.body,
            })
        }
    }
}

impl DataStore for RestStore {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, StoreError> {
        let url = self.select_url(query);
        let auth = self.auth_header();
        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Authorization", auth.as_str()),
            ("Accept", "application/json"),
        ];

        tracing::debug!("Selecting rows from {}", query.collection);

        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(|reason| StoreError::Request {
                collection: query.collection.to_string(),
                reason,
            })?;
        let response = Self::check_status(query.collection, response)?;

        serde_json::from_str::<Vec<Value>>(&response.body).map_err(|source| StoreError::Parse {
            collection: query.collection.to_string(),
            source,
        })
    }

    async fn insert(&self, collection: &str, rows: Value) -> Result<(), StoreError> {
        let url = self.collection_url(collection);
        let auth = self.auth_header();
        let headers = [
            ("apikey", self.api_key.as_str()),
            ("Authorization", auth.as_str()),
            ("Content-Type", "application/json"),
            ("Prefer", "return=minimal"),
        ];

        tracing::debug!("Inserting rows into {}", collection);

        let response = self
            .http
            .post(&url, &headers, rows.to_string())
            .await
            .map_err(|reason| StoreError::Request {
                collection: collection.to_string(),
                reason,
            })?;
        Self::check_status(collection, response)?;

        Ok(())
    }
}
