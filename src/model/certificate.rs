use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    project::non_empty,
    record::{null_as_default, timestamp, Categorized, RecordId},
};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Certificate {
    /// Card subtitle: the description, or the issuer when there is none.
    pub fn subtitle(&self) -> Option<&str> {
        non_empty(self.description.as_deref()).or(non_empty(self.issuer.as_deref()))
    }
}

impl Categorized for Certificate {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
