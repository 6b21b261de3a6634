use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::record::{null_as_default, timestamp, RecordId};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}
