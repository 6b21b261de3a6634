use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Primary key of a store row.
///
/// Tables created through the hosted dashboard use either `bigint` identity columns or
/// `uuid` columns, so both shapes are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Int(0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// Decode a nullable column into a non-optional field, taking the type's default for `null`.
///
/// Pair with `#[serde(default)]` so a missing column is handled the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a `timestamptz` or `timestamp` column. Values without an offset are taken as UTC.
pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }

    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| Some(naive.and_utc()))
        .map_err(|err| de::Error::custom(format!("invalid timestamp {:?}: {}", raw, err)))
}

/// A record that carries a free-form category label.
pub trait Categorized {
    fn category(&self) -> Option<&str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "null_as_default")]
        id: RecordId,
        #[serde(default, deserialize_with = "null_as_default")]
        title: String,
        #[serde(default, deserialize_with = "timestamp")]
        created_at: Option<DateTime<Utc>>,
    }

    #[test]
    fn accepts_integer_and_uuid_ids() {
        let ids: Vec<RecordId> =
            serde_json::from_str(r#"[7, "3f1c2a9e-0000-4000-8000-000000000001"]"#).unwrap();

        assert_eq!(ids[0], RecordId::Int(7));
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(
            ids[1].to_string(),
            "3f1c2a9e-0000-4000-8000-000000000001"
        );
    }

    #[test]
    fn null_columns_take_defaults() {
        let row: Row =
            serde_json::from_str(r#"{"id": null, "title": null, "created_at": null}"#).unwrap();

        assert_eq!(row.id, RecordId::default());
        assert_eq!(row.title, "");
        assert_eq!(row.created_at, None);
    }

    #[test]
    fn missing_columns_take_defaults() {
        let row: Row = serde_json::from_str("{}").unwrap();

        assert_eq!(row.title, "");
        assert_eq!(row.created_at, None);
    }

    #[test]
    fn timestamps_with_and_without_offset_decode() {
        let with_offset: Row =
            serde_json::from_str(r#"{"created_at": "2024-11-25T10:00:00.123456+00:00"}"#).unwrap();
        let naive: Row =
            serde_json::from_str(r#"{"created_at": "2024-11-25T10:00:00.123456"}"#).unwrap();

        assert!(with_offset.created_at.is_some());
        assert_eq!(naive.created_at, with_offset.created_at);
    }

    #[test]
    fn malformed_timestamp_is_rejected() {
        let result = serde_json::from_str::<Row>(r#"{"created_at": "yesterday"}"#);

        assert!(result.is_err());
    }
}
