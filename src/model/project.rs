use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::record::{null_as_default, timestamp, Categorized, RecordId};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub live_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Card subtitle: the description, or the category when there is none.
    pub fn subtitle(&self) -> Option<&str> {
        non_empty(self.description.as_deref()).or(non_empty(self.category.as_deref()))
    }

    pub fn github_link(&self) -> Option<&str> {
        non_empty(self.github_link.as_deref())
    }

    pub fn live_link(&self) -> Option<&str> {
        non_empty(self.live_link.as_deref())
    }
}

impl Categorized for Project {
    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_live_link_leaves_github_link_intact() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Crop Doctor",
                "category": "AI & Software",
                "github_link": "https://github.com/example/crop-doctor",
                "created_at": "2024-11-25T10:00:00+00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(
            project.github_link(),
            Some("https://github.com/example/crop-doctor")
        );
        assert_eq!(project.live_link(), None);
        assert_eq!(project.subtitle(), Some("AI & Software"));
        assert!(project.created_at.is_some());
    }

    #[test]
    fn blank_links_count_as_absent() {
        let project = Project {
            live_link: Some("  ".to_string()),
            description: Some("Road safety helmet".to_string()),
            ..Default::default()
        };

        assert_eq!(project.live_link(), None);
        assert_eq!(project.subtitle(), Some("Road safety helmet"));
    }

    #[test]
    fn null_title_and_naive_timestamp_decode() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 5,
                "title": null,
                "category": null,
                "created_at": "2024-11-25T10:00:00.123456"
            }"#,
        )
        .unwrap();

        assert_eq!(project.title, "");
        assert_eq!(project.subtitle(), None);
        assert!(project.created_at.is_some());
    }
}
