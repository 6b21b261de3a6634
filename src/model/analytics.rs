use serde::{Deserialize, Serialize};

/// Page name recorded with every page view.
pub static PAGE_NAME: &str = "portfolio";

/// Which project link the visitor followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Github,
    Live,
}

/// Row appended to the `analytics` collection.
///
/// Serialized as `{"type": "<tag>", "details": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView {
        page: String,
        referrer: String,
        user_agent: String,
    },
    ProjectView {
        title: String,
        link: LinkKind,
    },
}

impl AnalyticsEvent {
    pub fn page_view(referrer: impl Into<String>, user_agent: impl Into<String>) -> Self {
        AnalyticsEvent::PageView {
            page: PAGE_NAME.to_string(),
            referrer: referrer.into(),
            user_agent: user_agent.into(),
        }
    }

    pub fn project_view(title: impl Into<String>, link: LinkKind) -> Self {
        AnalyticsEvent::ProjectView {
            title: title.into(),
            link,
        }
    }
}
