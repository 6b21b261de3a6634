use serde::{Deserialize, Serialize};

use crate::model::record::null_as_default;

/// Avatar shown when the profile row has no `avatar_url`.
pub static DEFAULT_AVATAR: &str = "/assets/images/geo6.jpg";
/// Avatar shown while the sidebar avatar is flipped.
pub static FLIPPED_AVATAR: &str = "/assets/images/highlights/avatar-2.png";

static FALLBACK_NAME: &str = "Geo Cherian Mathew";
static FALLBACK_ROLE: &str = "AI & IoT Developer | CSE Student";
static FALLBACK_BIO: &str = "I'm a passionate Computer Science and Engineering student from India, specializing in AI, hardware-software integration, and IoT solutions. I excel at transforming complex real-world challenges into innovative, scalable prototypes that deliver measurable impact.\n\nMy expertise spans embedded systems, artificial intelligence, and full-stack development. I'm driven by the mission to build impactful solutions for agriculture, safety, healthcare, and education.";
static FALLBACK_LOCATION: &str = "Kerala, India";
static FALLBACK_EMAIL: &str = "geomathewprojects28@gmail.com";

/// The site owner's profile, stored as the single row of the `profiles` collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Profile rendered when the store returns no profile row.
    pub fn fallback() -> Self {
        Self {
            name: FALLBACK_NAME.to_string(),
            role: FALLBACK_ROLE.to_string(),
            bio: Some(FALLBACK_BIO.to_string()),
            location: Some(FALLBACK_LOCATION.to_string()),
            email: Some(FALLBACK_EMAIL.to_string()),
            avatar_url: None,
        }
    }

    /// Biography split into paragraphs on blank lines.
    pub fn bio_paragraphs(&self) -> Vec<&str> {
        self.bio
            .as_deref()
            .map(|bio| {
                bio.split("\n\n")
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Avatar to display, honouring the flip toggle.
    pub fn avatar(&self, flipped: bool) -> &str {
        if flipped {
            FLIPPED_AVATAR
        } else {
            self.avatar_url.as_deref().unwrap_or(DEFAULT_AVATAR)
        }
    }
}

/// External profile links shown in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialNetwork {
    Github,
    Linkedin,
    Instagram,
    Leetcode,
}

pub static SOCIAL_LINKS: [(SocialNetwork, &str); 4] = [
    (
        SocialNetwork::Github,
        "https://github.com/geo-cherian-mathew-2k28",
    ),
    (
        SocialNetwork::Linkedin,
        "https://linkedin.com/in/geo-cherian-mathew",
    ),
    (
        SocialNetwork::Instagram,
        "https://instagram.com/_geo_cherian_mathew_",
    ),
    (
        SocialNetwork::Leetcode,
        "https://leetcode.com/u/geo_cherian_mathew/",
    ),
];
