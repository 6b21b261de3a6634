//! Records consumed from and written to the remote data store.
//!
//! Every read record derives `Deserialize` with optional columns as `Option<T>` and
//! `#[serde(default)]`, so a row missing a column decodes instead of failing the batch.

pub mod analytics;
pub mod certificate;
pub mod gallery;
pub mod highlight;
pub mod message;
pub mod profile;
pub mod project;
pub mod record;
pub mod resume;

pub use analytics::{AnalyticsEvent, LinkKind};
pub use certificate::Certificate;
pub use gallery::GalleryItem;
pub use highlight::{Highlight, HIGHLIGHTS};
pub use message::NewMessage;
pub use profile::Profile;
pub use project::Project;
pub use record::{Categorized, RecordId};
pub use resume::{EducationEntry, ExperienceEntry, Skill};
