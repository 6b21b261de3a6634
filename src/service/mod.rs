//! Operations the view performs against the data store.
//!
//! - `loader` - the concurrent read batch issued once per mount
//! - `contact` - the contact form submission
//! - `analytics` - best-effort page view and project click events

pub mod analytics;
pub mod contact;
pub mod loader;
