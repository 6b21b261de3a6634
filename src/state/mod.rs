//! Client-side view state and its transitions.
//!
//! Kept free of any framework type so every transition can be unit tested; the Dioxus tree
//! wraps [`ViewState`] and [`Notifications`] in signals.

pub mod filter;
pub mod notification;
pub mod section;
pub mod tab;
pub mod view;

pub use filter::{CategoryFilter, ALL_CATEGORIES, CERTIFICATE_CATEGORIES, PROJECT_CATEGORIES};
pub use notification::{Notification, NotificationKind, Notifications};
pub use section::{Section, NOTHING_HERE, NO_EDUCATION};
pub use tab::Tab;
pub use view::{FilterKind, ViewState};
