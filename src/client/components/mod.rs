pub mod about;
pub mod certificates;
pub mod contact;
pub mod empty_state;
pub mod filter;
pub mod gallery;
pub mod modal;
pub mod navbar;
pub mod portfolio;
pub mod projects;
pub mod resume;
pub mod sidebar;
pub mod toaster;

pub use about::About;
pub use certificates::Certificates;
pub use contact::Contact;
pub use empty_state::EmptyState;
pub use filter::CategoryFilterControls;
pub use gallery::Gallery;
pub use modal::{HighlightModal, Lightbox};
pub use navbar::Navbar;
pub use portfolio::Portfolio;
pub use projects::Projects;
pub use resume::Resume;
pub use sidebar::Sidebar;
pub use toaster::Toaster;

use crate::state::{Tab, ViewState};

/// Class list of a tab's `article`, marking it active when selected.
pub(crate) fn article_class(state: &ViewState, tab: Tab, base: &str) -> String {
    if state.is_active(tab) {
        format!("{} active", base)
    } else {
        base.to_string()
    }
}
