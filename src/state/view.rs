use crate::{
    model::{Highlight, HIGHLIGHTS},
    state::{filter::CategoryFilter, tab::Tab},
};

/// Which of the two category filters a control drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Projects,
    Certificates,
}

/// All transient UI state of the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub active_tab: Tab,
    pub sidebar_expanded: bool,
    pub avatar_flipped: bool,
    pub projects: CategoryFilter,
    pub certificates: CategoryFilter,
    lightbox: Option<String>,
    highlight: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_tab: Tab::default(),
            sidebar_expanded: false,
            avatar_flipped: false,
            projects: CategoryFilter::projects(),
            certificates: CategoryFilter::certificates(),
            lightbox: None,
            highlight: None,
        }
    }
}

impl ViewState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_expanded = !self.sidebar_expanded;
    }

    pub fn flip_avatar(&mut self) {
        self.avatar_flipped = !self.avatar_flipped;
    }

    pub fn filter(&self, kind: FilterKind) -> &CategoryFilter {
        match kind {
            FilterKind::Projects => &self.projects,
            FilterKind::Certificates => &self.certificates,
        }
    }

    pub fn filter_mut(&mut self, kind: FilterKind) -> &mut CategoryFilter {
        match kind {
            FilterKind::Projects => &mut self.projects,
            FilterKind::Certificates => &mut self.certificates,
        }
    }

    /// Show `image` in the lightbox, replacing any image already open.
    /// An empty reference closes the lightbox.
    pub fn open_image(&mut self, image: &str) {
        self.lightbox = if image.trim().is_empty() {
            None
        } else {
            Some(image.to_string())
        };
    }

    pub fn close_image(&mut self) {
        self.lightbox = None;
    }

    pub fn lightbox(&self) -> Option<&str> {
        self.lightbox.as_deref()
    }

    /// Open the dialog of the highlight at `index`. Out of range indices close it.
    pub fn open_highlight(&mut self, index: usize) {
        self.highlight = (index < HIGHLIGHTS.len()).then_some(index);
    }

    pub fn close_highlight(&mut self) {
        self.highlight = None;
    }

    pub fn highlight(&self) -> Option<&'static Highlight> {
        self.highlight.and_then(|index| HIGHLIGHTS.get(index))
    }
}
