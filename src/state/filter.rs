use crate::model::Categorized;

/// Sentinel label that disables filtering.
pub static ALL_CATEGORIES: &str = "all";

pub static PROJECT_CATEGORIES: [&str; 4] =
    ["all", "AI & Software", "IoT & Hardware", "Social Impact"];

pub static CERTIFICATE_CATEGORIES: [&str; 6] = [
    "all",
    "Course Certificates",
    "Achievement Certificates",
    "Participation",
    "Volunteers",
    "Others",
];

/// Selected category for one list, shared by its inline buttons and its dropdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    labels: &'static [&'static str],
    selected: String,
    dropdown_open: bool,
}

impl CategoryFilter {
    pub fn new(labels: &'static [&'static str]) -> Self {
        Self {
            labels,
            selected: ALL_CATEGORIES.to_string(),
            dropdown_open: false,
        }
    }

    pub fn projects() -> Self {
        Self::new(&PROJECT_CATEGORIES)
    }

    pub fn certificates() -> Self {
        Self::new(&CERTIFICATE_CATEGORIES)
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Selected label, trimmed and lowercased.
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn is_selected(&self, label: &str) -> bool {
        normalize(label) == self.selected
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Select `label` and close the dropdown.
    pub fn select(&mut self, label: &str) {
        self.selected = normalize(label);
        self.dropdown_open = false;
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    /// Caption of the collapsed dropdown.
    pub fn caption(&self) -> &str {
        if self.selected == ALL_CATEGORIES {
            "Select category"
        } else {
            &self.selected
        }
    }

    /// Items visible under the current selection, in their original order.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.selected == ALL_CATEGORIES {
            return items.iter().collect();
        }

        items
            .iter()
            .filter(|item| normalize(item.category().unwrap_or("")) == self.selected)
            .collect()
    }
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}
