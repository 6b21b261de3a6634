/// Message shown when the project or certificate list has nothing to show.
pub static NOTHING_HERE: &str = "Nothing here";
/// Message shown when there are no education records.
pub static NO_EDUCATION: &str = "No education records added yet.";

/// A list rendered from one store collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Projects,
    Certificates,
    Education,
    Experience,
    Skills,
    Gallery,
}

impl Section {
    /// Message rendered in place of the list when it is empty. Sections without one render
    /// an empty list.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self {
            Section::Projects | Section::Certificates => Some(NOTHING_HERE),
            Section::Education => Some(NO_EDUCATION),
            Section::Experience | Section::Skills | Section::Gallery => None,
        }
    }

    /// Placeholder for a list currently showing `visible` entries.
    pub fn placeholder(&self, visible: usize) -> Option<&'static str> {
        if visible == 0 {
            self.empty_message()
        } else {
            None
        }
    }
}
