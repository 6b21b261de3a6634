/// Top-level sections of the page. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    About,
    Resume,
    Projects,
    Certificates,
    Gallery,
    Contact,
}

impl Tab {
    /// Navigation order.
    pub const ALL: [Tab; 6] = [
        Tab::About,
        Tab::Resume,
        Tab::Projects,
        Tab::Certificates,
        Tab::Gallery,
        Tab::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::About => "About",
            Tab::Resume => "Resume",
            Tab::Projects => "Projects",
            Tab::Certificates => "Certificates",
            Tab::Gallery => "Gallery",
            Tab::Contact => "Contact",
        }
    }
}
