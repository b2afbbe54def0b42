/// Sections of the single page, top to bottom.
pub const PAGE_SECTIONS: [Section; 6] = [
    Section::Home,
    Section::About,
    Section::Experience,
    Section::Skills,
    Section::Education,
    Section::Achievements,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Education,
    Achievements,
}

impl Section {
    /// Element id, `data-section` value and nav fragment
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Achievements => "achievements",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Achievements => "Achievements",
        }
    }

    pub fn href(self) -> String {
        format!("/#{}", self.anchor())
    }
}
