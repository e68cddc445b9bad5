use std::fmt;

/// Page sections in scroll order. The id is both the anchor element id
/// and the nav item's deep-link fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Education,
    Skills,
    Experience,
    Projects,
    Awards,
    Contact,
}

impl Section {
    /// Fixed tracking order; ties in active-section detection go to the
    /// earlier entry.
    pub const ALL: [Section; 7] = [
        Self::About,
        Self::Education,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Awards,
        Self::Contact,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Awards => "awards",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Education => "Education",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Awards => "Awards",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
