//! Resume content model.
//!
//! Deserialized once from the content file and shared read-only
//! (`Arc<Resume>`) by every renderer and by the interaction model.

use crate::config::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// The whole resume, one value per site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resume {
    pub personal: Personal,
    pub education: Education,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub meta: Meta,
}

/// `[personal]` - identity and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Personal {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    /// Used both as `mailto:` target and as the clipboard payload.
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    #[serde(default)]
    pub website: Option<String>,
    /// Paragraph shown in the contact section.
    #[serde(default = "defaults::content::contact_note")]
    pub contact_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    /// Kept as text, e.g. "3.85".
    pub gpa: String,
    pub location: String,
    /// Free text, e.g. "Expected Dec 2026".
    pub graduation: String,
    #[serde(default)]
    pub coursework: Vec<String>,
}

/// Two badge groups; order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    /// List key, unique within `experiences`.
    pub title: String,
    pub company: String,
    /// Free text date range.
    pub period: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// List key, unique within `projects`.
    pub title: String,
    /// Free text, e.g. "C++, CUDA, OpenMPI".
    pub technologies: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Award {
    /// List key, unique within `awards`.
    pub title: String,
    pub subtitle: String,
}

/// `[meta]` - inputs for document metadata that are not resume facts.
#[derive(Debug, Clone, PartialEq, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct Meta {
    /// Appended to the name in the page title: "Alice - Software Engineer".
    #[serde(default = "defaults::content::role")]
    #[educe(Default = defaults::content::role())]
    pub role: String,

    /// Extra keywords; the name is always the first keyword.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Open Graph locale.
    #[serde(default = "defaults::content::locale")]
    #[educe(Default = defaults::content::locale())]
    pub locale: String,

    /// Open Graph type.
    #[serde(default = "defaults::content::og_type")]
    #[educe(Default = defaults::content::og_type())]
    pub og_type: String,
}

/// External profile shown as an icon link in the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    LinkedIn,
    GitHub,
    Website,
}

impl ProfileKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
            Self::Website => "Website",
        }
    }
}

impl Personal {
    /// Profile links in display order; the website only when set.
    pub fn profile_links(&self) -> Vec<(ProfileKind, &str)> {
        let mut links = vec![
            (ProfileKind::LinkedIn, self.linkedin.as_str()),
            (ProfileKind::GitHub, self.github.as_str()),
        ];
        if let Some(website) = &self.website {
            links.push((ProfileKind::Website, website.as_str()));
        }
        links
    }

    /// Initials used as the navigation brand, e.g. "Minh Le" → "ML".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}
