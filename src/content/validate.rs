//! Load-time checks that serde cannot express.
//!
//! Titles double as list keys, so duplicates are rejected. The email feeds
//! both a `mailto:` link and the clipboard, so it must look like an address.

use super::{ContentError, Resume};
use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap());

/// Run every check, stopping at the first violation.
pub fn validate(resume: &Resume) -> Result<(), ContentError> {
    let personal = &resume.personal;

    if !is_valid_email(&personal.email) {
        return Err(ContentError::InvalidEmail(personal.email.clone()));
    }

    check_link("personal.linkedin", &personal.linkedin)?;
    check_link("personal.github", &personal.github)?;
    if let Some(website) = &personal.website {
        check_link("personal.website", website)?;
    }
    for project in &resume.projects {
        check_link("projects.link", &project.link)?;
    }

    check_unique("experiences", resume.experiences.iter().map(|e| e.title.as_str()))?;
    check_unique("projects", resume.projects.iter().map(|p| p.title.as_str()))?;
    check_unique("awards", resume.awards.iter().map(|a| a.title.as_str()))?;

    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

fn check_link(field: &'static str, url: &str) -> Result<(), ContentError> {
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(())
    } else {
        Err(ContentError::InvalidLink {
            field,
            url: url.to_string(),
        })
    }
}

fn check_unique<'a>(
    list: &'static str,
    titles: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = FxHashSet::default();
    for title in titles {
        if !seen.insert(title) {
            return Err(ContentError::DuplicateTitle {
                list,
                title: title.to_string(),
            });
        }
    }
    Ok(())
}
