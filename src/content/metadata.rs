//! Document metadata derived from the resume.

use super::Resume;

/// Values written into `<head>`; fixed for the page's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub creator: String,
    pub open_graph: OpenGraph,
}

/// Social preview fields (`og:*`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub kind: String,
    pub locale: String,
}

impl SiteMetadata {
    pub fn from_resume(resume: &Resume) -> Self {
        let name = &resume.personal.name;
        let title = format!("{name} - {}", resume.meta.role);
        let description = resume.personal.bio.clone();

        let mut keywords = vec![name.clone()];
        for keyword in &resume.meta.keywords {
            if !keywords.contains(keyword) {
                keywords.push(keyword.clone());
            }
        }

        Self {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                kind: resume.meta.og_type.clone(),
                locale: resume.meta.locale.clone(),
            },
            title,
            description,
            keywords,
            author: name.clone(),
            creator: name.clone(),
        }
    }

    /// Comma separated, as expected by `<meta name="keywords">`.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}
