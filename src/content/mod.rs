//! Resume content: model, loading, validation and derived metadata.
//!
//! ```text
//! resume.toml ──► Resume::from_path() ──► validate() ──► Arc<Resume>
//!                                                           │
//!                                      SiteMetadata ◄───────┤
//!                                      render::page ◄───────┤
//!                                      interact::Page ◄─────┘
//! ```

mod error;
mod metadata;
mod types;
mod validate;

pub use error::ContentError;
pub use metadata::{OpenGraph, SiteMetadata};
pub use types::{Award, Education, Experience, Meta, Personal, ProfileKind, Project, Resume, Skills};
pub use validate::{is_valid_email, validate};

use std::{fs, path::Path, sync::Arc};

/// Sample content written by `vitae init`.
pub const SAMPLE_RESUME: &str = include_str!("../embed/init/resume.toml");

impl Resume {
    /// Parse and validate resume content from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ContentError> {
        let resume: Resume = toml::from_str(content)?;
        validate(&resume)?;
        Ok(resume)
    }

    /// Load resume content from file path.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load and freeze for sharing across renderers.
    pub fn load_shared(path: &Path) -> Result<Arc<Self>, ContentError> {
        Self::from_path(path).map(Arc::new)
    }
}

#[cfg(test)]
pub(crate) fn sample_resume() -> Resume {
    Resume::from_str(SAMPLE_RESUME).unwrap()
}
