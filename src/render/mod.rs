//! Static HTML rendering of the portfolio page.
//!
//! ```text
//! Page (Arc<Resume> + NavController + Toast)
//!   └─ render_page()
//!        ├─ head      metadata, og:*, inline stylesheet
//!        ├─ nav       brand, desktop + mobile items, menu toggle
//!        ├─ sections  about · education · skills · experience ·
//!        │            projects · awards · contact
//!        ├─ footer    copyright
//!        ├─ toast     live region
//!        └─ runtime   inline script bound to the same constants
//! ```
//!
//! Markup is produced with a `quick_xml::Writer`, so every text node and
//! attribute value is escaped.

mod components;
mod head;
mod icons;
mod nav;
mod page;
mod runtime;
mod sections;
pub mod writer;

#[cfg(test)]
mod testing;

pub use components::{award_card, experience_card, project_card, skill_badge};
pub use page::render_page;
pub use runtime::runtime_script;
