//! vitae - a generator for single-page portfolio sites.
//!
//! ```text
//! vitae.toml ─► config ─┐
//!                       ├─► build ─► render ─► public/index.html
//! resume.toml ► content ┘       │       ▲
//!                               │       └── interact (nav, toast model)
//!                               ├─► assets copy
//!                               └─► generator (sitemap.xml)
//! ```

pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod generator;
pub mod init;
pub mod interact;
pub mod logger;
pub mod render;
pub mod serve;
pub mod utils;
pub mod watch;
