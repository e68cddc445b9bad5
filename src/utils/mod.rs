//! Utility modules for the output pipeline.

pub mod fs;
pub mod minify;
