//! Auxiliary output files generated next to the page.

mod sitemap;

pub use sitemap::build_sitemap;
