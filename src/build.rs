//! Site building orchestration.
//!
//! ```text
//! build_site()
//!     │
//!     ├── prepare_output()      clean or create the output directory
//!     │
//!     ├── rayon::join
//!     │     ├── build_page()    resume.toml → Page → index.html
//!     │     └── copy_assets()   assets/** → output/**
//!     │
//!     └── build_sitemap()       sitemap.xml (optional)
//! ```

use crate::{
    config::SiteConfig,
    content::Resume,
    generator::build_sitemap,
    interact::Page,
    log,
    render::render_page,
    utils::{
        fs::{collect_all_files, is_up_to_date},
        minify::{Output, minify},
    },
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::Path};

/// Name of the rendered document inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// Build the whole site into `[build].output`.
///
/// If `config.build.clean` is true, clears the output directory first.
pub fn build_site(config: &SiteConfig) -> Result<()> {
    prepare_output(&config.build.output, config.build.clean)?;

    let (page_result, assets_result) = rayon::join(
        || build_page(config),
        || copy_assets(config),
    );

    page_result?;
    let copied = assets_result?;
    if copied > 0 {
        log!("assets"; "copied {copied} files");
    }

    build_sitemap(config)?;

    log!("build"; "done");
    Ok(())
}

/// Render the resume into `index.html`.
fn build_page(config: &SiteConfig) -> Result<()> {
    let resume = Resume::load_shared(&config.build.content)?;
    let page = Page::new(resume);

    let html = render_page(&page, config)?;
    let html = minify(Output::Page(html.as_bytes()), config);

    let path = config.build.output.join(INDEX_FILE);
    fs::write(&path, &*html).with_context(|| format!("Failed to write {}", path.display()))?;

    log!("page"; "{INDEX_FILE} ({} sections)", page.nav().order().len());
    Ok(())
}

/// Mirror the assets directory into the output. Returns the number of files
/// written; files already up to date are skipped unless cleaning.
fn copy_assets(config: &SiteConfig) -> Result<usize> {
    let assets = &config.build.assets;
    let output = &config.build.output;
    let clean = config.build.clean;

    collect_all_files(assets)
        .par_iter()
        .map(|source| -> Result<usize> {
            let relative = source.strip_prefix(assets)?;
            let dest = output.join(relative);

            if !clean && is_up_to_date(source, &dest) {
                return Ok(0);
            }
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(source, &dest)
                .with_context(|| format!("Failed to copy asset {}", relative.display()))?;
            Ok(1)
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))
}

/// Ensure the output directory exists, removing previous contents when
/// `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output).with_context(|| {
            format!("Failed to clear output directory: {}", output.display())
        })?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content::SAMPLE_RESUME, interact::Section};
    use tempfile::TempDir;

    fn site(dir: &TempDir) -> SiteConfig {
        let root = dir.path();
        fs::write(root.join("resume.toml"), SAMPLE_RESUME).unwrap();
        fs::create_dir_all(root.join("assets/img")).unwrap();
        fs::write(root.join("assets/img/avatar.png"), b"png").unwrap();

        let mut config = SiteConfig::default();
        config.build.content = root.join("resume.toml");
        config.build.assets = root.join("assets");
        config.build.output = root.join("public");
        config
    }

    #[test]
    fn test_build_writes_page_and_assets() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);

        build_site(&config).unwrap();

        let html = fs::read_to_string(config.build.output.join(INDEX_FILE)).unwrap();
        assert!(html.contains("Minh Le"));
        assert!(html.contains("data-copy-email"));
        assert!(config.build.output.join("img/avatar.png").is_file());
        assert!(!config.sitemap_path().exists());
    }

    #[test]
    fn test_minified_page_keeps_runtime() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        assert!(config.build.minify);

        build_site(&config).unwrap();

        let html = fs::read_to_string(config.build.output.join(INDEX_FILE)).unwrap();
        let start = html.rfind("<script>").unwrap() + "<script>".len();
        let end = html.rfind("</script>").unwrap();
        let script = &html[start..end];

        assert!(script.contains("Email copied to clipboard: "));
        assert!(script.contains("aria-current"));

        // section order survives minification
        let positions: Vec<_> = Section::ALL
            .iter()
            .map(|section| {
                let id = section.id();
                script
                    .find(&format!("\"{id}\""))
                    .or_else(|| script.find(&format!("'{id}'")))
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_build_unminified_is_readable_back() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        config.build.minify = false;

        build_site(&config).unwrap();

        let html = fs::read_to_string(config.build.output.join(INDEX_FILE)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<section id="contact""#));
    }

    #[test]
    fn test_build_with_sitemap() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        config.build.sitemap.enable = true;
        config.base.url = Some("https://minhle.dev".into());

        build_site(&config).unwrap();

        let xml = fs::read_to_string(config.sitemap_path()).unwrap();
        assert!(xml.contains("<loc>https://minhle.dev/</loc>"));
    }

    #[test]
    fn test_clean_removes_stale_files() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        fs::create_dir_all(&config.build.output).unwrap();
        fs::write(config.build.output.join("stale.html"), "old").unwrap();

        build_site(&config).unwrap();
        assert!(config.build.output.join("stale.html").exists());

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!config.build.output.join("stale.html").exists());
        assert!(config.build.output.join(INDEX_FILE).exists());
    }

    #[test]
    fn test_missing_assets_dir_is_fine() {
        let dir = TempDir::new().unwrap();
        let mut config = site(&dir);
        config.build.assets = dir.path().join("nope");

        assert_eq!(copy_assets(&config).unwrap(), 0);
    }

    #[test]
    fn test_invalid_content_fails() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        fs::write(&config.build.content, "[personal]\nname = 1\n").unwrap();

        assert!(build_site(&config).is_err());
    }

    #[test]
    fn test_assets_skipped_when_up_to_date() {
        let dir = TempDir::new().unwrap();
        let config = site(&dir);
        fs::create_dir_all(&config.build.output).unwrap();

        assert_eq!(copy_assets(&config).unwrap(), 1);
        assert_eq!(copy_assets(&config).unwrap(), 0);
    }
}
