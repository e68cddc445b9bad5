//! Site initialization module.
//!
//! Scaffolds a new site with a commented config and sample resume:
//!
//! ```text
//! <root>/
//! ├── vitae.toml
//! ├── resume.toml
//! ├── assets/
//! └── .gitignore
//! ```

use crate::{config::SiteConfig, content::SAMPLE_RESUME, log};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Starter configuration written to the config path.
const CONFIG_TEMPLATE: &str = include_str!("embed/init/vitae.toml");

const IGNORE_FILE: &str = ".gitignore";

/// Create a new site at the configured root.
///
/// The root may be missing or empty; anything else is refused so existing
/// work is never overwritten.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let root = config.get_root();

    if !is_dir_empty(root)? {
        bail!(
            "`{}` is not empty. Use `vitae init <SITE_NAME>` to create in a subdirectory.",
            root.display()
        );
    }

    fs::create_dir_all(&config.build.assets)
        .with_context(|| format!("Failed to create {}", config.build.assets.display()))?;
    write_new(&config.config_path, CONFIG_TEMPLATE)?;
    write_new(&config.build.content, SAMPLE_RESUME)?;
    write_new(&root.join(IGNORE_FILE), &ignore_content(root, &config.build.output))?;

    log!("init"; "created site at {}", root.display());
    Ok(())
}

/// Check if a directory is completely empty
fn is_dir_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    Ok(fs::read_dir(path)?.next().is_none())
}

fn write_new(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Ignore the build output, anchored at the site root.
fn ignore_content(root: &Path, output: &Path) -> String {
    let rel = output.strip_prefix(root).unwrap_or(output);
    format!("/{}/\n", rel.display())
}
