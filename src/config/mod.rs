//! Site configuration management for `vitae.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Public URL, page language, footer copyright    |
//! | `[build]`   | Content file, output, assets, minify, sitemap  |
//! | `[serve]`   | Development server (port, interface, watch)    |
//!
//! The resume itself lives in a separate content file (`[build].content`),
//! see [`crate::content`].
//!
//! # Example
//!
//! ```toml
//! [base]
//! url = "https://alice.dev"
//!
//! [build]
//! content = "resume.toml"
//! output = "public"
//!
//! [build.sitemap]
//! enable = true
//!
//! [serve]
//! port = 5277
//! ```

mod base;
mod build;
pub mod defaults;
mod error;
mod handle;
mod serve;

pub use base::BaseConfig;
pub use build::{BuildConfig, SitemapConfig};
pub use error::ConfigError;
pub use handle::{cfg, init_config, reload_config};
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing vitae.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// CLI arguments reference
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub base: BaseConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load the config file named by the CLI, apply overrides and validate.
    ///
    /// A missing file yields the default config so `init` can run; every
    /// other command rejects it during validation.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path of the sitemap inside the output directory
    pub fn sitemap_path(&self) -> PathBuf {
        self.build.output.join(&self.build.sitemap.path)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &'static Cli) {
        self.cli = Some(cli);

        let base = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => base.join(name),
            _ => base,
        };

        self.update_path_with_root(&root, cli);

        if let Some(args) = cli.build_args() {
            self.build.clean |= args.clean;
            Self::update_option(&mut self.build.minify, args.minify.as_ref());
            Self::update_option(&mut self.build.sitemap.enable, args.sitemap.as_ref());
            if args.base_url.is_some() {
                self.base.url = args.base_url.clone();
            }
        }

        if let Commands::Serve {
            interface,
            port,
            watch,
            ..
        } = &cli.command
        {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            Self::update_option(&mut self.serve.watch, watch.as_ref());
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths against the root directory and make them absolute
    fn update_path_with_root(&mut self, root: &Path, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.assets, cli.assets.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        let root = Self::normalize_path(root);
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.assets = Self::normalize_path(&root.join(&self.build.assets));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration for a building command
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if self.build.sitemap.enable && self.base.url.is_none() {
            bail!(ConfigError::Validation(
                "[base.url] is required for sitemap generation".into()
            ));
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if !self.build.content.is_file() {
            bail!(ConfigError::Validation(format!(
                "content file `{}` not found",
                self.build.content.display()
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn leak_cli(args: &[&str]) -> &'static Cli {
        Box::leak(Box::new(Cli::parse_from(args)))
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\nurl = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [deploy]
            provider = "github"
        "#;
        assert!(SiteConfig::from_str(config).is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_load_applies_cli_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vitae.toml"), "[build]\nminify = true\n").unwrap();
        fs::write(dir.path().join("resume.toml"), "").unwrap();

        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&[
            "vitae", "--root", root, "serve", "--minify", "false", "-p", "9000",
            "--base-url", "https://alice.dev",
        ]);
        let config = SiteConfig::load(cli).unwrap();

        assert!(!config.build.minify);
        assert_eq!(config.serve.port, 9000);
        assert_eq!(config.base.url.as_deref(), Some("https://alice.dev"));
        assert!(config.build.output.is_absolute());
        assert!(config.build.output.ends_with("public"));
        assert!(config.build.content.ends_with("resume.toml"));
    }

    #[test]
    fn test_load_missing_config_fails_for_build() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["vitae", "--root", root, "build"]);

        let err = SiteConfig::load(cli).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_missing_config_allowed_for_init() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["vitae", "--root", root, "init", "site"]);

        let config = SiteConfig::load(cli).unwrap();
        assert!(config.get_root().ends_with("site"));
    }

    #[test]
    fn test_validate_sitemap_requires_url() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vitae.toml"), "[build.sitemap]\nenable = true\n").unwrap();
        fs::write(dir.path().join("resume.toml"), "").unwrap();

        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["vitae", "--root", root, "build"]);

        let err = SiteConfig::load(cli).unwrap_err();
        assert!(format!("{err}").contains("[base.url] is required"));
    }

    #[test]
    fn test_validate_url_scheme() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vitae.toml"), "[base]\nurl = \"alice.dev\"\n").unwrap();
        fs::write(dir.path().join("resume.toml"), "").unwrap();

        let root = dir.path().to_str().unwrap();
        let cli = leak_cli(&["vitae", "--root", root, "build"]);

        let err = SiteConfig::load(cli).unwrap_err();
        assert!(format!("{err}").contains("must start with http"));
    }

    #[test]
    fn test_sitemap_path_inside_output() {
        let mut config = SiteConfig::default();
        config.build.output = PathBuf::from("/site/public");

        assert_eq!(config.sitemap_path(), PathBuf::from("/site/public/sitemap.xml"));
    }
}
