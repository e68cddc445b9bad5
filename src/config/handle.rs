//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement,
//! so `vitae.toml` can be edited while `vitae serve` is running.
//!
//! ```text
//!   HTTP thread            watcher thread
//!      cfg()  ◄── ArcSwap ──  reload_config()
//!   (lock-free)             (atomic replace)
//! ```

use super::SiteConfig;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use std::{
    fs,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

/// Global config storage, replaced with the loaded config in main.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Truncated blake3 hash of the config file content last loaded.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

/// Get current config as `Arc<SiteConfig>`. Wait-free.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Initialize global config (called once at startup).
pub fn init_config(config: SiteConfig) {
    if let Ok(content) = fs::read_to_string(&config.config_path) {
        CONFIG_HASH.store(hash_content(&content), Ordering::Relaxed);
    }
    CONFIG.store(Arc::new(config));
}

/// Replace config atomically when `vitae.toml` changed on disk.
///
/// Returns `true` if the config was replaced, `false` if the content hash
/// matches the last load (editors often touch files without changing them).
/// Readers that already hold the old `Arc` keep using it.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let cli = current
        .cli
        .context("config reloaded before CLI was attached")?;

    let content = fs::read_to_string(&current.config_path)
        .with_context(|| format!("Failed to read {}", current.config_path.display()))?;

    let new_hash = hash_content(&content);
    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = SiteConfig::load(cli)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

/// First 8 bytes of the blake3 digest.
fn hash_content(content: &str) -> u64 {
    let digest = blake3::hash(content.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_content_stable() {
        assert_eq!(hash_content("[base]"), hash_content("[base]"));
        assert_ne!(hash_content("[base]"), hash_content("[build]"));
    }
}
