//! File system watcher for live rebuild during `vitae serve`.
//!
//! ```text
//! notify events ──► Debouncer (300ms) ──► handle_changes()
//!                                           ├─ config  → reload_config() → build
//!                                           ├─ content → build
//!                                           └─ assets  → build
//! ```
//!
//! A rebuild starts an 800ms cooldown during which new events are dropped;
//! the build itself touches the output directory and editors often emit
//! trailing events.

use crate::{
    build::build_site,
    config::{SiteConfig, cfg, reload_config},
    log,
};
use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    sync::mpsc::{self, RecvTimeoutError},
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;
const REBUILD_COOLDOWN_MS: u64 = 800;

/// What a changed path means for the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Config,
    Content,
    Asset,
    Unrelated,
}

fn categorize(path: &Path, config: &SiteConfig) -> Change {
    if path == config.config_path {
        Change::Config
    } else if path == config.build.content {
        Change::Content
    } else if path.starts_with(&config.build.assets) {
        Change::Asset
    } else {
        Change::Unrelated
    }
}

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

/// `/site/assets/img/a.png` → `assets/img/a.png`
fn rel_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events with debouncing and rebuild cooldown.
struct Debouncer {
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    fn new() -> Self {
        Self {
            pending: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    fn in_cooldown(&self) -> bool {
        self.last_rebuild
            .is_some_and(|t| t.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS))
    }

    fn add(&mut self, paths: impl IntoIterator<Item = PathBuf>) {
        self.pending
            .extend(paths.into_iter().filter(|path| !is_temp_file(path)));
        self.last_event = Some(Instant::now());
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn mark_rebuild(&mut self) {
        self.last_rebuild = Some(Instant::now());
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Rebuild for a batch of changed paths. Returns true if a build ran and
/// succeeded (for cooldown tracking).
fn handle_changes(paths: &[PathBuf]) -> bool {
    let config = cfg();
    let root = config.get_root();

    let mut config_changed = false;
    let mut triggers = Vec::new();
    for path in paths {
        match categorize(path, &config) {
            Change::Config => config_changed = true,
            Change::Content | Change::Asset => triggers.push(rel_path(path, root)),
            Change::Unrelated => {}
        }
    }

    if config_changed {
        match reload_config() {
            Ok(true) => triggers.insert(0, rel_path(&config.config_path, root)),
            Ok(false) => {}
            Err(e) => {
                log!("watch"; "config reload failed, keeping previous config");
                log!("error"; "{e:#}");
                return false;
            }
        }
    }

    if triggers.is_empty() {
        return false;
    }

    log!("watch"; "{} changed, rebuilding...", triggers.join(", "));
    match build_site(&cfg()) {
        Ok(()) => true,
        Err(e) => {
            log!("watch"; "build failed");
            log!("error"; "{e:#}");
            false
        }
    }
}

// =============================================================================
// Watcher Setup
// =============================================================================

/// Directories to watch. The config and content files are watched through
/// their parent directory so editors that replace files on save are seen.
fn watch_targets(config: &SiteConfig) -> Vec<(PathBuf, RecursiveMode)> {
    let mut seen = FxHashSet::default();
    let mut targets = Vec::new();

    for file in [&config.config_path, &config.build.content] {
        if let Some(parent) = file.parent()
            && parent.exists()
            && seen.insert(parent.to_path_buf())
        {
            targets.push((parent.to_path_buf(), RecursiveMode::NonRecursive));
        }
    }

    if config.build.assets.exists() {
        targets.push((config.build.assets.clone(), RecursiveMode::Recursive));
    }

    targets
}

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

/// Start blocking file watcher with debouncing and live rebuild.
pub fn watch_for_changes_blocking() -> Result<()> {
    let config = cfg();
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;

    let root = config.get_root();
    let mut watched = Vec::new();
    for (path, mode) in watch_targets(&config) {
        watcher
            .watch(&path, mode)
            .with_context(|| format!("Failed to watch {}", path.display()))?;
        watched.push(rel_path(&path, root));
    }
    log!("watch"; "watching {}", watched.join(", "));

    let mut debouncer = Debouncer::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) && !debouncer.in_cooldown() => {
                debouncer.add(event.paths);
            }
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(RecvTimeoutError::Timeout) if debouncer.ready() => {
                if handle_changes(&debouncer.take()) {
                    debouncer.mark_rebuild();
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}
