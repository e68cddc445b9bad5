//! Filesystem helpers for the output pipeline.

use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};
use walkdir::WalkDir;

/// OS metadata files that never belong in the output.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db", "desktop.ini"];

/// Every regular file below `dir`, skipping OS metadata files.
/// A missing directory yields nothing.
pub fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Whether `dst` exists and is at least as new as `src`.
pub fn is_up_to_date(src: &Path, dst: &Path) -> bool {
    let modified = |path: &Path| -> Option<SystemTime> { path.metadata().ok()?.modified().ok() };

    match (modified(src), modified(dst)) {
        (Some(src_time), Some(dst_time)) => src_time <= dst_time,
        _ => false,
    }
}
