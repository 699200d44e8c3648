//! Maximum depth of a directory tree.
//!
//! A leaf (regular file, symlink, special file, empty or unlistable
//! directory) has depth 1. A listable directory with entries has depth
//! `1 + max(depth(child))`. Symlinks are never followed, the root included,
//! so link cycles cannot be entered.

use anyhow::Context;
use std::fmt;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

pub fn max_depth(path: &Path) -> anyhow::Result<usize> {
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("failed to inspect {}", path.display()))?;
    if !metadata.is_dir() {
        return Ok(1);
    }

    let walker = WalkDir::new(path)
        .follow_links(false)
        .follow_root_links(false)
        .min_depth(1);
    Ok(depth_from_entries(
        walker.into_iter().map(|entry| entry.map(|e| e.depth())),
    ))
}

/// Folds walk results (entry depth below the root, or a walk error) into the
/// depth of the root.
///
/// Entry depth counts edges from the root, so the deepest entry plus the root
/// itself is the node count of the longest branch. With links unfollowed the
/// only failures past the root are directory listings; such a directory has
/// already been yielded as an entry and counts as empty.
fn depth_from_entries<E: fmt::Display>(
    entries: impl IntoIterator<Item = Result<usize, E>>,
) -> usize {
    let mut deepest = 0usize;
    for entry in entries {
        match entry {
            Ok(depth) => deepest = deepest.max(depth),
            Err(err) => tracing::debug!(
                error = %err,
                "directory not listable, treating it as a leaf"
            ),
        }
    }
    1 + deepest
}
