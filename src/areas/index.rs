//! Staging set (index)
//!
//! The index is the ordered list of file paths staged for inclusion in the
//! next snapshot. Paths are unique and keep the order of first addition,
//! which makes snapshot hashing deterministic.
//!
//! ## Index File Format
//!
//! One tracked relative path per line, insertion order, nothing else. The
//! file is created empty at repository initialization and rewritten whole on
//! every mutation; there is no remove operation.

use anyhow::Context;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (`.jot/index`)
    path: Box<Path>,
    /// Tracked paths in insertion order, no duplicates
    entries: Vec<PathBuf>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    /// Get the path to the index file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.changed = false;
    }

    /// Load the index from disk, replacing in-memory state.
    ///
    /// A missing index file means an empty staging set and gets created, so
    /// later flushes never fail on a missing parent.
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.clear();

        if !self.path().exists() {
            std::fs::File::create(self.path())
                .with_context(|| format!("Unable to create index file {}", self.path.display()))?;
            return Ok(());
        }

        let content = std::fs::read_to_string(self.path())
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;

        self.entries = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect();

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|entry| entry == path)
    }

    /// Append a path to the staging set.
    ///
    /// Returns false when the path was already tracked; re-tracking is
    /// idempotent and never produces a duplicate entry.
    pub fn add(&mut self, path: PathBuf) -> bool {
        if self.contains(&path) {
            return false;
        }

        self.entries.push(path);
        self.changed = true;
        true
    }

    /// Flush in-memory entries back to disk.
    ///
    /// Rewrites the whole file; a no-op when nothing changed since loading.
    pub fn write_updates(&mut self) -> anyhow::Result<()> {
        if !self.changed {
            return Ok(());
        }

        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(&entry.display().to_string());
            content.push('\n');
        }

        std::fs::write(self.path(), content)
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;
        self.changed = false;

        Ok(())
    }

    pub fn entries(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}
