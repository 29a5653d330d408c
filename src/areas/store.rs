//! Commit store
//!
//! The durable home of snapshots: one directory per snapshot under
//! `commits/<hash>`, mirroring the tracked files' relative paths with their
//! full content. A snapshot directory is immutable once published: content
//! is staged under a `tmp-snap-*` name and renamed into place, so a snapshot
//! never appears under its final name half-written, and an existing snapshot
//! is never rewritten.

use crate::artifacts::digest::Digest;
use anyhow::Context;
use bytes::Bytes;
use fake::rand;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Store {
    path: Box<Path>,
}

impl Store {
    pub fn new(path: Box<Path>) -> Self {
        Store { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot_path(&self, id: &Digest) -> PathBuf {
        self.path.join(id.as_ref())
    }

    pub fn contains(&self, id: &Digest) -> bool {
        self.snapshot_path(id).is_dir()
    }

    /// All snapshot ids known to the store, sorted. Staging leftovers and
    /// anything else that does not parse as a digest are skipped.
    pub fn snapshot_ids(&self) -> anyhow::Result<Vec<Digest>> {
        let mut ids = Vec::new();

        for entry in std::fs::read_dir(&self.path)
            .with_context(|| format!("Unable to read commits directory {}", self.path.display()))?
        {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if let Ok(id) = Digest::try_parse(name) {
                ids.push(id);
            }
        }

        ids.sort();
        Ok(ids)
    }

    /// Find all snapshots whose id starts with the given prefix.
    ///
    /// Used to resolve abbreviated ids; more than one match means the
    /// prefix is ambiguous, none means the snapshot does not exist.
    pub fn find_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<Digest>> {
        Ok(self
            .snapshot_ids()?
            .into_iter()
            .filter(|id| id.as_ref().starts_with(prefix))
            .collect())
    }

    /// Digest of one file inside a snapshot, None when the snapshot does
    /// not contain that path. The None case is what lets commit treat a
    /// newly tracked file as changed.
    pub fn file_digest(&self, id: &Digest, file_path: &Path) -> anyhow::Result<Option<Digest>> {
        let stored_path = self.snapshot_path(id).join(file_path);

        if !stored_path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read(&stored_path)
            .with_context(|| format!("Unable to read stored file {}", stored_path.display()))?;

        Ok(Some(Digest::of(&content)))
    }

    /// Publish a snapshot unless it already exists.
    ///
    /// Content is written under a staging name first and renamed to the
    /// hash-keyed directory once complete; the rename stays inside
    /// `commits/`, which makes the publish atomic. Returns false when the
    /// snapshot was already present (identical content committed before).
    pub fn write_snapshot(&self, id: &Digest, files: &[(PathBuf, Bytes)]) -> anyhow::Result<bool> {
        let snapshot_path = self.snapshot_path(id);
        if snapshot_path.exists() {
            return Ok(false);
        }

        let staging_path = self.path.join(Self::generate_staging_name());
        std::fs::create_dir_all(&staging_path).with_context(|| {
            format!(
                "Unable to create staging directory {}",
                staging_path.display()
            )
        })?;

        for (file_path, content) in files {
            let target_path = staging_path.join(file_path);

            if let Some(parent) = target_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Unable to create directory {}", parent.display()))?;
            }

            std::fs::write(&target_path, content)
                .with_context(|| format!("Unable to write stored file {}", target_path.display()))?;
        }

        std::fs::rename(&staging_path, &snapshot_path).with_context(|| {
            format!("Unable to publish snapshot {}", snapshot_path.display())
        })?;

        Ok(true)
    }

    /// Relative paths of every file stored under a snapshot, sorted.
    pub fn snapshot_files(&self, id: &Digest) -> anyhow::Result<Vec<PathBuf>> {
        let snapshot_path = self.snapshot_path(id);
        let mut files = Vec::new();

        for entry in WalkDir::new(&snapshot_path) {
            let entry = entry.with_context(|| {
                format!("Unable to walk snapshot {}", snapshot_path.display())
            })?;

            if entry.file_type().is_file() {
                files.push(entry.path().strip_prefix(&snapshot_path)?.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    pub fn read_file(&self, id: &Digest, file_path: &Path) -> anyhow::Result<Bytes> {
        let stored_path = self.snapshot_path(id).join(file_path);

        let content = std::fs::read(&stored_path)
            .with_context(|| format!("Unable to read stored file {}", stored_path.display()))?;

        Ok(content.into())
    }

    fn generate_staging_name() -> String {
        format!("tmp-snap-{}", rand::random::<u32>())
    }
}
