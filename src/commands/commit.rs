use crate::areas::repository::Repository;
use crate::artifacts::digest::{Digest, Hasher};
use crate::artifacts::record::HistoryRecord;
use bytes::Bytes;
use std::io::Write;
use std::path::PathBuf;

/// What a commit attempt resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new history record now points at this snapshot
    Committed(Digest),
    /// Every tracked file hashes the same as in the HEAD snapshot
    NothingToCommit,
    /// The staging set is empty
    EmptyIndex,
    /// No message, or a message that trims to nothing
    MissingMessage,
}

impl Repository {
    /// Snapshot the staged files and append a history record.
    ///
    /// Idempotent on unchanged content: when HEAD exists and every tracked
    /// file hashes the same as its copy in the HEAD snapshot, nothing is
    /// written. The first commit is always realized. The snapshot id is the
    /// digest of all tracked file contents concatenated in index order.
    pub fn commit(&mut self, message: Option<&str>) -> anyhow::Result<CommitOutcome> {
        let message = message.map(str::trim).unwrap_or_default();
        if message.is_empty() {
            writeln!(self.writer(), "Message was not passed.")?;
            return Ok(CommitOutcome::MissingMessage);
        }

        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "Nothing to commit.")?;
            return Ok(CommitOutcome::EmptyIndex);
        }

        // Read every tracked file once; the same bytes feed change
        // detection, the snapshot digest and the snapshot copy.
        let files = index
            .entries()
            .map(|entry| {
                let content = self.workspace().read_file(entry)?;
                Ok((entry.to_path_buf(), content))
            })
            .collect::<anyhow::Result<Vec<(PathBuf, Bytes)>>>()?;
        drop(index);

        if let Some(head) = self.history().head()? {
            let mut changed = false;
            for (file_path, content) in &files {
                let head_digest = self.store().file_digest(head.snapshot(), file_path)?;
                if head_digest.as_ref() != Some(&Digest::of(content)) {
                    changed = true;
                    break;
                }
            }

            if !changed {
                writeln!(self.writer(), "Nothing to commit.")?;
                return Ok(CommitOutcome::NothingToCommit);
            }
        }

        let mut hasher = Hasher::new();
        for (_, content) in &files {
            hasher.update(content);
        }
        let snapshot_id = hasher.finalize();

        // Snapshot first, record second: a failure in between leaves an
        // unreferenced snapshot, never a record without backing content.
        self.store().write_snapshot(&snapshot_id, &files)?;

        let author = self.identity().author()?;
        let record = HistoryRecord::new(snapshot_id.clone(), author, message.to_string());
        self.history().append(&record)?;

        writeln!(self.writer(), "Changes are committed.")?;
        Ok(CommitOutcome::Committed(snapshot_id))
    }
}
