use crate::areas::repository::Repository;
use crate::artifacts::digest::Digest;
use std::io::Write;

/// Shortest accepted snapshot id abbreviation.
const MIN_PREFIX_LENGTH: usize = 4;

/// What a checkout attempt resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The working tree now carries the snapshot's files
    Restored(Digest),
    /// No id given
    MissingArgument,
    /// The id (or prefix) matches no known snapshot
    UnknownCommit(String),
    /// The prefix matches more than one snapshot
    AmbiguousId(String),
}

impl Repository {
    /// Restore a snapshot's files into the working directory.
    ///
    /// Copies every file stored under the snapshot over the working tree,
    /// overwriting whatever is there; working-tree files absent from the
    /// snapshot are left alone. Accepts a full snapshot hash or an
    /// unambiguous prefix of at least four characters, and reports the
    /// fully resolved hash on success. Nothing is touched unless the id
    /// resolves to exactly one snapshot.
    pub fn checkout(&mut self, commit_id: Option<&str>) -> anyhow::Result<CheckoutOutcome> {
        let Some(commit_id) = commit_id else {
            writeln!(self.writer(), "Commit id was not passed.")?;
            return Ok(CheckoutOutcome::MissingArgument);
        };

        let mut candidates = if commit_id.len() >= MIN_PREFIX_LENGTH {
            self.store().find_by_prefix(commit_id)?
        } else {
            Vec::new()
        };

        let snapshot_id = match candidates.len() {
            0 => {
                writeln!(self.writer(), "Commit does not exist.")?;
                return Ok(CheckoutOutcome::UnknownCommit(commit_id.to_string()));
            }
            1 => candidates.remove(0),
            _ => {
                writeln!(self.writer(), "Commit id '{commit_id}' is ambiguous.")?;
                return Ok(CheckoutOutcome::AmbiguousId(commit_id.to_string()));
            }
        };

        for file_path in self.store().snapshot_files(&snapshot_id)? {
            let content = self.store().read_file(&snapshot_id, &file_path)?;
            self.workspace().write_file(&file_path, &content)?;
        }

        writeln!(self.writer(), "Switched to commit {snapshot_id}.")?;
        Ok(CheckoutOutcome::Restored(snapshot_id))
    }
}
