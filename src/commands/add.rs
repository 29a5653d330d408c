use crate::areas::repository::Repository;
use std::io::Write;
use std::path::PathBuf;

/// What happened to a path handed to `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// Newly appended to the staging set
    Tracked(PathBuf),
    /// Was already staged; tracking is idempotent
    AlreadyTracked(PathBuf),
    /// No such file in the working tree
    NotFound(PathBuf),
}

impl Repository {
    /// Stage one file for the next snapshot, or list the staged files when
    /// no path is given.
    pub fn add(&mut self, path: Option<&str>) -> anyhow::Result<Option<TrackOutcome>> {
        match path {
            Some(path) => self.track(path).map(Some),
            None => {
                self.list_tracked()?;
                Ok(None)
            }
        }
    }

    /// Stage `path` for the next snapshot.
    ///
    /// The path must name an existing file relative to the working tree.
    /// The index is flushed before this returns, so a tracked path survives
    /// a crash immediately after.
    pub fn track(&mut self, path: &str) -> anyhow::Result<TrackOutcome> {
        let file_path = PathBuf::from(path);

        if !self.workspace().file_exists(&file_path) {
            writeln!(self.writer(), "Can't find '{path}'.")?;
            return Ok(TrackOutcome::NotFound(file_path));
        }

        let mut index = self.index();
        index.rehydrate()?;
        let outcome = if index.add(file_path.clone()) {
            TrackOutcome::Tracked(file_path)
        } else {
            TrackOutcome::AlreadyTracked(file_path)
        };
        index.write_updates()?;

        writeln!(self.writer(), "The file '{path}' is tracked.")?;
        Ok(outcome)
    }

    /// Print the staged files in insertion order, or the empty-index hint.
    pub fn list_tracked(&mut self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        if index.is_empty() {
            writeln!(self.writer(), "Add a file to the index.")?;
            return Ok(());
        }

        writeln!(self.writer(), "Tracked files:")?;
        for entry in index.entries() {
            writeln!(self.writer(), "{}", entry.display())?;
        }

        Ok(())
    }
}
