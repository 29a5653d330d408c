//! History log
//!
//! An append-only stream of history records giving the commit store its
//! total order. Records are three lines each (snapshot hash, author,
//! message), oldest first on disk; consumers reverse the stream to present
//! newest-first. HEAD is the last record appended. Records are never
//! mutated or reordered once written.

use crate::artifacts::record::HistoryRecord;
use anyhow::Context;
use std::io::Write;
use std::path::Path;

#[derive(Debug)]
pub struct History {
    path: Box<Path>,
}

impl History {
    pub fn new(path: Box<Path>) -> Self {
        History { path }
    }

    pub fn log_path(&self) -> &Path {
        &self.path
    }

    /// Append one record after all prior records.
    ///
    /// The stream format has no escaping, so fields spanning lines are
    /// rejected here instead of silently corrupting the log.
    pub fn append(&self, record: &HistoryRecord) -> anyhow::Result<()> {
        if record.author().contains('\n') || record.message().contains('\n') {
            anyhow::bail!("History record fields must not span multiple lines");
        }

        let mut log_file = std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(self.log_path())
            .with_context(|| format!("Unable to open log file {}", self.path.display()))?;

        log_file
            .write_all(record.to_lines().as_bytes())
            .with_context(|| format!("Unable to append to log file {}", self.path.display()))?;

        Ok(())
    }

    /// Every record, oldest first. A missing log file means no commits yet.
    pub fn all(&self) -> anyhow::Result<Vec<HistoryRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(self.log_path())
            .with_context(|| format!("Unable to read log file {}", self.path.display()))?;

        HistoryRecord::parse_stream(&content)
    }

    /// Every record, newest first: the view `log` renders and HEAD comes
    /// from.
    pub fn reversed(&self) -> anyhow::Result<Vec<HistoryRecord>> {
        let mut records = self.all()?;
        records.reverse();
        Ok(records)
    }

    /// The most recently appended record, if any.
    pub fn head(&self) -> anyhow::Result<Option<HistoryRecord>> {
        Ok(self.all()?.pop())
    }
}
