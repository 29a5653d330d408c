use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print commit history, newest first.
    ///
    /// Each entry shows the snapshot hash, author and message; entries are
    /// separated by a blank line.
    pub fn log(&mut self) -> anyhow::Result<()> {
        let records = self.history().reversed()?;

        if records.is_empty() {
            writeln!(self.writer(), "No commits yet.")?;
            return Ok(());
        }

        let last = records.len() - 1;
        for (position, record) in records.iter().enumerate() {
            writeln!(
                self.writer(),
                "{}",
                format!("commit {}", record.snapshot()).yellow()
            )?;
            writeln!(self.writer(), "Author: {}", record.author())?;
            writeln!(self.writer(), "{}", record.message())?;

            if position != last {
                writeln!(self.writer())?;
            }
        }

        Ok(())
    }
}
