use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Report the repository layout, creating anything still missing.
    ///
    /// The layout is already ensured when the handle is constructed, so
    /// this is safe to run any number of times.
    pub fn init(&mut self) -> anyhow::Result<()> {
        self.ensure_layout()?;

        writeln!(
            self.writer(),
            "Initialized empty jot repository in {}",
            self.path().display()
        )?;

        Ok(())
    }
}
