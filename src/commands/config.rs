use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    /// Show or set the author identity used by subsequent commits.
    ///
    /// With a username, records it and confirms; without one, reports the
    /// configured username or asks for one when nothing is configured yet.
    pub fn config(&mut self, username: Option<&str>) -> anyhow::Result<()> {
        if let Some(username) = username {
            self.identity().set_author(username)?;
        }

        let author = self.identity().author()?;
        if author.is_empty() {
            writeln!(self.writer(), "Please, tell me who you are.")?;
        } else {
            writeln!(self.writer(), "The username is {author}.")?;
        }

        Ok(())
    }
}
