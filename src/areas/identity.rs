//! Author identity
//!
//! One username per repository, stored as a single UTF-8 string in the
//! `config` file. Every commit reads it at commit time; an absent or blank
//! file means nobody has configured themselves yet, and commits then record
//! the empty author rather than failing.

use anyhow::Context;
use std::path::Path;

#[derive(Debug)]
pub struct Identity {
    path: Box<Path>,
}

impl Identity {
    pub fn new(path: Box<Path>) -> Self {
        Identity { path }
    }

    pub fn config_path(&self) -> &Path {
        &self.path
    }

    /// The configured username, empty when unconfigured.
    pub fn author(&self) -> anyhow::Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }

        let content = std::fs::read_to_string(self.config_path())
            .with_context(|| format!("Unable to read config file {}", self.path.display()))?;

        Ok(content.trim().to_string())
    }

    pub fn set_author(&self, username: &str) -> anyhow::Result<()> {
        std::fs::write(self.config_path(), username.trim())
            .with_context(|| format!("Unable to write config file {}", self.path.display()))
    }
}
