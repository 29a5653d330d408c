use anyhow::Context;
use bytes::Bytes;
use std::path::Path;

/// Working-directory file access.
///
/// All paths handed in are relative to the working tree root; the workspace
/// joins them onto its own path so callers never touch absolute paths.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_exists(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<Bytes> {
        let file_path = self.path.join(file_path);

        let content = std::fs::read(&file_path)
            .with_context(|| format!("Unable to read file {}", file_path.display()))?;

        Ok(content.into())
    }

    /// Write a file, overwriting unconditionally and creating any missing
    /// parent directories along the relative path.
    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let file_path = self.path.join(file_path);

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Unable to create directory {}", parent.display()))?;
        }

        std::fs::write(&file_path, data)
            .with_context(|| format!("Unable to write file {}", file_path.display()))
    }
}
