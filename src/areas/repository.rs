use crate::areas::history::History;
use crate::areas::identity::Identity;
use crate::areas::index::Index;
use crate::areas::store::Store;
use crate::areas::workspace::Workspace;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Name of the metadata directory at the working-tree root.
pub const METADATA_DIR: &str = ".jot";

/// High-level repository handle.
///
/// Wires the areas together over one working tree and owns the output
/// writer that command implementations render their status text through.
/// Constructing a handle ensures the persisted layout exists, so every
/// command can rely on it.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    store: Store,
    history: History,
    identity: Identity,
    workspace: Workspace,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path);

        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create repository path {}", path.display()))?;
        }

        let path = path.canonicalize()?;
        let metadata_path = path.join(METADATA_DIR);

        let index = Index::new(metadata_path.join("index").into_boxed_path());
        let store = Store::new(metadata_path.join("commits").into_boxed_path());
        let history = History::new(metadata_path.join("log").into_boxed_path());
        let identity = Identity::new(metadata_path.join("config").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());

        let repository = Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(index),
            store,
            history,
            identity,
            workspace,
        };
        repository.ensure_layout()?;

        Ok(repository)
    }

    /// Create the metadata directory and the empty persisted files.
    /// Idempotent; existing content is never touched.
    pub fn ensure_layout(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(self.store.commits_path())
            .context("Failed to create commits directory")?;

        let index_path = self.index.borrow().path().to_path_buf();
        for file_path in [
            self.identity.config_path(),
            self.history.log_path(),
            index_path.as_path(),
        ] {
            if !file_path.exists() {
                std::fs::write(file_path, b"").with_context(|| {
                    format!("Failed to create metadata file {}", file_path.display())
                })?;
            }
        }

        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
