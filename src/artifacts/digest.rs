//! Snapshot identifier (SHA-1 content digest)
//!
//! Digests are 40-character lowercase hexadecimal strings. They identify
//! snapshots in the commit store and double as the change-detection signal
//! when tracked files are compared against HEAD.
//!
//! ## Storage
//!
//! Each snapshot lives in `commits/<digest>/`, keyed by the full hex string.

use crate::artifacts::DIGEST_LENGTH;
use sha1::{Digest as _, Sha1};

/// Content digest identifying a snapshot.
///
/// A validated 40-character hex string. Equality and ordering are the plain
/// string ones, so digests can key maps and sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(String);

impl Digest {
    /// Digest of a single byte sequence. Empty input is valid and produces
    /// the well-defined empty-content digest.
    pub fn of(data: &[u8]) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Parse and validate a digest from a string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string
    ///
    /// # Returns
    ///
    /// Validated digest or error if invalid length/characters
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != DIGEST_LENGTH {
            return Err(anyhow::anyhow!("Invalid digest length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid digest characters: {}", id));
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incremental digest computation.
///
/// A snapshot's identity is the digest of all tracked file contents
/// concatenated in index order; this wrapper folds the pieces in one at a
/// time so the concatenation never has to be materialized.
#[derive(Default)]
pub struct Hasher(Sha1);

impl Hasher {
    pub fn new() -> Self {
        Hasher(Sha1::new())
    }

    pub fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    pub fn finalize(self) -> Digest {
        let digest = self.0.finalize();
        Digest(format!("{digest:x}"))
    }
}
