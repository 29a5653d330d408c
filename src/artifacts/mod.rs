//! Engine data structures
//!
//! - `digest`: content digests and the incremental hasher behind snapshot ids
//! - `record`: history log records and their three-line codec

pub mod digest;
pub mod record;

/// Length of a hex-encoded content digest.
pub const DIGEST_LENGTH: usize = 40;
