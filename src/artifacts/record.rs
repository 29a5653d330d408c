//! History log record
//!
//! One entry per commit: the snapshot it points at, who made it and the
//! message they gave. On disk a record is exactly three lines in that order,
//! appended oldest-first; there is no escaping, so fields must stay on a
//! single line (the author may be the empty line when nobody configured an
//! identity before committing).

use crate::artifacts::digest::Digest;
use anyhow::anyhow;
use derive_new::new;

/// Number of lines one record occupies in the log stream.
pub const RECORD_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct HistoryRecord {
    snapshot: Digest,
    author: String,
    message: String,
}

impl HistoryRecord {
    pub fn snapshot(&self) -> &Digest {
        &self.snapshot
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the on-disk three-line form, trailing newline included.
    pub fn to_lines(&self) -> String {
        format!("{}\n{}\n{}\n", self.snapshot, self.author, self.message)
    }

    /// Parse a whole log stream into records, oldest first.
    ///
    /// A stream whose line count is not a multiple of three is corrupt and
    /// fails as a whole rather than yielding a truncated record.
    pub fn parse_stream(stream: &str) -> anyhow::Result<Vec<Self>> {
        let lines = stream.lines().collect::<Vec<_>>();

        if lines.len() % RECORD_LINES != 0 {
            return Err(anyhow!(
                "Corrupt history log: {} lines is not a multiple of {}",
                lines.len(),
                RECORD_LINES
            ));
        }

        lines
            .chunks(RECORD_LINES)
            .map(|chunk| {
                let snapshot = Digest::try_parse(chunk[0].to_string())?;
                Ok(HistoryRecord::new(
                    snapshot,
                    chunk[1].to_string(),
                    chunk[2].to_string(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryRecord;
    use crate::artifacts::digest::Digest;
    use pretty_assertions::assert_eq;

    #[test]
    fn round_trips_through_the_stream_form() {
        let first = HistoryRecord::new(Digest::of(b"one"), "alice".to_string(), "init".to_string());
        let second = HistoryRecord::new(Digest::of(b"two"), "bob".to_string(), "update".to_string());
        let stream = format!("{}{}", first.to_lines(), second.to_lines());

        let parsed = HistoryRecord::parse_stream(&stream).unwrap();

        assert_eq!(parsed, vec![first, second]);
    }

    #[test]
    fn empty_stream_parses_to_no_records() {
        assert_eq!(HistoryRecord::parse_stream("").unwrap(), vec![]);
    }

    #[test]
    fn preserves_an_empty_author_line() {
        let record = HistoryRecord::new(Digest::of(b"one"), String::new(), "init".to_string());

        let parsed = HistoryRecord::parse_stream(&record.to_lines()).unwrap();

        assert_eq!(parsed[0].author(), "");
        assert_eq!(parsed[0].message(), "init");
    }

    #[test]
    fn truncated_stream_is_rejected() {
        let stream = format!("{}\nalice\n", Digest::of(b"one"));

        assert!(HistoryRecord::parse_stream(&stream).is_err());
    }

    #[test]
    fn stream_with_invalid_hash_line_is_rejected() {
        let stream = "not-a-digest\nalice\ninit\n";

        assert!(HistoryRecord::parse_stream(stream).is_err());
    }
}
