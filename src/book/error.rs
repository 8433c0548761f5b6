use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures the collection and persistence core can report. Every variant is
/// local-recoverable: the operation that raised it left the book in its last
/// known-good state.
#[derive(Debug, Error)]
pub enum BookError {
    /// A positional operation addressed a slot outside `0..len`.
    #[error("index {index} is out of range for {len} contact(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Removal by name scanned the whole book without an exact match.
    #[error("contact '{first} {family}' not found")]
    NotFound { first: String, family: String },

    /// A source or sink file could not be opened, read, or written. Read
    /// paths leave the book unchanged; write paths simply produce no output.
    #[error("could not access {}", path.display())]
    FileUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Decoding ran into text that does not frame as 5-line record blocks,
    /// either a truncated trailing block or a non-numeric phone/age line.
    #[error("contact file is malformed at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },
}
