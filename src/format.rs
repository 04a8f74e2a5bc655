use crate::error::{Result, WordMergeError};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// On-disk encoding of a run's sources and destination.
///
/// Every operation of a run (tokenize, open, create, write) uses the same
/// variant; text and binary files are never mixed within one merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Whitespace-delimited tokens. Output words are separated by single
    /// newlines, with no newline after the last word.
    Text,

    /// Length-prefixed records: a native-endian `i32` length field followed
    /// by exactly that many raw bytes. No separators, no terminator.
    Binary,
}

impl Format {
    /// Open an existing source file for reading.
    pub fn open(self, path: &Path) -> Result<File> {
        File::open(path)
            .map_err(|e| WordMergeError::OpenSource(format!("{}: {}", path.display(), e)))
    }

    /// Create (or truncate) the destination file for writing.
    pub fn create(self, path: &Path) -> Result<File> {
        File::create(path)
            .map_err(|e| WordMergeError::CreateDestination(format!("{}: {}", path.display(), e)))
    }

    /// Frame one word's bytes onto the destination.
    pub fn write_record<W: Write>(self, writer: &mut W, bytes: &[u8], is_last: bool) -> Result<()> {
        match self {
            Format::Text => {
                writer.write_all(bytes)?;
                if !is_last {
                    writer.write_all(b"\n")?;
                }
            }
            Format::Binary => {
                writer.write_all(&(bytes.len() as i32).to_ne_bytes())?;
                writer.write_all(bytes)?;
            }
        }

        Ok(())
    }
}
