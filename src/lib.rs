//! Weighted word merging across text and binary files
//!
//! This library extracts words (byte spans) from whitespace-delimited text
//! files or length-prefixed binary files, sorts every word collected from
//! every source by the sum of its byte values, and writes the result into a
//! single destination file in the same format. Word bytes are never held in
//! memory during the sort: descriptors carry file coordinates only, and
//! content is re-read lazily at emission time.
//!
//! # Example
//!
//! ```no_run
//! use wordmerge::{merge_sorted_words, Direction, Format};
//! use std::path::{Path, PathBuf};
//!
//! let sources = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
//! let written = merge_sorted_words(
//!     Format::Text,
//!     Path::new("merged.txt"),
//!     Direction::Ascending,
//!     &sources,
//! ).unwrap();
//!
//! println!("{written} words merged");
//! ```

mod convert;
mod error;
mod format;
mod merge;
mod sort;
mod tokenize;
mod word;

// Re-export public API
pub use convert::{encode_text_as_binary, read_binary_records};
pub use error::{Result, WordMergeError};
pub use format::Format;
pub use merge::{materialize, merge_sorted_words};
pub use sort::{sort_by_weight, Direction};
pub use tokenize::{scan_binary, scan_text, tokenize_file, Span, LEN_FIELD};
pub use word::{Metadata, SourceId, Word};
