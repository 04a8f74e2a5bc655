use crate::error::Result;
use crate::format::Format;
use crate::sort::{sort_by_weight, Direction};
use crate::tokenize::tokenize_file;
use crate::word::{Metadata, SourceId, Word};
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

/// Read one word's bytes from its source file.
///
/// Returns a freshly owned buffer; descriptors never hold content.
pub fn materialize(file: &mut File, word: &Word) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; word.len as usize];

    file.seek(SeekFrom::Start(word.offset))?;
    file.read_exact(&mut bytes)?;

    Ok(bytes)
}

/// Source handles for the emission phase, opened lazily on first use and
/// released when the phase ends.
struct SourceReaders<'a> {
    metadata: &'a Metadata,
    format: Format,
    open: FxHashMap<SourceId, File>,
}

impl<'a> SourceReaders<'a> {
    fn new(metadata: &'a Metadata, format: Format) -> Self {
        Self {
            metadata,
            format,
            open: FxHashMap::default(),
        }
    }

    fn get(&mut self, id: SourceId) -> Result<&mut File> {
        match self.open.entry(id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let file = self.format.open(self.metadata.source_path(id))?;
                Ok(entry.insert(file))
            }
        }
    }
}

/// Merge every word from `sources` into `dest`, ordered by weight.
///
/// Runs the three phases in strict sequence: tokenize each source into one
/// global store, sort the descriptors in memory, then re-read each word's
/// bytes and frame them onto the destination. Returns the number of words
/// written.
pub fn merge_sorted_words(
    format: Format,
    dest: &Path,
    direction: Direction,
    sources: &[PathBuf],
) -> Result<usize> {
    let mut metadata = Metadata::new();

    for source in sources {
        metadata.concat(tokenize_file(format, source)?);
    }

    sort_by_weight(&mut metadata, direction);

    let mut writer = BufWriter::new(format.create(dest)?);
    let mut readers = SourceReaders::new(&metadata, format);
    let total = metadata.len();

    for (index, word) in metadata.words().iter().enumerate() {
        let file = readers.get(word.source)?;
        let bytes = materialize(file, word)?;

        format.write_record(&mut writer, &bytes, index + 1 == total)?;
    }

    writer.flush()?;

    Ok(total)
}
