use crate::error::Result;
use crate::format::Format;
use crate::word::{Metadata, SourceId, Word};
use memmap2::Mmap;
use std::path::Path;

/// Width of the length field framing each binary record.
pub const LEN_FIELD: usize = std::mem::size_of::<i32>();

/// A word's coordinates within one source, before it is bound to a source id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: u64,
    pub len: u64,
    pub weight: u64,
}

/// Check if a byte separates words in the text format.
///
/// The C locale whitespace set, vertical tab included.
#[inline]
fn is_boundary(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0b'
}

/// Extract word spans from whitespace-delimited text content.
pub fn scan_text(content: &[u8]) -> impl Iterator<Item = Span> + '_ {
    TextSpans::new(content)
}

/// Extract word spans from length-prefixed binary content.
pub fn scan_binary(content: &[u8]) -> impl Iterator<Item = Span> + '_ {
    BinarySpans::new(content)
}

/// Iterator that yields word spans from text content.
pub struct TextSpans<'a> {
    content: &'a [u8],
    position: usize,
}

impl<'a> TextSpans<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            content,
            position: 0,
        }
    }

    /// Skip boundary bytes between words.
    #[inline]
    fn skip_boundaries(&mut self) {
        while self.position < self.content.len() && is_boundary(self.content[self.position]) {
            self.position += 1;
        }
    }
}

impl Iterator for TextSpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        self.skip_boundaries();

        if self.position >= self.content.len() {
            return None;
        }

        let start = self.position;
        let mut weight: u64 = 0;

        // The word ends at the next boundary byte or at end-of-input, so a
        // final word with no trailing whitespace is still covered in full.
        while self.position < self.content.len() && !is_boundary(self.content[self.position]) {
            weight = weight.wrapping_add(u64::from(self.content[self.position]));
            self.position += 1;
        }

        Some(Span {
            offset: start as u64,
            len: (self.position - start) as u64,
            weight,
        })
    }
}

/// Iterator that yields word spans from binary record content.
///
/// A length field that cannot be read in full ends the sequence; so does a
/// negative length or one that runs past the end of the content. Trailing
/// bytes after the last whole record are not an error.
pub struct BinarySpans<'a> {
    content: &'a [u8],
    position: usize,
}

impl<'a> BinarySpans<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            content,
            position: 0,
        }
    }
}

impl Iterator for BinarySpans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let field: [u8; LEN_FIELD] = self
            .content
            .get(self.position..self.position + LEN_FIELD)?
            .try_into()
            .ok()?;

        let len = i32::from_ne_bytes(field);
        if len < 0 {
            return None;
        }

        let start = self.position + LEN_FIELD;
        let data = self.content.get(start..start + len as usize)?;
        let weight = data
            .iter()
            .fold(0u64, |sum, &byte| sum.wrapping_add(u64::from(byte)));

        self.position = start + len as usize;

        Some(Span {
            offset: start as u64,
            len: len as u64,
            weight,
        })
    }
}

/// Tokenize one source file into a fresh metadata store.
///
/// The file is memory-mapped and scanned in place; the returned store holds
/// descriptors only, never word bytes. An empty source contributes zero
/// words.
pub fn tokenize_file(format: Format, path: &Path) -> Result<Metadata> {
    let file = format.open(path)?;
    let mut metadata = Metadata::new();
    let source = metadata.register_source(path.to_path_buf());

    if file.metadata()?.len() == 0 {
        return Ok(metadata);
    }

    let mmap = unsafe { Mmap::map(&file)? };

    match format {
        Format::Text => collect_spans(&mut metadata, source, scan_text(&mmap)),
        Format::Binary => collect_spans(&mut metadata, source, scan_binary(&mmap)),
    }

    Ok(metadata)
}

fn collect_spans(metadata: &mut Metadata, source: SourceId, spans: impl Iterator<Item = Span>) {
    for span in spans {
        metadata.push(Word {
            source,
            offset: span.offset,
            len: span.len,
            weight: span.weight,
        });
    }
}
