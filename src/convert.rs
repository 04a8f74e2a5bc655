use crate::error::Result;
use crate::format::Format;
use crate::merge::materialize;
use crate::tokenize::{scan_binary, tokenize_file};
use memmap2::Mmap;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Re-encode a whitespace-delimited text file as length-prefixed binary
/// records, one record per word, in original order. Returns the record
/// count.
pub fn encode_text_as_binary(input: &Path, output: &Path) -> Result<usize> {
    let metadata = tokenize_file(Format::Text, input)?;

    let mut reader = Format::Text.open(input)?;
    let mut writer = BufWriter::new(Format::Binary.create(output)?);

    for word in metadata.words() {
        let bytes = materialize(&mut reader, word)?;
        Format::Binary.write_record(&mut writer, &bytes, false)?;
    }

    writer.flush()?;

    Ok(metadata.len())
}

/// Read every record of a binary file into owned buffers, in file order.
pub fn read_binary_records(path: &Path) -> Result<Vec<Vec<u8>>> {
    let file = Format::Binary.open(path)?;

    if file.metadata()?.len() == 0 {
        return Ok(Vec::new());
    }

    let mmap = unsafe { Mmap::map(&file)? };

    let records = scan_binary(&mmap)
        .map(|span| mmap[span.offset as usize..(span.offset + span.len) as usize].to_vec())
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_encode_frames_each_word() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("words.bin");
        fs::write(&input, b"hello world\nrust").unwrap();

        let count = encode_text_as_binary(&input, &output).unwrap();

        assert_eq!(count, 3);
        let records = read_binary_records(&output).unwrap();
        assert_eq!(
            records,
            vec![b"hello".to_vec(), b"world".to_vec(), b"rust".to_vec()]
        );
    }

    #[test]
    fn test_text_and_binary_encodings_tokenize_alike() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("words.txt");
        let output = dir.path().join("words.bin");
        fs::write(&input, b"pack  my box\nwith five dozen jugs").unwrap();

        encode_text_as_binary(&input, &output).unwrap();

        let text = tokenize_file(Format::Text, &input).unwrap();
        let binary = tokenize_file(Format::Binary, &output).unwrap();

        assert_eq!(text.len(), binary.len());
        for (a, b) in text.words().iter().zip(binary.words()) {
            assert_eq!(a.len, b.len);
            assert_eq!(a.weight, b.weight);
        }
    }

    #[test]
    fn test_encode_empty_text_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("empty.txt");
        let output = dir.path().join("empty.bin");
        fs::write(&input, b"").unwrap();

        let count = encode_text_as_binary(&input, &output).unwrap();

        assert_eq!(count, 0);
        assert_eq!(fs::read(&output).unwrap(), b"");
        assert!(read_binary_records(&output).unwrap().is_empty());
    }
}
