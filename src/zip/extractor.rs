use flate2::Crc;
use flate2::read::DeflateDecoder;
use std::io::Read;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::io::ReadAt;

use super::parser::ZipParser;
use super::structures::{CompressionMethod, ZipFileEntry};

/// Upper bound on the buffer reserved up front for an inflated member
const MAX_PREALLOC: u64 = 1 << 20;

/// ZIP file extractor
///
/// The central directory is read once when the extractor is opened;
/// member data is read lazily on extraction.
pub struct ZipExtractor<R: ReadAt> {
    parser: ZipParser<R>,
    entries: Vec<ZipFileEntry>,
}

impl<R: ReadAt> ZipExtractor<R> {
    /// Open the archive behind `reader`.
    ///
    /// Returns `Ok(None)` if the source has no end of central directory
    /// record, i.e. it is not a ZIP file.
    pub fn open(reader: Arc<R>) -> Result<Option<Self>> {
        let parser = ZipParser::new(reader);
        let Some((eocd, eocd_offset)) = parser.find_eocd()? else {
            return Ok(None);
        };
        let entries = parser.list_files(&eocd, eocd_offset)?;
        Ok(Some(Self { parser, entries }))
    }

    /// All entries in central directory order
    pub fn entries(&self) -> &[ZipFileEntry] {
        &self.entries
    }

    /// Look up an entry by its exact name
    pub fn find(&self, file_name: &str) -> Option<&ZipFileEntry> {
        self.entries.iter().find(|e| e.file_name == file_name)
    }

    /// Extract file data to memory, verifying size and CRC-32
    pub fn extract_to_memory(&self, entry: &ZipFileEntry) -> Result<Vec<u8>> {
        if entry.is_encrypted() {
            return Err(Error::corrupt(format!(
                "{} is encrypted",
                entry.file_name
            )));
        }

        let data_offset = self.parser.get_data_offset(entry)?;
        let end = data_offset.saturating_add(entry.compressed_size);
        if end > self.parser.reader().size() {
            return Err(Error::corrupt(format!(
                "{} extends past end of archive",
                entry.file_name
            )));
        }

        let mut raw = vec![0u8; entry.compressed_size as usize];
        self.parser.reader().read_exact_at(data_offset, &mut raw)?;

        let data = match entry.compression_method {
            CompressionMethod::Stored => raw,
            CompressionMethod::Deflate => {
                // Declared sizes are untrusted: bound the reservation and
                // stop one byte past the declared length.
                let capacity = entry.uncompressed_size.min(MAX_PREALLOC) as usize;
                let mut out = Vec::with_capacity(capacity);
                DeflateDecoder::new(raw.as_slice())
                    .take(entry.uncompressed_size.saturating_add(1))
                    .read_to_end(&mut out)
                    .map_err(|e| Error::corrupt(format!("{}: {e}", entry.file_name)))?;
                out
            }
            CompressionMethod::Unknown(method) => {
                return Err(Error::corrupt(format!(
                    "{}: unsupported compression method {method}",
                    entry.file_name
                )));
            }
        };

        if data.len() as u64 != entry.uncompressed_size {
            return Err(Error::corrupt(format!(
                "{}: expected {} bytes, got {}",
                entry.file_name,
                entry.uncompressed_size,
                data.len()
            )));
        }

        let mut crc = Crc::new();
        crc.update(&data);
        if crc.sum() != entry.crc32 {
            return Err(Error::corrupt(format!("{}: CRC-32 mismatch", entry.file_name)));
        }

        Ok(data)
    }
}
