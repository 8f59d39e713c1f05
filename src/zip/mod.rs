//! ZIP archive parsing and extraction.
//!
//! - [`structures`]: data structures for ZIP format elements (EOCD, file headers, etc.)
//! - [`parser`]: low-level parsing of ZIP structures from raw bytes
//! - [`extractor`]: member lookup and decompression
//!
//! The EOCD is read first (from the end of the file), then the Central
//! Directory, so listing members never touches file data.
//!
//! ## Supported Features
//!
//! - Standard ZIP format (PKZIP APPNOTE 6.3.x compatible)
//! - ZIP64 extensions
//! - STORED and DEFLATE compression methods
//!
//! ## Limitations
//!
//! - No encryption support
//! - No multi-disk archive support
//! - No BZIP2, LZMA, or other compression methods

mod extractor;
mod parser;
mod structures;

pub use extractor::ZipExtractor;
pub use parser::ZipParser;
pub use structures::*;
