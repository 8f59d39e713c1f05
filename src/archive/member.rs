use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};

use crate::error::{Error, Result};

/// An open archive member.
///
/// Directory members are streamed from disk; zip members are decompressed
/// up front and served from memory. Either way the stream owns everything
/// it reads from, so it outlives the [`Archive`](super::Archive) it came from.
pub struct MemberStream {
    path: String,
    inner: Inner,
}

enum Inner {
    File(BufReader<File>),
    Memory(Cursor<Vec<u8>>),
}

impl MemberStream {
    pub(crate) fn from_file(path: String, file: File) -> Self {
        Self {
            path,
            inner: Inner::File(BufReader::new(file)),
        }
    }

    pub(crate) fn from_bytes(path: String, data: Vec<u8>) -> Self {
        Self {
            path,
            inner: Inner::Memory(Cursor::new(data)),
        }
    }

    /// Relative path of the member inside its archive
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Read the remainder of the member as UTF-8 text
    pub fn read_text(mut self) -> Result<String> {
        let mut bytes = Vec::new();
        self.read_to_end(&mut bytes)?;
        String::from_utf8(bytes).map_err(|e| {
            Error::Io(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} is not valid UTF-8: {e}", self.path),
            ))
        })
    }
}

impl Read for MemberStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.inner {
            Inner::File(r) => r.read(buf),
            Inner::Memory(r) => r.read(buf),
        }
    }
}

impl BufRead for MemberStream {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match &mut self.inner {
            Inner::File(r) => r.fill_buf(),
            Inner::Memory(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match &mut self.inner {
            Inner::File(r) => r.consume(amt),
            Inner::Memory(r) => r.consume(amt),
        }
    }
}
