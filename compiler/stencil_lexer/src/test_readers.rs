//! Readers that exercise chunk boundaries and read failures.

use std::io::{self, Read};

/// Hands out at most `chunk` bytes per `read` call.
pub(crate) struct ChunkedReader<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> ChunkedReader<'a> {
    pub(crate) fn new(data: &'a str, chunk: usize) -> Self {
        Self {
            data: data.as_bytes(),
            chunk,
        }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Fails once with `kind` when the read position reaches `fail_at`,
/// then carries on delivering data one byte at a time.
pub(crate) struct FlakyReader<'a> {
    data: &'a [u8],
    pos: usize,
    fail_at: Option<usize>,
    kind: io::ErrorKind,
}

impl<'a> FlakyReader<'a> {
    pub(crate) fn new(data: &'a str, fail_at: usize, kind: io::ErrorKind) -> Self {
        Self {
            data: data.as_bytes(),
            pos: 0,
            fail_at: Some(fail_at),
            kind,
        }
    }
}

impl Read for FlakyReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.fail_at == Some(self.pos) {
            self.fail_at = None;
            return Err(io::Error::new(self.kind, "injected read failure"));
        }
        let n = buf.len().min(self.data.len() - self.pos).min(1);
        buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }
}
