use std::{io::Error as IoError, str};

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
use std::io::{BufRead, BufReader, Read};

#[cfg(feature = "async_tokio")]
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

#[cfg(feature = "async_std")]
use async_std::io::{prelude::BufReadExt, BufReader, Read};

/// Line based reader for round definitions.
///
/// Blank lines and lines starting with `//` are skipped.
pub(crate) struct FileReader<R> {
    buf: Vec<u8>,
    /// 1-based number of the line currently in `buf`.
    line_number: usize,
    inner: BufReader<R>,
}

#[cfg(not(any(feature = "async_std", feature = "async_tokio")))]
impl<R: Read> FileReader<R> {
    pub(crate) fn new(src: R) -> Self {
        Self {
            inner: BufReader::new(src),
            buf: Vec::with_capacity(32),
            line_number: 0,
        }
    }

    /// Read the next relevant line. Returns `0` at the end of the input.
    pub(crate) fn next_line(&mut self) -> Result<usize, IoError> {
        loop {
            self.buf.clear();
            let bytes = self.inner.read_until(b'\n', &mut self.buf)?;
            self.line_number += 1;

            if bytes == 0 || !skip_line(&self.buf) {
                return Ok(bytes);
            }
        }
    }
}

#[cfg(feature = "async_tokio")]
impl<R: AsyncRead + Unpin> FileReader<R> {
    pub(crate) fn new(src: R) -> Self {
        Self {
            inner: BufReader::new(src),
            buf: Vec::with_capacity(32),
            line_number: 0,
        }
    }

    /// Read the next relevant line. Returns `0` at the end of the input.
    pub(crate) async fn next_line(&mut self) -> Result<usize, IoError> {
        loop {
            self.buf.clear();
            let bytes = self.inner.read_until(b'\n', &mut self.buf).await?;
            self.line_number += 1;

            if bytes == 0 || !skip_line(&self.buf) {
                return Ok(bytes);
            }
        }
    }
}

#[cfg(feature = "async_std")]
impl<R: Read + Unpin> FileReader<R> {
    pub(crate) fn new(src: R) -> Self {
        Self {
            inner: BufReader::new(src),
            buf: Vec::with_capacity(32),
            line_number: 0,
        }
    }

    /// Read the next relevant line. Returns `0` at the end of the input.
    pub(crate) async fn next_line(&mut self) -> Result<usize, IoError> {
        loop {
            self.buf.clear();
            let bytes = self.inner.read_until(b'\n', &mut self.buf).await?;
            self.line_number += 1;

            if bytes == 0 || !skip_line(&self.buf) {
                return Ok(bytes);
            }
        }
    }
}

impl<R> FileReader<R> {
    pub(crate) const fn line_number(&self) -> usize {
        self.line_number
    }

    /// The format version if the current line is the file header.
    pub(crate) fn version(&self) -> Option<u8> {
        const ROUND_FILE_HEADER: &[u8] = b"archery round format v";

        let line = trim_bytes(strip_bom(&self.buf));
        let infix = line.strip_prefix(ROUND_FILE_HEADER)?;

        if infix.is_empty() || !infix.iter().all(u8::is_ascii_digit) {
            return None;
        }

        infix
            .iter()
            .try_fold(0_u8, |n, byte| n.checked_mul(10)?.checked_add(byte & 0xF))
    }

    /// The section name if the current line is a section header.
    pub(crate) fn get_section(&self) -> Option<&[u8]> {
        let line = trim_bytes(&self.buf);

        line.strip_prefix(b"[")
            .and_then(|rest| rest.strip_suffix(b"]"))
    }

    /// The current line without trailing comment and surrounding whitespace.
    pub(crate) fn get_line(&self) -> Result<&str, str::Utf8Error> {
        let end = self
            .buf
            .windows(2)
            .position(|window| window == b"//")
            .unwrap_or(self.buf.len());

        str::from_utf8(&self.buf[..end]).map(str::trim)
    }
}

fn skip_line(line: &[u8]) -> bool {
    let line = trim_bytes(line);

    line.is_empty() || line.starts_with(b"//")
}

fn strip_bom(line: &[u8]) -> &[u8] {
    line.strip_prefix(&[239, 187, 191]).unwrap_or(line)
}

fn trim_bytes(mut bytes: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = bytes {
        if first.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }

    while let [rest @ .., last] = bytes {
        if last.is_ascii_whitespace() {
            bytes = rest;
        } else {
            break;
        }
    }

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_bytes() {
        assert_eq!(trim_bytes(b"  [General]\r\n"), b"[General]");
        assert_eq!(trim_bytes(b" \t\n"), b"");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        assert!(skip_line(b"\n"));
        assert!(skip_line(b"   // comment\n"));
        assert!(!skip_line(b"1,122,72 // first distance\n"));
    }
}
