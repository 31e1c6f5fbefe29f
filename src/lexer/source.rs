//! Character streams the lexer reads from.

use std::io::{self, BufRead};

/// A forward-only stream of characters. Dropping it releases whatever backs
/// it (an open file, a buffer).
pub trait Loadable {
    /// Reads the next character, or `None` once the stream is exhausted.
    fn read_char(&mut self) -> io::Result<Option<char>>;
}

impl<T: Loadable + ?Sized> Loadable for Box<T> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        (**self).read_char()
    }
}

/// Lazily decodes UTF-8 characters from a buffered reader.
pub struct CharReader<R> {
    inner: R,
}

impl<R: BufRead> CharReader<R> {
    pub fn new(inner: R) -> Self {
        CharReader { inner }
    }
}

fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

impl<R: BufRead> Loadable for CharReader<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let first = match self.inner.fill_buf()?.first() {
            Some(byte) => *byte,
            None => return Ok(None),
        };
        let width = utf8_width(first).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
        })?;

        let mut bytes = [0u8; 4];
        self.inner.read_exact(&mut bytes[..width])?;
        let decoded = std::str::from_utf8(&bytes[..width])
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        Ok(decoded.chars().next())
    }
}
