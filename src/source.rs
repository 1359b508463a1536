//! Pull-based character sources.
//!
//! Every conversion reads its input through [`RuneSource`], one decoded
//! character at a time. Adapters exist for strings, byte slices and
//! arbitrary readers; a read failure on an underlying stream is collapsed
//! into end of input, so the engine never sees an error.

use std::io::Read;
use std::str::Chars;

/// One decoded character at a time; `None` is the end-of-input sentinel.
pub(crate) trait RuneSource {
    fn next_rune(&mut self) -> Option<char>;
}

/// Decode the first UTF-8 sequence of `bytes`. Invalid or truncated input
/// yields U+FFFD with width 1, so ill-formed bytes pass through the engine
/// one replacement character per byte.
fn decode_rune(bytes: &[u8]) -> Option<(char, usize)> {
    const REPLACEMENT: (char, usize) = ('\u{FFFD}', 1);
    let first = *bytes.first()?;
    let len = match first {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return Some(REPLACEMENT),
    };
    if bytes.len() < len {
        return Some(REPLACEMENT);
    }
    match std::str::from_utf8(&bytes[..len]) {
        Ok(s) => s.chars().next().map(|c| (c, len)),
        Err(_) => Some(REPLACEMENT),
    }
}

pub(crate) struct StrSource<'a> {
    chars: Chars<'a>,
}

impl<'a> StrSource<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        StrSource {
            chars: text.chars(),
        }
    }
}

impl RuneSource for StrSource<'_> {
    fn next_rune(&mut self) -> Option<char> {
        self.chars.next()
    }
}

pub(crate) struct BytesSource<'a> {
    rest: &'a [u8],
}

impl<'a> BytesSource<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        BytesSource { rest: bytes }
    }
}

impl RuneSource for BytesSource<'_> {
    fn next_rune(&mut self) -> Option<char> {
        let (c, n) = decode_rune(self.rest)?;
        self.rest = &self.rest[n..];
        Some(c)
    }
}

/// Incremental UTF-8 decoding over any reader. Short reads are fine: the
/// buffer is topped up until it holds a full sequence or the reader ends.
pub(crate) struct ReaderSource<R> {
    inner: R,
    buf: [u8; 4096],
    start: usize,
    end: usize,
    eof: bool,
}

impl<R: Read> ReaderSource<R> {
    pub(crate) fn new(inner: R) -> Self {
        ReaderSource {
            inner,
            buf: [0; 4096],
            start: 0,
            end: 0,
            eof: false,
        }
    }

    fn fill(&mut self) {
        // Keep at least one maximal UTF-8 sequence buffered.
        while !self.eof && self.end - self.start < 4 {
            if self.start > 0 {
                self.buf.copy_within(self.start..self.end, 0);
                self.end -= self.start;
                self.start = 0;
            }
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => self.eof = true,
                Ok(n) => self.end += n,
                // A failed read is indistinguishable from a finished stream.
                Err(_) => self.eof = true,
            }
        }
    }
}

impl<R: Read> RuneSource for ReaderSource<R> {
    fn next_rune(&mut self) -> Option<char> {
        self.fill();
        let (c, n) = decode_rune(&self.buf[self.start..self.end])?;
        self.start += n;
        Some(c)
    }
}

/// A rune source with single-character pushback, for the decoder's peek.
pub(crate) struct Runes<S> {
    src: S,
    peeked: Option<char>,
}

impl<S: RuneSource> Runes<S> {
    pub(crate) fn new(src: S) -> Self {
        Runes { src, peeked: None }
    }

    pub(crate) fn next(&mut self) -> Option<char> {
        self.peeked.take().or_else(|| self.src.next_rune())
    }

    pub(crate) fn peek(&mut self) -> Option<char> {
        if self.peeked.is_none() {
            self.peeked = self.src.next_rune();
        }
        self.peeked
    }
}
