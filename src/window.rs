//! Rolling 3-byte lookahead over a rune source.

use crate::source::RuneSource;

/// Holds the next few input bytes for the longest-match scan. Runes are
/// pulled from the source and re-encoded as UTF-8, so a single multi-byte
/// character can span several scan positions.
pub(crate) struct Lookahead3<S> {
    src: S,
    buf: Vec<u8>,
}

impl<S: RuneSource> Lookahead3<S> {
    pub(crate) fn new(src: S) -> Self {
        Lookahead3 {
            src,
            // 3 pending bytes plus one freshly encoded rune at most.
            buf: Vec::with_capacity(8),
        }
    }

    /// The next up-to-3 pending bytes without consuming them. Returns fewer
    /// than 3 only once the source is exhausted.
    pub(crate) fn peek3(&mut self) -> ([u8; 3], usize) {
        while self.buf.len() < 3 {
            let Some(c) = self.src.next_rune() else { break };
            let mut enc = [0u8; 4];
            self.buf.extend_from_slice(c.encode_utf8(&mut enc).as_bytes());
        }
        let n = self.buf.len().min(3);
        let mut window = [0u8; 3];
        window[..n].copy_from_slice(&self.buf[..n]);
        (window, n)
    }

    /// Drop the first `n` pending bytes, shifting the remainder left.
    pub(crate) fn consume(&mut self, n: usize) {
        debug_assert!((1..=3).contains(&n) && n <= self.buf.len());
        self.buf.drain(..n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StrSource;

    #[test]
    fn peek_is_idempotent_and_consume_shifts() {
        let mut la = Lookahead3::new(StrSource::new("abcd"));
        assert_eq!(la.peek3(), (*b"abc", 3));
        assert_eq!(la.peek3(), (*b"abc", 3));
        la.consume(2);
        assert_eq!(la.peek3(), (*b"cd\0", 2));
        la.consume(2);
        assert_eq!(la.peek3().1, 0);
    }

    #[test]
    fn multibyte_rune_fills_the_window() {
        // あ is three bytes; the window sees them one position at a time.
        let mut la = Lookahead3::new(StrSource::new("あ"));
        let (window, n) = la.peek3();
        assert_eq!((window, n), (*"あ".as_bytes().first_chunk::<3>().unwrap(), 3));
        la.consume(1);
        assert_eq!(la.peek3().1, 2);
        la.consume(2);
        assert_eq!(la.peek3().1, 0);
    }

    #[test]
    fn refills_across_rune_boundaries() {
        let mut la = Lookahead3::new(StrSource::new("aあ"));
        assert_eq!(la.peek3().1, 3);
        la.consume(3);
        // Final byte of あ is still pending.
        assert_eq!(la.peek3().1, 1);
    }
}
