//! Romaji → kana encoding: longest-match scan plus delayed gemination.

use tracing::trace;

use crate::source::RuneSource;
use crate::stream::ByteSink;
use crate::table::KanaScript;
use crate::window::Lookahead3;

/// Consonants that a sokuon can double. n and m are absent: they stand for
/// the syllabic ん/ン, never a doubled consonant.
fn doubles(b: u8) -> bool {
    matches!(
        b,
        b'b' | b'c' | b'd' | b'f' | b'g' | b'h' | b'j' | b'k' | b'l' | b'p' | b'q' | b'r' | b's'
            | b't' | b'v' | b'w' | b'x' | b'y' | b'z'
    )
}

/// One unmatched byte held back for a single scan step. Whether it was a
/// doubled consonant ("tcho") or plain unconvertible text can only be told
/// by what the next step does: a token match immediately after means
/// gemination, anything else means the byte was ordinary.
#[derive(Default)]
struct GeminationState {
    pending: Option<(u8, bool)>,
}

impl GeminationState {
    /// A no-match step: hold `b` as the new pending byte. A previously held
    /// byte is emitted literally; two no-matches in a row never geminate.
    fn hold(&mut self, b: u8, sink: &mut impl ByteSink) {
        if let Some((prev, _)) = self.pending.take() {
            sink.put(prev);
        }
        self.pending = Some((b, doubles(b)));
    }

    /// A token match follows: a doubling-capable pending byte becomes the
    /// script's sokuon marker, anything else is emitted as itself.
    fn resolve(&mut self, sokuon: &str, sink: &mut impl ByteSink) {
        match self.pending.take() {
            Some((_, true)) => sink.put_str(sokuon),
            Some((b, false)) => sink.put(b),
            None => {}
        }
    }

    /// End of input: no match can follow, so the byte is always literal.
    fn flush(&mut self, sink: &mut impl ByteSink) {
        if let Some((b, _)) = self.pending.take() {
            sink.put(b);
        }
    }
}

/// Scan romaji from `src` into one kana script, greedily preferring 3-byte
/// keys over 2-byte over 1-byte at each position, with no backtracking.
pub(crate) fn encode(script: &KanaScript, src: impl RuneSource, sink: &mut impl ByteSink) {
    let mut window = Lookahead3::new(src);
    let mut mark = GeminationState::default();
    loop {
        let (win, n) = window.peek3();
        if n == 0 {
            break;
        }
        if n == 3 {
            if let Some(kana) = script.lookup(&win) {
                mark.resolve(script.sokuon(), sink);
                sink.put_str(kana);
                window.consume(3);
                continue;
            }
        }
        if n >= 2 {
            if let Some(kana) = script.lookup(&win[..2]) {
                mark.resolve(script.sokuon(), sink);
                sink.put_str(kana);
                window.consume(2);
                continue;
            }
        }
        if let Some(kana) = script.lookup(&win[..1]) {
            mark.resolve(script.sokuon(), sink);
            sink.put_str(kana);
            window.consume(1);
            continue;
        }
        trace!(byte = win[0], "no match, holding byte");
        mark.hold(win[0], sink);
        window.consume(1);
    }
    mark.flush(sink);
    sink.finish();
}
