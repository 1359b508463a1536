//! Kana → romaji decoding.
//!
//! A rune-wise scan with one character of lookahead. Runs of kana are
//! separated from surrounding unconverted text by single spaces so the
//! boundary survives in the romaji output.

use crate::source::{RuneSource, Runes};
use crate::stream::ByteSink;
use crate::table::{RomajiTable, SmallKana};

pub(crate) fn decode(src: impl RuneSource, sink: &mut impl ByteSink) {
    let table = RomajiTable::global();
    let mut runes = Runes::new(src);
    let mut first = true;
    let mut prev_kana = false;
    while let Some(c) = runes.next() {
        let Some(base) = table.base(c) else {
            if prev_kana {
                sink.put(b' ');
            }
            sink.put_char(c);
            prev_kana = false;
            first = false;
            continue;
        };
        if !first && !prev_kana {
            sink.put(b' ');
        }
        first = false;
        prev_kana = true;

        let Some(small) = runes.peek().and_then(|m| table.small(m)) else {
            sink.put_str(base);
            continue;
        };
        runes.next();
        match small {
            // Fuse into one syllable: base minus its trailing vowel, plus
            // the modifier's romaji minus its leading consonant.
            SmallKana::Yoon(syllable) => {
                sink.put_str(&base[..base.len() - 1]);
                sink.put_str(&syllable[1..]);
            }
            SmallKana::Vowel(_) => {
                sink.put_str(base);
                sink.put(b'-');
            }
            // No valid combination; surface the pair instead of dropping it.
            SmallKana::Anomalous(gloss) => {
                sink.put(b'<');
                sink.put_str(base);
                sink.put(b'.');
                sink.put_str(gloss);
                sink.put(b'>');
            }
        }
    }
    sink.finish();
}
