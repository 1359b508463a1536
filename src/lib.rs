//! Transliteration between romaji and the two syllabic Japanese scripts,
//! hiragana and katakana.
//!
//! All three directions share one streaming engine: a greedy longest-match
//! scan over 1-3 byte tokens with a one-step-delayed sokuon (consonant
//! doubling) decision. Text the tables do not recognize passes through
//! unaltered, so freely mixed input is fine; romaji output inserts single
//! spaces where a kana run meets unconverted text. Transliteration is
//! inherently lossy and ambiguous; round trips between scripts are not
//! guaranteed.
//!
//! Whole-buffer conversions return the result synchronously; the `_reader`
//! variants run the conversion on a worker thread and hand back a
//! [`ByteStream`] implementing [`std::io::Read`].

mod decoder;
mod encoder;
mod source;
mod stream;
mod table;
mod window;

use std::io::Read;

use tracing::debug_span;

use source::{BytesSource, ReaderSource, StrSource};
use stream::BufSink;
use table::KanaScript;

pub use stream::ByteStream;

fn buffered(run: impl FnOnce(&mut BufSink)) -> Vec<u8> {
    let mut sink = BufSink::default();
    run(&mut sink);
    sink.into_bytes()
}

fn into_string(bytes: Vec<u8>) -> String {
    // Conversion of a &str only ever emits table outputs, whole runes and
    // single ASCII markers, never a torn multi-byte sequence.
    String::from_utf8(bytes).expect("transliterated text is valid UTF-8")
}

/// Transliterate kana in `text` into romaji.
pub fn to_romaji(text: &str) -> String {
    let _span = debug_span!("to_romaji", len = text.len()).entered();
    into_string(buffered(|sink| decoder::decode(StrSource::new(text), sink)))
}

/// Transliterate kana in `text` into romaji. Bytes that are not valid
/// UTF-8 are treated as replacement characters and pass through.
pub fn to_romaji_bytes(text: &[u8]) -> Vec<u8> {
    let _span = debug_span!("to_romaji_bytes", len = text.len()).entered();
    buffered(|sink| decoder::decode(BytesSource::new(text), sink))
}

/// Stream `input` through the kana → romaji conversion. The returned
/// [`ByteStream`] yields converted bytes as they are produced.
pub fn to_romaji_reader(input: impl Read + Send + 'static) -> ByteStream {
    stream::spawn_producer(move |sink| decoder::decode(ReaderSource::new(input), sink))
}

/// Transliterate romaji in `text` into hiragana.
pub fn to_hiragana(text: &str) -> String {
    let _span = debug_span!("to_hiragana", len = text.len()).entered();
    into_string(buffered(|sink| {
        encoder::encode(KanaScript::hiragana(), StrSource::new(text), sink)
    }))
}

/// Transliterate romaji in `text` into hiragana, byte-sequence form.
pub fn to_hiragana_bytes(text: &[u8]) -> Vec<u8> {
    let _span = debug_span!("to_hiragana_bytes", len = text.len()).entered();
    buffered(|sink| encoder::encode(KanaScript::hiragana(), BytesSource::new(text), sink))
}

/// Stream `input` through the romaji → hiragana conversion.
pub fn to_hiragana_reader(input: impl Read + Send + 'static) -> ByteStream {
    stream::spawn_producer(move |sink| {
        encoder::encode(KanaScript::hiragana(), ReaderSource::new(input), sink)
    })
}

/// Transliterate romaji in `text` into katakana.
pub fn to_katakana(text: &str) -> String {
    let _span = debug_span!("to_katakana", len = text.len()).entered();
    into_string(buffered(|sink| {
        encoder::encode(KanaScript::katakana(), StrSource::new(text), sink)
    }))
}

/// Transliterate romaji in `text` into katakana, byte-sequence form.
pub fn to_katakana_bytes(text: &[u8]) -> Vec<u8> {
    let _span = debug_span!("to_katakana_bytes", len = text.len()).entered();
    buffered(|sink| encoder::encode(KanaScript::katakana(), BytesSource::new(text), sink))
}

/// Stream `input` through the romaji → katakana conversion.
pub fn to_katakana_reader(input: impl Read + Send + 'static) -> ByteStream {
    stream::spawn_producer(move |sink| {
        encoder::encode(KanaScript::katakana(), ReaderSource::new(input), sink)
    })
}
