//! End-to-end tests across all three directions and all adapters: string,
//! byte slice, and streamed reader must agree byte for byte.

use std::io::{Cursor, Read};

use proptest::prelude::*;

use romakana::{
    to_hiragana, to_hiragana_bytes, to_hiragana_reader, to_katakana, to_katakana_bytes,
    to_katakana_reader, to_romaji, to_romaji_bytes, to_romaji_reader, ByteStream,
};

struct Direction {
    name: &'static str,
    string: fn(&str) -> String,
    bytes: fn(&[u8]) -> Vec<u8>,
    reader: fn(Cursor<Vec<u8>>) -> ByteStream,
}

const DIRECTIONS: &[Direction] = &[
    Direction {
        name: "romaji",
        string: to_romaji,
        bytes: to_romaji_bytes,
        reader: |r| to_romaji_reader(r),
    },
    Direction {
        name: "hiragana",
        string: to_hiragana,
        bytes: to_hiragana_bytes,
        reader: |r| to_hiragana_reader(r),
    },
    Direction {
        name: "katakana",
        string: to_katakana,
        bytes: to_katakana_bytes,
        reader: |r| to_katakana_reader(r),
    },
];

fn drained(stream: &mut ByteStream) -> Vec<u8> {
    let mut out = Vec::new();
    stream.read_to_end(&mut out).unwrap();
    out
}

fn check_all(dir: &Direction, input: &str, want: &str) {
    assert_eq!((dir.string)(input), want, "{} string {input:?}", dir.name);
    assert_eq!(
        (dir.bytes)(input.as_bytes()),
        want.as_bytes(),
        "{} bytes {input:?}",
        dir.name
    );
    let mut stream = (dir.reader)(Cursor::new(input.as_bytes().to_vec()));
    assert_eq!(
        drained(&mut stream),
        want.as_bytes(),
        "{} reader {input:?}",
        dir.name
    );
}

#[test]
fn romaji_pairs() {
    let dir = &DIRECTIONS[0];
    for (input, want) in [
        ("", ""),
        ("now is the time\n", "now is the time\n"),
        ("ひらがな", "hiragana"),
        ("カタカナ", "katakana"),
        // Non-kana passes through, with spaces at run boundaries.
        ("a日本語ひらがなカタカナb\n", "a日本語 hiraganakatakana b\n"),
        ("きょう", "kou"),
    ] {
        check_all(dir, input, want);
    }
}

#[test]
fn hiragana_pairs() {
    let dir = &DIRECTIONS[1];
    for (input, want) in [
        ("", ""),
        ("xxqq", "xxqq"),
        ("hiragana", "ひらがな"),
        ("chachodhowi", "ちゃちょぢょうぃ"),
        ("tcho", "っちょ"),
        ("atcho", "あっちょ"),
        ("shuppatu", "しゅっぱつ"),
        ("syuppatu", "しゅっぱつ"),
        ("syuppatsu", "しゅっぱつ"),
        (
            "カタカナ日本語カタカナひらがなカタカナ\n",
            "カタカナ日本語カタカナひらがなカタカナ\n",
        ),
    ] {
        check_all(dir, input, want);
    }
}

#[test]
fn katakana_pairs() {
    let dir = &DIRECTIONS[2];
    for (input, want) in [
        ("", ""),
        ("xxqq", "xxqq"),
        ("katakana", "カタカナ"),
        ("tcho", "ッチョ"),
        ("shuppatu", "シュッパツ"),
        (
            "カタカナ日本語カタカナひらがなカタカナ\n",
            "カタカナ日本語カタカナひらがなカタカナ\n",
        ),
    ] {
        check_all(dir, input, want);
    }
}

#[test]
fn yoon_decodes_to_fused_syllable() {
    // A standalone small tsu between syllables is not kana to the decoder,
    // so it splits the run.
    check_all(&DIRECTIONS[0], "しょっちゅう", "sho っ chuu");
    check_all(&DIRECTIONS[0], "きょ", "ko");
    // An isolated modifier has no base and passes through unaltered.
    check_all(&DIRECTIONS[0], "ゃ", "ゃ");
}

#[test]
fn streaming_handles_input_beyond_queue_capacity() {
    // Queue capacity is 100 bytes; push a few thousand through it.
    let input = "shuppatsu ".repeat(500);
    let want = (DIRECTIONS[1].bytes)(input.as_bytes());
    let mut stream = to_hiragana_reader(Cursor::new(input.into_bytes()));
    assert_eq!(drained(&mut stream), want);
}

#[test]
fn reader_eof_is_sticky() {
    let mut stream = to_katakana_reader(Cursor::new(b"sushi".to_vec()));
    assert_eq!(drained(&mut stream), "スシ".as_bytes());
    let mut buf = [0u8; 16];
    assert_eq!(stream.read(&mut buf).unwrap(), 0);
}

proptest! {
    /// Buffered and streamed conversions agree on arbitrary input.
    #[test]
    fn buffered_equals_streamed(input in ".*") {
        for dir in DIRECTIONS {
            let buffered = (dir.bytes)(input.as_bytes());
            let mut stream = (dir.reader)(Cursor::new(input.clone().into_bytes()));
            prop_assert_eq!(&drained(&mut stream), &buffered, "{}", dir.name);
        }
    }

    /// Input with no convertible tokens comes out untouched.
    #[test]
    fn unconvertible_input_passes_through(input in "[A-Z0-9 .!?]*") {
        for dir in DIRECTIONS {
            prop_assert_eq!((dir.string)(&input), input.clone(), "{}", dir.name);
        }
    }

    /// String and byte-slice entry points always agree.
    #[test]
    fn string_equals_bytes(input in ".*") {
        for dir in DIRECTIONS {
            prop_assert_eq!(
                (dir.string)(&input).into_bytes(),
                (dir.bytes)(input.as_bytes()),
                "{}", dir.name
            );
        }
    }
}
