//! Static transliteration tables.
//!
//! Each direction owns an immutable table built once behind a `OnceLock`
//! and never mutated afterwards. Absence of a key is normal control flow,
//! not an error.

use std::collections::HashMap;
use std::sync::OnceLock;

mod hiragana;
mod katakana;
mod romaji;

pub(crate) use romaji::{RomajiTable, SmallKana};

/// Romaji → kana mapping for one syllabic script, partitioned by key byte
/// length. Lookup is exact-match at each length; the scanner supplies the
/// longest-first order.
pub(crate) struct KanaScript {
    by_len: [HashMap<&'static [u8], &'static str>; 3],
    sokuon: &'static str,
}

impl KanaScript {
    fn build(mappings: &[(&'static str, &'static str)], sokuon: &'static str) -> Self {
        let mut by_len: [HashMap<&'static [u8], &'static str>; 3] = Default::default();
        for &(key, kana) in mappings {
            assert!(
                (1..=3).contains(&key.len()),
                "mapping key {key:?} must be 1-3 bytes"
            );
            let prev = by_len[key.len() - 1].insert(key.as_bytes(), kana);
            assert!(prev.is_none(), "duplicate mapping key {key:?}");
        }
        KanaScript { by_len, sokuon }
    }

    pub(crate) fn hiragana() -> &'static KanaScript {
        static INSTANCE: OnceLock<KanaScript> = OnceLock::new();
        INSTANCE.get_or_init(|| KanaScript::build(hiragana::MAPPINGS, hiragana::SOKUON))
    }

    pub(crate) fn katakana() -> &'static KanaScript {
        static INSTANCE: OnceLock<KanaScript> = OnceLock::new();
        INSTANCE.get_or_init(|| KanaScript::build(katakana::MAPPINGS, katakana::SOKUON))
    }

    /// Exact-match lookup of a 1-3 byte key.
    pub(crate) fn lookup(&self, key: &[u8]) -> Option<&'static str> {
        debug_assert!((1..=3).contains(&key.len()));
        self.by_len[key.len() - 1].get(key).copied()
    }

    /// The script's consonant-doubling marker (small tsu).
    pub(crate) fn sokuon(&self) -> &'static str {
        self.sokuon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_build_without_duplicates() {
        // `build` asserts key-length and same-length uniqueness invariants.
        KanaScript::hiragana();
        KanaScript::katakana();
        RomajiTable::global();
    }

    #[test]
    fn lookup_is_exact_per_length() {
        let h = KanaScript::hiragana();
        assert_eq!(h.lookup(b"shi"), Some("し"));
        assert_eq!(h.lookup(b"si"), Some("し"));
        assert_eq!(h.lookup(b"a"), Some("あ"));
        // "sh" is a prefix of a 3-byte key but not a 2-byte key itself.
        assert_eq!(h.lookup(b"sh"), None);
        assert_eq!(h.lookup(b"q"), None);
    }

    #[test]
    fn katakana_mirrors_hiragana_spellings() {
        let h = KanaScript::hiragana();
        let k = KanaScript::katakana();
        for key in [&b"shu"[..], b"pa", b"tsu", b"nya", b"syu"] {
            assert!(h.lookup(key).is_some(), "hiragana missing {key:?}");
            assert!(k.lookup(key).is_some(), "katakana missing {key:?}");
        }
        assert_eq!(k.lookup(b"ca"), Some("カ"));
        assert_eq!(k.sokuon(), "ッ");
        assert_eq!(h.sokuon(), "っ");
    }

    #[test]
    fn small_kana_classes() {
        let t = RomajiTable::global();
        assert!(matches!(t.small('ゃ'), Some(SmallKana::Yoon("ya"))));
        assert!(matches!(t.small('ぇ'), Some(SmallKana::Vowel("e"))));
        assert!(matches!(t.small('っ'), Some(SmallKana::Anomalous("hold"))));
        assert!(matches!(t.small('ヶ'), Some(SmallKana::Anomalous("count"))));
        assert!(t.small('あ').is_none());
        assert_eq!(t.base('し'), Some("shi"));
        assert_eq!(t.base('シ'), Some("shi"));
        assert!(t.base('ゃ').is_none());
    }
}
