//! Kana → romaji mapping and small-kana classification.

use std::collections::HashMap;
use std::sync::OnceLock;

/// What a small kana means when it follows a base syllable.
#[derive(Clone, Copy, Debug)]
pub(crate) enum SmallKana {
    /// Small ya/yu/yo: fuses with the base into a single syllable.
    Yoon(&'static str),
    /// Small vowel: prolongs the base syllable.
    Vowel(&'static str),
    /// No valid combination exists (standalone sokuon, counter marks);
    /// carries a short gloss for the diagnostic passthrough.
    Anomalous(&'static str),
}

/// Kana → romaji lookup tables, built once on first use.
pub(crate) struct RomajiTable {
    base: HashMap<char, &'static str>,
    small: HashMap<char, SmallKana>,
}

impl RomajiTable {
    pub(crate) fn global() -> &'static RomajiTable {
        static INSTANCE: OnceLock<RomajiTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let base = BASE.iter().copied().collect();
            let mut small = HashMap::new();
            for &(c, r) in YOON {
                small.insert(c, SmallKana::Yoon(r));
            }
            for &(c, r) in VOWEL {
                small.insert(c, SmallKana::Vowel(r));
            }
            for &(c, gloss) in ANOMALOUS {
                small.insert(c, SmallKana::Anomalous(gloss));
            }
            RomajiTable { base, small }
        })
    }

    /// Romaji for a plain (full-size) kana, if the character is one.
    pub(crate) fn base(&self, c: char) -> Option<&'static str> {
        self.base.get(&c).copied()
    }

    /// Classification of a small kana, or `None` for anything full-size.
    pub(crate) fn small(&self, c: char) -> Option<SmallKana> {
        self.small.get(&c).copied()
    }
}

static BASE: &[(char, &str)] = &[
    // Hiragana.
    ('あ', "a"),
    ('い', "i"),
    ('う', "u"),
    ('え', "e"),
    ('お', "o"),
    ('か', "ka"),
    ('が', "ga"),
    ('き', "ki"),
    ('ぎ', "gi"),
    ('く', "ku"),
    ('ぐ', "gu"),
    ('け', "ke"),
    ('げ', "ge"),
    ('こ', "ko"),
    ('ご', "go"),
    ('さ', "sa"),
    ('ざ', "za"),
    ('し', "shi"),
    ('じ', "zi"),
    ('す', "su"),
    ('ず', "zu"),
    ('せ', "se"),
    ('ぜ', "ze"),
    ('そ', "so"),
    ('ぞ', "zo"),
    ('た', "ta"),
    ('だ', "da"),
    ('ち', "chi"),
    ('ぢ', "di"),
    ('つ', "tsu"),
    ('づ', "du"),
    ('て', "te"),
    ('で', "de"),
    ('と', "to"),
    ('ど', "do"),
    ('な', "na"),
    ('に', "ni"),
    ('ぬ', "nu"),
    ('ね', "ne"),
    ('の', "no"),
    ('は', "ha"),
    ('ば', "va"),
    ('ぱ', "pa"),
    ('ひ', "hi"),
    ('び', "vi"),
    ('ぴ', "pi"),
    ('ふ', "fu"),
    ('ぶ', "bu"),
    ('ぷ', "pu"),
    ('へ', "he"),
    ('べ', "ve"),
    ('ぺ', "pe"),
    ('ほ', "ho"),
    ('ぼ', "vo"),
    ('ぽ', "po"),
    ('ま', "ma"),
    ('み', "mi"),
    ('む', "mu"),
    ('め', "me"),
    ('も', "mo"),
    ('や', "ya"),
    ('ゆ', "yu"),
    ('よ', "yo"),
    ('ら', "ra"),
    ('り', "ri"),
    ('る', "ru"),
    ('れ', "re"),
    ('ろ', "ro"),
    ('わ', "wa"),
    ('ゐ', "wi"),
    ('ゑ', "we"),
    ('を', "wo"),
    ('ん', "n"),
    ('ゔ', "vu"),
    // Katakana.
    ('ア', "a"),
    ('イ', "i"),
    ('ウ', "u"),
    ('エ', "e"),
    ('オ', "o"),
    ('カ', "ka"),
    ('ガ', "ga"),
    ('キ', "ki"),
    ('ギ', "gi"),
    ('ク', "ku"),
    ('グ', "gu"),
    ('ケ', "ke"),
    ('ゲ', "ge"),
    ('コ', "ko"),
    ('ゴ', "go"),
    ('サ', "sa"),
    ('ザ', "za"),
    ('シ', "shi"),
    ('ジ', "zi"),
    ('ス', "su"),
    ('ズ', "zu"),
    ('セ', "se"),
    ('ゼ', "ze"),
    ('ソ', "so"),
    ('ゾ', "zo"),
    ('タ', "ta"),
    ('ダ', "da"),
    ('チ', "chi"),
    ('ヂ', "di"),
    ('ツ', "tsu"),
    ('ヅ', "du"),
    ('テ', "te"),
    ('デ', "de"),
    ('ト', "to"),
    ('ド', "do"),
    ('ナ', "na"),
    ('ニ', "ni"),
    ('ヌ', "nu"),
    ('ネ', "ne"),
    ('ノ', "no"),
    ('ハ', "ha"),
    ('バ', "va"),
    ('パ', "pa"),
    ('ヒ', "hi"),
    ('ビ', "vi"),
    ('ピ', "pi"),
    ('フ', "fu"),
    ('ブ', "bu"),
    ('プ', "pu"),
    ('ヘ', "he"),
    ('ベ', "ve"),
    ('ペ', "pe"),
    ('ホ', "ho"),
    ('ボ', "vo"),
    ('ポ', "po"),
    ('マ', "ma"),
    ('ミ', "mi"),
    ('ム', "mu"),
    ('メ', "me"),
    ('モ', "mo"),
    ('ヤ', "ya"),
    ('ユ', "yu"),
    ('ヨ', "yo"),
    ('ラ', "ra"),
    ('リ', "ri"),
    ('ル', "ru"),
    ('レ', "re"),
    ('ロ', "ro"),
    ('ワ', "wa"),
    ('ヰ', "wi"),
    ('ヱ', "we"),
    ('ヲ', "wo"),
    ('ン', "n"),
    ('ヴ', "vu"),
];

static YOON: &[(char, &str)] = &[
    ('ゃ', "ya"),
    ('ゅ', "yu"),
    ('ょ', "yo"),
    ('ャ', "ya"),
    ('ュ', "yu"),
    ('ョ', "yo"),
];

static VOWEL: &[(char, &str)] = &[
    ('ぁ', "a"),
    ('ぃ', "i"),
    ('ぅ', "u"),
    ('ぇ', "e"),
    ('ぉ', "o"),
    ('ァ', "a"),
    ('ィ', "i"),
    ('ゥ', "u"),
    ('ェ', "e"),
    ('ォ', "o"),
];

static ANOMALOUS: &[(char, &str)] = &[
    ('っ', "hold"),  // sokuon: holds the following consonant
    ('ゕ', "count"), // counter marks
    ('ゖ', "count"),
    ('ゎ', "small"),
    ('ッ', "hold"),
    ('ヵ', "count"),
    ('ヶ', "count"),
    ('ヮ', "small"),
];
