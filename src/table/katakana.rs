//! Romaji → katakana mappings.
//!
//! Mirrors the hiragana table entry for entry so both scripts accept the
//! same spellings, plus a few katakana-only variants (ca/cu/co, m).

/// Small tsu, doubling the consonant of the following syllable.
pub(super) const SOKUON: &str = "ッ";

pub(super) static MAPPINGS: &[(&str, &str)] = &[
    // Bare vowels and syllabic n/m.
    ("a", "ア"),
    ("i", "イ"),
    ("u", "ウ"),
    ("e", "エ"),
    ("o", "オ"),
    ("n", "ン"),
    ("m", "ン"),
    // Small vowels.
    ("xa", "ァ"),
    ("xi", "ィ"),
    ("xu", "ゥ"),
    ("xe", "ェ"),
    ("xo", "ォ"),
    // k/g rows.
    ("ka", "カ"),
    ("ki", "キ"),
    ("ku", "ク"),
    ("ke", "ケ"),
    ("ko", "コ"),
    ("ca", "カ"),
    ("cu", "ク"),
    ("co", "コ"),
    ("ga", "ガ"),
    ("gi", "ギ"),
    ("gu", "グ"),
    ("ge", "ゲ"),
    ("go", "ゴ"),
    ("kya", "キャ"),
    ("kyu", "キュ"),
    ("kyo", "キョ"),
    ("gya", "ギャ"),
    ("gyu", "ギュ"),
    ("gyo", "ギョ"),
    // s/z rows.
    ("sa", "サ"),
    ("si", "シ"),
    ("su", "ス"),
    ("se", "セ"),
    ("so", "ソ"),
    ("za", "ザ"),
    ("ji", "ジ"),
    ("zu", "ズ"),
    ("ze", "ゼ"),
    ("zo", "ゾ"),
    ("shi", "シ"),
    ("sha", "シャ"),
    ("shu", "シュ"),
    ("sho", "ショ"),
    ("sya", "シャ"),
    ("syu", "シュ"),
    ("syo", "ショ"),
    ("ja", "ジャ"),
    ("ju", "ジュ"),
    ("jo", "ジョ"),
    // t/d rows.
    ("ta", "タ"),
    ("ti", "チ"),
    ("tu", "ツ"),
    ("te", "テ"),
    ("to", "ト"),
    ("da", "ダ"),
    ("di", "ディ"),
    ("du", "ドゥ"),
    ("de", "デ"),
    ("do", "ド"),
    ("chi", "チ"),
    ("tsu", "ツ"),
    ("cha", "チャ"),
    ("chu", "チュ"),
    ("che", "チェ"),
    ("cho", "チョ"),
    ("thi", "ティ"),
    ("thu", "トゥ"),
    ("dhi", "ヂ"),
    ("dhu", "ヅ"),
    ("dha", "ヂャ"),
    ("dhe", "ヂェ"),
    ("dho", "ヂョ"),
    // n row.
    ("na", "ナ"),
    ("ni", "ニ"),
    ("nu", "ヌ"),
    ("ne", "ネ"),
    ("no", "ノ"),
    ("nya", "ニャ"),
    ("nyu", "ニュ"),
    ("nyo", "ニョ"),
    // h/b/p rows.
    ("ha", "ハ"),
    ("hi", "ヒ"),
    ("fu", "フ"),
    ("he", "ヘ"),
    ("ho", "ホ"),
    ("ba", "バ"),
    ("bi", "ビ"),
    ("bu", "ブ"),
    ("be", "ベ"),
    ("bo", "ボ"),
    ("pa", "パ"),
    ("pi", "ピ"),
    ("pu", "プ"),
    ("pe", "ペ"),
    ("po", "ポ"),
    ("fa", "ファ"),
    ("fi", "フィ"),
    ("fe", "フェ"),
    ("fo", "フォ"),
    ("hya", "ヒャ"),
    ("hyu", "ヒュ"),
    ("hyo", "ヒョ"),
    ("bya", "ビャ"),
    ("byu", "ビュ"),
    ("byo", "ビョ"),
    ("pya", "ピャ"),
    ("pyu", "ピュ"),
    ("pyo", "ピョ"),
    // m row.
    ("ma", "マ"),
    ("mi", "ミ"),
    ("mu", "ム"),
    ("me", "メ"),
    ("mo", "モ"),
    ("mya", "ミャ"),
    ("myu", "ミュ"),
    ("myo", "ミョ"),
    // y row and small ya/yu/yo.
    ("ya", "ヤ"),
    ("yu", "ユ"),
    ("ye", "イェ"),
    ("yo", "ヨ"),
    ("xya", "ャ"),
    ("xyu", "ュ"),
    ("xyo", "ョ"),
    // r row.
    ("ra", "ラ"),
    ("ri", "リ"),
    ("ru", "ル"),
    ("re", "レ"),
    ("ro", "ロ"),
    ("rya", "リャ"),
    ("ryu", "リュ"),
    ("ryo", "リョ"),
    // w/v rows.
    ("wa", "ワ"),
    ("wi", "ウィ"),
    ("we", "ウェ"),
    ("wo", "ヲ"),
    ("va", "ヴァ"),
    ("vi", "ヴィ"),
    ("vu", "ヴ"),
    ("ve", "ヴェ"),
    ("vo", "ヴォ"),
];
