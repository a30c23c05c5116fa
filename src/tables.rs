//! Static Khmer category tables.
//!
//! Every table is immutable process-wide data. The declaration order of
//! [`EXTRA_CONSONANTS`] and [`VOWEL_COMBINATIONS`] is significant: entries are
//! listed longest-first and, within one length, in their historical order.
//! Classifiers iterate them in that order and the first match wins.

use serde::Serialize;

/// Phonetic reading class of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Series {
    #[serde(rename = "a")]
    A,
    #[serde(rename = "o")]
    O,
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Series::A => write!(f, "a"),
            Series::O => write!(f, "o"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsonantDef {
    pub letter: char,
    pub trans: &'static str,
    pub series: Series,
    pub ipa: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExtraConsonantDef {
    pub letters: &'static str,
    pub desc: &'static str,
    pub trans: &'static str,
    pub series: Series,
    pub ipa: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VowelDef {
    pub letter: char,
    pub trans_a: &'static str,
    pub trans_o: &'static str,
    pub ipa_a: &'static str,
    pub ipa_o: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VowelCombinationDef {
    pub letters: &'static str,
    pub trans_a: &'static str,
    pub trans_o: &'static str,
    pub ipa_a: &'static str,
    pub ipa_o: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndependentVowelDef {
    pub letter: char,
    pub trans: &'static str,
    pub ipa: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiacriticDef {
    pub symbol: char,
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberDef {
    pub digit: char,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PunctuationDef {
    pub symbol: char,
    pub name: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarDateSymbolDef {
    pub symbol: char,
    pub name: &'static str,
}

macro_rules! consonant {
    ($letter:literal, $ipa:literal, $trans:literal, $series:ident) => {
        ConsonantDef { letter: $letter, ipa: $ipa, trans: $trans, series: Series::$series }
    };
}

// អ is listed with the vowels, not here.
pub static CONSONANTS: [ConsonantDef; 32] = [
    consonant!('ក', "kɑː", "ка", A),
    consonant!('ខ', "kʰɑː", "кха", A),
    consonant!('គ', "kɔː", "ко", O),
    consonant!('ឃ', "kʰɔː", "кхо", O),
    consonant!('ង', "ŋɔː", "нго", O),
    consonant!('ច', "cɑː", "тя", A),
    consonant!('ឆ', "cʰɑː", "ча", A),
    consonant!('ជ', "cɔː", "тё", O),
    consonant!('ឈ', "cʰɔː", "чо", O),
    consonant!('ញ', "ɲɔː", "нё", O),
    consonant!('ដ', "ɗɑː", ".да", A),
    consonant!('ឋ', "tʰɑː", ".тха", A),
    consonant!('ឌ', "ɗɔː", ".до", O),
    consonant!('ឍ', "tʰɔː", ".тхо", O),
    consonant!('ណ', "nɑː", ".на", A),
    consonant!('ត', "tɑː", "та", A),
    consonant!('ថ', "tʰɑː", "тха", A),
    consonant!('ទ', "tɔː", "то", O),
    consonant!('ធ', "tʰɔː", "тхо", O),
    consonant!('ន', "nɔː", "но", O),
    consonant!('ប', "ɓɑː", "ба", A),
    consonant!('ផ', "pʰɑː", "пха", A),
    consonant!('ព', "pɔː", "по", O),
    consonant!('ភ', "pʰɔː", "пхо", O),
    consonant!('ម', "mɔː", "мо", O),
    consonant!('យ', "jɔː", "йо", O),
    consonant!('រ', "rɔː", "ро", O),
    consonant!('ល', "lɔː", "ло", O),
    consonant!('វ', "ʋɔː", "во", O),
    consonant!('ស', "sɑː", "са", A),
    consonant!('ហ', "hɑː", "ха", A),
    consonant!('ឡ', "lɑː", "ла", A),
];

// Longest first. Four-character clusters precede the three-character ones
// they extend, so ហ្គ៊ wins over ហ្គ.
pub static EXTRA_CONSONANTS: [ExtraConsonantDef; 10] = [
    ExtraConsonantDef { letters: "ហ្គ៊", desc: "ха + ко + трейсап", trans: "го", series: Series::O, ipa: "ɡɔː" },
    ExtraConsonantDef { letters: "ហ្វ៊", desc: "ха + во + трейсап", trans: "фо", series: Series::O, ipa: "fɔː" },
    ExtraConsonantDef { letters: "ហ្ស៊", desc: "ха + са + трейсап", trans: "жо, зо", series: Series::O, ipa: "ʒɔː, zɔː" },
    ExtraConsonantDef { letters: "ហ្គ", desc: "ха + ко", trans: "га", series: Series::A, ipa: "ɡɑː" },
    ExtraConsonantDef { letters: "ហ្ន", desc: "ха + но", trans: "на", series: Series::A, ipa: "nɑː" },
    ExtraConsonantDef { letters: "ហ្ម", desc: "ха + мо", trans: "ма", series: Series::A, ipa: "mɑː" },
    ExtraConsonantDef { letters: "ហ្ល", desc: "ха + ло", trans: "ла", series: Series::A, ipa: "lɑː" },
    ExtraConsonantDef { letters: "ហ្វ", desc: "ха + во", trans: "фа", series: Series::A, ipa: "fɑː" },
    ExtraConsonantDef { letters: "ហ្ស", desc: "ха + са", trans: "жа, за", series: Series::A, ipa: "ʒɑː, zɑː" },
    ExtraConsonantDef { letters: "ប៉", desc: "ба + тмень-кандоль", trans: "па", series: Series::A, ipa: "pɑː" },
];

macro_rules! vowel {
    ($letter:literal, $ta:literal, $to:literal, $ia:literal, $io:literal) => {
        VowelDef { letter: $letter, trans_a: $ta, trans_o: $to, ipa_a: $ia, ipa_o: $io }
    };
}

pub static VOWELS: [VowelDef; 17] = [
    vowel!('អ', "а", "о", "ɑː", "ɔː"),
    vowel!('ា', "а", "еа", "aː", "iːə"),
    vowel!('ិ', "е", "и", "ə, e", "ɨ, i"),
    vowel!('ី', "эй", "и", "əj", "iː"),
    vowel!('ឹ', "э", "ы", "ə", "ɨ"),
    vowel!('ឺ', "э", "ы", "əɨ", "ɨː"),
    vowel!('ុ', "о", "у", "o", "u"),
    vowel!('ូ', "оу", "у", "ou", "uː"),
    vowel!('ួ', "уо", "уо", "uə", "uə"),
    vowel!('ើ', "аэ", "э", "aə", "əː"),
    vowel!('ឿ', "ыа", "ыа", "ɨə", "ɨə"),
    vowel!('ៀ', "ие", "ие", "iə", "iə"),
    vowel!('េ', "е", "е", "ei", "eː"),
    vowel!('ែ', "ае", "э", "ae", "ɛː"),
    vowel!('ៃ', "ай", "ей", "aj", "ɨj"),
    vowel!('ោ', "ао", "оу", "ao", "oː"),
    vowel!('ៅ', "ау", "эу", "aw", "ɨw"),
];

// Longest first, see EXTRA_CONSONANTS.
pub static VOWEL_COMBINATIONS: [VowelCombinationDef; 8] = [
    VowelCombinationDef { letters: "ុំ", trans_a: "ом", trans_o: "ум", ipa_a: "om", ipa_o: "um" },
    VowelCombinationDef { letters: "ាំ", trans_a: "ам", trans_o: "оам", ipa_a: "am", ipa_o: "ŏəm" },
    VowelCombinationDef { letters: "ិះ", trans_a: "ех", trans_o: "их", ipa_a: "eh", ipa_o: "ih" },
    VowelCombinationDef { letters: "ុះ", trans_a: "ох", trans_o: "ух", ipa_a: "oh", ipa_o: "uh" },
    VowelCombinationDef { letters: "េះ", trans_a: "эх", trans_o: "их", ipa_a: "eh", ipa_o: "ih" },
    VowelCombinationDef { letters: "ោះ", trans_a: "аох", trans_o: "уох", ipa_a: "ɑh", ipa_o: "ŭəh" },
    VowelCombinationDef { letters: "ំ", trans_a: "ам", trans_o: "ум", ipa_a: "ɑm", ipa_o: "um" },
    VowelCombinationDef { letters: "ះ", trans_a: "ах", trans_o: "эах", ipa_a: "ah", ipa_o: "ĕəh" },
];

pub static INDEPENDENT_VOWELS: [IndependentVowelDef; 16] = [
    IndependentVowelDef { letter: 'ឣ', trans: "а", ipa: "ʔɑʔ", desc: "Independent â" },
    IndependentVowelDef { letter: 'ឤ', trans: "а", ipa: "ʔa", desc: "Independent a" },
    IndependentVowelDef { letter: 'ឥ', trans: "э, и", ipa: "ʔə, ʔɨ, ʔəj", desc: "Independent e" },
    IndependentVowelDef { letter: 'ឦ', trans: "эй", ipa: "ʔəj", desc: "Independent ei" },
    IndependentVowelDef { letter: 'ឧ', trans: "о, у, ао", ipa: "ʔo, ʔu, ʔao", desc: "Independent o" },
    IndependentVowelDef { letter: 'ឩ', trans: "оу, у", ipa: "ʔou, ʔuː", desc: "Independent u" },
    IndependentVowelDef { letter: 'ឪ', trans: "ау", ipa: "ʔəw", desc: "Independent au" },
    IndependentVowelDef { letter: 'ឫ', trans: "ры", ipa: "rɨ", desc: "Independent roe" },
    IndependentVowelDef { letter: 'ឬ', trans: "ры", ipa: "rɨː", desc: "Independent rueu" },
    IndependentVowelDef { letter: 'ឭ', trans: "лы", ipa: "lɨ", desc: "Independent loe" },
    IndependentVowelDef { letter: 'ឮ', trans: "лы", ipa: "lɨː", desc: "Independent lueu" },
    IndependentVowelDef { letter: 'ឯ', trans: "аэ, э", ipa: "ʔae, ʔɛː, ʔeː", desc: "Independent ae" },
    IndependentVowelDef { letter: 'ឰ', trans: "ай", ipa: "ʔaj", desc: "Independent ai" },
    IndependentVowelDef { letter: 'ឱ', trans: "ао", ipa: "ʔao", desc: "Independent ao" },
    IndependentVowelDef { letter: 'ឲ', trans: "ао", ipa: "ʔao", desc: "Independent ao (variant)" },
    IndependentVowelDef { letter: 'ឳ', trans: "ау", ipa: "ʔaw", desc: "Independent au (obsolete/variant)" },
];

pub static DIACRITICS: [DiacriticDef; 14] = [
    DiacriticDef {
        symbol: 'ំ',
        name: "និគ្គហិត (nĭkkôhĕt)",
        desc: "Nasalizes the inherent or dependent vowel with an added [m]; long vowels are shortened.",
    },
    DiacriticDef {
        symbol: 'ះ',
        name: "រះមុខ (reăhmŭkh)",
        desc: "Adds final aspiration /h/ to the inherent or dependent vowel.",
    },
    DiacriticDef {
        symbol: 'ៈ',
        name: "យុគលពិន្ទុ (yŭkoălpĭntŭ)",
        desc: "Marks a short vowel followed by a glottal stop.",
    },
    DiacriticDef {
        symbol: '៉',
        name: "មូសិកទន្ត (musĕkâtônd)",
        desc: "Converts some o-series consonants (ង ញ ម យ រ វ) to a-series; turns ប into /p/.",
    },
    DiacriticDef {
        symbol: '៊',
        name: "ត្រីស័ព្ទ (treisăpt)",
        desc: "Converts some a-series consonants (ស ហ ប អ) to o-series.",
    },
    DiacriticDef {
        symbol: 'ុ',
        name: "ក្បៀសក្រោម (kbiĕs kraôm)",
        desc: "Replaces treisăpt or musĕkâtônd when a superscript vowel is in the way.",
    },
    DiacriticDef {
        symbol: '់',
        name: "បន្តក់ (bânták)",
        desc: "Shortens certain vowels of the syllable.",
    },
    DiacriticDef {
        symbol: '៌',
        name: "របាទ (rôbat) / រេផៈ (réphă)",
        desc: "Repha of Sanskrit loanwords; usually silent together with its consonant.",
    },
    DiacriticDef {
        symbol: '៍',
        name: "ទណ្ឌឃាដ (tôndôkhéad)",
        desc: "Marks a final consonant as unpronounced.",
    },
    DiacriticDef {
        symbol: '៎',
        name: "កាកបាទ (kakâbat)",
        desc: "Rising intonation of an exclamation, often on particles.",
    },
    DiacriticDef {
        symbol: '័',
        name: "សំយោគសញ្ញា (sâmyoŭk sânhnhéa)",
        desc: "Short vowel in some Sanskrit and Pali loanwords.",
    },
    DiacriticDef {
        symbol: '៏',
        name: "អស្តា (âsda)",
        desc: "Consonant is read with its inherent vowel rather than as a final.",
    },
    DiacriticDef {
        symbol: '៑',
        name: "វិរាម (vĭréam)",
        desc: "Mostly obsolete virāma; suppresses the inherent vowel.",
    },
    DiacriticDef {
        symbol: '្',
        name: "ជើង (cheung)",
        desc: "Coeng; the following consonant is written as a subscript.",
    },
];

pub static NUMBERS: [NumberDef; 10] = [
    NumberDef { digit: '០', value: 0 },
    NumberDef { digit: '១', value: 1 },
    NumberDef { digit: '២', value: 2 },
    NumberDef { digit: '៣', value: 3 },
    NumberDef { digit: '៤', value: 4 },
    NumberDef { digit: '៥', value: 5 },
    NumberDef { digit: '៦', value: 6 },
    NumberDef { digit: '៧', value: 7 },
    NumberDef { digit: '៨', value: 8 },
    NumberDef { digit: '៩', value: 9 },
];

pub static PUNCTUATIONS: [PunctuationDef; 7] = [
    PunctuationDef { symbol: '។', name: "ខណ្ឌ (khând)", desc: "Full stop." },
    PunctuationDef { symbol: '៘', name: "ល៉ៈ (lăk)", desc: "Equivalent to etc." },
    PunctuationDef { symbol: 'ៗ', name: "លេខទោ (lékh toŭ)", desc: "Repeats the preceding word or phrase." },
    PunctuationDef { symbol: '៕', name: "បរិយោសាន (bârĭyoŭsan)", desc: "Ends a text or a chapter." },
    PunctuationDef { symbol: '៚', name: "គោមូត្រ (koŭmutr)", desc: "Ends poetic or religious texts." },
    PunctuationDef { symbol: '៙', name: "ភ្នែកមាន់ (phnêk moăn)", desc: "Opens poetic or religious texts." },
    PunctuationDef { symbol: '៖', name: "ចំណុចពីរគូស (châmnŏch pir kus)", desc: "Used like a colon." },
];

pub static KHMER_LUNAR_DATE_SYMBOLS: [LunarDateSymbolDef; 32] = [
    LunarDateSymbolDef { symbol: '᧠', name: "Pathamasat" },
    LunarDateSymbolDef { symbol: '᧡', name: "Muoy Koet" },
    LunarDateSymbolDef { symbol: '᧢', name: "Pii Koet" },
    LunarDateSymbolDef { symbol: '᧣', name: "Bei Koet" },
    LunarDateSymbolDef { symbol: '᧤', name: "Buon Koet" },
    LunarDateSymbolDef { symbol: '᧥', name: "Pram Koet" },
    LunarDateSymbolDef { symbol: '᧦', name: "Pram-Muoy Koet" },
    LunarDateSymbolDef { symbol: '᧧', name: "Pram-Pii Koet" },
    LunarDateSymbolDef { symbol: '᧨', name: "Pram-Bei Koet" },
    LunarDateSymbolDef { symbol: '᧩', name: "Pram-Buon Koet" },
    LunarDateSymbolDef { symbol: '᧪', name: "Dap Koet" },
    LunarDateSymbolDef { symbol: '᧫', name: "Dap-Muoy Koet" },
    LunarDateSymbolDef { symbol: '᧬', name: "Dap-Pii Koet" },
    LunarDateSymbolDef { symbol: '᧭', name: "Dap-Bei Koet" },
    LunarDateSymbolDef { symbol: '᧮', name: "Dap-Buon Koet" },
    LunarDateSymbolDef { symbol: '᧯', name: "Dap-Pram Koet" },
    LunarDateSymbolDef { symbol: '᧰', name: "Tuteyasat" },
    LunarDateSymbolDef { symbol: '᧱', name: "Muoy Roc" },
    LunarDateSymbolDef { symbol: '᧲', name: "Pii Roc" },
    LunarDateSymbolDef { symbol: '᧳', name: "Bei Roc" },
    LunarDateSymbolDef { symbol: '᧴', name: "Buon Roc" },
    LunarDateSymbolDef { symbol: '᧵', name: "Pram Roc" },
    LunarDateSymbolDef { symbol: '᧶', name: "Pram-Muoy Roc" },
    LunarDateSymbolDef { symbol: '᧷', name: "Pram-Pii Roc" },
    LunarDateSymbolDef { symbol: '᧸', name: "Pram-Bei Roc" },
    LunarDateSymbolDef { symbol: '᧹', name: "Pram-Buon Roc" },
    LunarDateSymbolDef { symbol: '᧺', name: "Dap Roc" },
    LunarDateSymbolDef { symbol: '᧻', name: "Dap-Muoy Roc" },
    LunarDateSymbolDef { symbol: '᧼', name: "Dap-Pii Roc" },
    LunarDateSymbolDef { symbol: '᧽', name: "Dap-Bei Roc" },
    LunarDateSymbolDef { symbol: '᧾', name: "Dap-Buon Roc" },
    LunarDateSymbolDef { symbol: '᧿', name: "Dap-Pram Roc" },
];

/// Irregular entries that fit no category. Matched against whole words only.
pub static OTHER_KNOWN_WORDS: [&str; 24] = [
    "គ៖",
    "ឝ",
    "ឞ",
    "ខៗ",
    "។ល។",
    "ឝ្រី",
    "ឨ",
    "\u{17B4}", // vowel inherent AQ
    "\u{17B5}", // vowel inherent AA
    "\u{17D2}", // coeng
    "\u{17D3}", // bathamasat
    "\u{17DB}", // riel
    "\u{17DC}", // avakrahasanya
    "\u{17DD}", // attham
    "\u{17F0}", // lek attak son
    "\u{17F1}",
    "\u{17F2}",
    "\u{17F3}",
    "\u{17F4}",
    "\u{17F5}",
    "\u{17F6}",
    "\u{17F7}",
    "\u{17F8}",
    "\u{17F9}",
];

pub fn find_consonant(c: char) -> Option<&'static ConsonantDef> {
    CONSONANTS.iter().find(|d| d.letter == c)
}

pub fn find_extra_consonant(letters: &str) -> Option<&'static ExtraConsonantDef> {
    EXTRA_CONSONANTS.iter().find(|d| d.letters == letters)
}

pub fn find_vowel(c: char) -> Option<&'static VowelDef> {
    VOWELS.iter().find(|d| d.letter == c)
}

pub fn find_vowel_combination(letters: &str) -> Option<&'static VowelCombinationDef> {
    VOWEL_COMBINATIONS.iter().find(|d| d.letters == letters)
}

pub fn find_independent_vowel(c: char) -> Option<&'static IndependentVowelDef> {
    INDEPENDENT_VOWELS.iter().find(|d| d.letter == c)
}

pub fn find_diacritic(c: char) -> Option<&'static DiacriticDef> {
    DIACRITICS.iter().find(|d| d.symbol == c)
}

pub fn find_other_known(word: &str) -> Option<&'static str> {
    OTHER_KNOWN_WORDS.iter().copied().find(|w| *w == word)
}

pub fn is_consonant(c: char) -> bool {
    find_consonant(c).is_some()
}

pub fn is_vowel(c: char) -> bool {
    find_vowel(c).is_some()
}

pub fn is_independent_vowel(c: char) -> bool {
    find_independent_vowel(c).is_some()
}

pub fn is_diacritic(c: char) -> bool {
    find_diacritic(c).is_some()
}

pub fn is_khmer_number(c: char) -> bool {
    NUMBERS.iter().any(|d| d.digit == c)
}

pub fn is_khmer_punctuation(c: char) -> bool {
    PUNCTUATIONS.iter().any(|d| d.symbol == c)
}

pub fn is_lunar_date_symbol(c: char) -> bool {
    KHMER_LUNAR_DATE_SYMBOLS.iter().any(|d| d.symbol == c)
}
