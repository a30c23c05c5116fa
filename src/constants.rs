
// Khmer Unicode Ranges
pub const KHMER_START: char = '\u{1780}';
pub const KHMER_SYMBOLS_START: char = '\u{19E0}';
pub const KHMER_SYMBOLS_END: char = '\u{19FF}';

// Assigned code points; the main block has holes after U+17DD, U+17E9 and U+17F9.
const KHMER_ASSIGNED: [(char, char); 4] = [
    (KHMER_START, '\u{17DD}'),
    ('\u{17E0}', '\u{17E9}'),
    ('\u{17F0}', '\u{17F9}'),
    (KHMER_SYMBOLS_START, KHMER_SYMBOLS_END),
];

/// Subscript joiner; joins two consonants into one cluster.
pub const COENG: char = '\u{17D2}';

pub const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// True for every code point assigned to the Khmer script, including the
/// lunar-date symbol block.
pub fn is_khmer_char(c: char) -> bool {
    KHMER_ASSIGNED.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

pub fn is_coeng(c: char) -> bool {
    c == COENG
}

pub fn contains_khmer(s: &str) -> bool {
    s.chars().any(is_khmer_char)
}

// Tokenizer boundary. ZWSP is not whitespace per Unicode, it is kept as UNKNOWN.
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}
