//! Dictionary order of index keys.
//!
//! Keys are ordered by Khmer collation rather than by code point: the
//! combining signs that collate as ignorable come first, then the spacing
//! signs, consonants (with the extra-consonant clusters after their base
//! letter), independent vowels, dependent vowels with their combinations,
//! and the coeng last. Signs that collate equal keep their table order.

use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::sync::OnceLock;

pub static KEY_ORDER: [&str; 94] = [
    // ignorable signs
    "\u{17CB}", "\u{17CC}", "\u{17CD}", "\u{17CE}", "\u{17D0}", "\u{17CF}", "\u{17D1}",
    // nikahit, reahmuk, yuukaleapintu, muusikatoan, triisap
    "\u{17C6}", "\u{17C7}", "\u{17C8}", "\u{17C9}", "\u{17CA}",
    "ក", "ខ", "គ", "ឃ", "ង", "ច", "ឆ", "ជ", "ឈ", "ញ",
    "ដ", "ឋ", "ឌ", "ឍ", "ណ", "ត", "ថ", "ទ", "ធ", "ន",
    "ប", "ប៉", "ផ", "ព", "ភ", "ម", "យ", "រ", "ល", "វ", "ស",
    "ហ", "ហ្គ", "ហ្គ៊", "ហ្ន", "ហ្ម", "ហ្ល", "ហ្វ", "ហ្វ៊", "ហ្ស", "ហ្ស៊",
    "ឡ", "អ",
    "ឣ", "ឤ", "ឥ", "ឦ", "ឧ", "ឩ", "ឪ", "ឫ", "ឬ", "ឭ", "ឮ", "ឯ", "ឰ", "ឱ", "ឲ", "ឳ",
    "\u{17B6}", "\u{17B6}\u{17C6}",
    "\u{17B7}", "\u{17B7}\u{17C7}",
    "\u{17B8}", "\u{17B9}", "\u{17BA}",
    "\u{17BB}", "\u{17BB}\u{17C6}", "\u{17BB}\u{17C7}",
    "\u{17BC}", "\u{17BD}", "\u{17BE}", "\u{17BF}", "\u{17C0}",
    "\u{17C1}", "\u{17C1}\u{17C7}",
    "\u{17C2}", "\u{17C3}",
    "\u{17C4}", "\u{17C4}\u{17C7}",
    "\u{17C5}",
    // coeng
    "\u{17D2}",
];

fn ranks() -> &'static FxHashMap<&'static str, usize> {
    static RANKS: OnceLock<FxHashMap<&'static str, usize>> = OnceLock::new();
    RANKS.get_or_init(|| KEY_ORDER.iter().enumerate().map(|(i, k)| (*k, i)).collect())
}

/// Position of `key` in [`KEY_ORDER`].
pub fn rank(key: &str) -> Option<usize> {
    ranks().get(key).copied()
}

/// Total order over keys. Ranked keys come first; anything else follows in
/// code point order. Only equal strings compare equal.
pub fn compare(a: &str, b: &str) -> Ordering {
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

pub fn compare_chars(a: char, b: char) -> Ordering {
    let (mut ba, mut bb) = ([0u8; 4], [0u8; 4]);
    compare(a.encode_utf8(&mut ba), b.encode_utf8(&mut bb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{CONSONANTS, DIACRITICS, EXTRA_CONSONANTS, INDEPENDENT_VOWELS, VOWELS, VOWEL_COMBINATIONS};

    #[test]
    fn test_every_table_key_is_ranked() {
        let mut buf = [0u8; 4];
        for d in &CONSONANTS {
            assert!(rank(d.letter.encode_utf8(&mut buf)).is_some(), "{}", d.letter);
        }
        for d in &VOWELS {
            assert!(rank(d.letter.encode_utf8(&mut buf)).is_some(), "{}", d.letter);
        }
        for d in &INDEPENDENT_VOWELS {
            assert!(rank(d.letter.encode_utf8(&mut buf)).is_some(), "{}", d.letter);
        }
        for d in &DIACRITICS {
            assert!(rank(d.symbol.encode_utf8(&mut buf)).is_some(), "{}", d.symbol);
        }
        for d in &EXTRA_CONSONANTS {
            assert!(rank(d.letters).is_some(), "{}", d.letters);
        }
        for d in &VOWEL_COMBINATIONS {
            assert!(rank(d.letters).is_some(), "{}", d.letters);
        }
    }

    #[test]
    fn test_no_duplicates() {
        assert_eq!(ranks().len(), KEY_ORDER.len());
    }

    #[test]
    fn test_consonants_keep_alphabet_order() {
        assert!(CONSONANTS.windows(2).all(|w| compare_chars(w[0].letter, w[1].letter) == Ordering::Less));
    }

    #[test]
    fn test_unranked_keys_sort_last() {
        assert_eq!(compare("\u{17D2}", "a"), Ordering::Less);
        assert_eq!(compare("a", "b"), Ordering::Less);
        assert_eq!(compare("ក", "ក"), Ordering::Equal);
    }
}
