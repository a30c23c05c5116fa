//! Character-cluster classifier.
//!
//! Maps a Khmer code point, or a short run of code points, to one of the fixed
//! grapheme categories. Three entry points exist because callers need three
//! different matching contracts:
//!
//! * [`detect_one_char`] classifies exactly one code point.
//! * [`detect_using_equality`] classifies a whole run, which must equal a
//!   table entry exactly (used to reverse a hashed key).
//! * [`detect_using_starts_with`] classifies the longest table entry that
//!   prefixes a run (used for the second key of a word).
//!
//! [`match_at`] is the tokenizer's variant: longest match at a position, ties
//! resolved by table priority.

use serde::Serialize;

use crate::error::{ClassifyError, Result};
use crate::tables::{
    self, Series, CONSONANTS, DIACRITICS, EXTRA_CONSONANTS, INDEPENDENT_VOWELS, VOWELS,
    VOWEL_COMBINATIONS,
};

/// Longest cluster in any multi-character table, in code points.
pub const MAX_CLUSTER_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Consonant,
    ExtraConsonant,
    Vowel,
    VowelCombination,
    IndependentVowel,
    Diacritic,
}

/// A category that is always exactly one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "v", rename_all = "snake_case")]
pub enum OneCharGroup {
    Consonant(char),
    Vowel(char),
    IndependentVowel(char),
    Diacritic(char),
}

impl OneCharGroup {
    pub fn kind(&self) -> GroupKind {
        match self {
            OneCharGroup::Consonant(_) => GroupKind::Consonant,
            OneCharGroup::Vowel(_) => GroupKind::Vowel,
            OneCharGroup::IndependentVowel(_) => GroupKind::IndependentVowel,
            OneCharGroup::Diacritic(_) => GroupKind::Diacritic,
        }
    }

    pub fn char(&self) -> char {
        match *self {
            OneCharGroup::Consonant(c)
            | OneCharGroup::Vowel(c)
            | OneCharGroup::IndependentVowel(c)
            | OneCharGroup::Diacritic(c) => c,
        }
    }
}

/// Any grapheme category. Multi-character variants borrow their run from the
/// static tables, so a value can only be produced by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "v", rename_all = "snake_case")]
pub enum CharGroup {
    Consonant(char),
    Vowel(char),
    IndependentVowel(char),
    Diacritic(char),
    ExtraConsonant(&'static str),
    VowelCombination(&'static str),
}

impl CharGroup {
    pub fn kind(&self) -> GroupKind {
        match self {
            CharGroup::Consonant(_) => GroupKind::Consonant,
            CharGroup::Vowel(_) => GroupKind::Vowel,
            CharGroup::IndependentVowel(_) => GroupKind::IndependentVowel,
            CharGroup::Diacritic(_) => GroupKind::Diacritic,
            CharGroup::ExtraConsonant(_) => GroupKind::ExtraConsonant,
            CharGroup::VowelCombination(_) => GroupKind::VowelCombination,
        }
    }

    /// The matched character run.
    pub fn to_text(&self) -> String {
        match *self {
            CharGroup::Consonant(c)
            | CharGroup::Vowel(c)
            | CharGroup::IndependentVowel(c)
            | CharGroup::Diacritic(c) => c.to_string(),
            CharGroup::ExtraConsonant(s) | CharGroup::VowelCombination(s) => s.to_string(),
        }
    }

    /// Length of the matched run in code points.
    pub fn char_len(&self) -> usize {
        match *self {
            CharGroup::Consonant(_)
            | CharGroup::Vowel(_)
            | CharGroup::IndependentVowel(_)
            | CharGroup::Diacritic(_) => 1,
            CharGroup::ExtraConsonant(s) | CharGroup::VowelCombination(s) => s.chars().count(),
        }
    }

    /// Intrinsic series; only consonant-class groups have one.
    pub fn series(&self) -> Option<Series> {
        match *self {
            CharGroup::Consonant(c) => tables::find_consonant(c).map(|d| d.series),
            CharGroup::ExtraConsonant(s) => tables::find_extra_consonant(s).map(|d| d.series),
            CharGroup::Vowel(_)
            | CharGroup::IndependentVowel(_)
            | CharGroup::Diacritic(_)
            | CharGroup::VowelCombination(_) => None,
        }
    }
}

impl From<OneCharGroup> for CharGroup {
    fn from(g: OneCharGroup) -> Self {
        match g {
            OneCharGroup::Consonant(c) => CharGroup::Consonant(c),
            OneCharGroup::Vowel(c) => CharGroup::Vowel(c),
            OneCharGroup::IndependentVowel(c) => CharGroup::IndependentVowel(c),
            OneCharGroup::Diacritic(c) => CharGroup::Diacritic(c),
        }
    }
}

/// Successful match of [`match_at`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterMatch {
    pub group: CharGroup,
    /// Number of code points consumed.
    pub len: usize,
}

#[inline]
fn run_eq(cs: &[char], letters: &str) -> bool {
    letters.chars().eq(cs.iter().copied())
}

/// Code-point length of `letters` if `cps[start..]` begins with it.
#[inline]
fn prefix_len_at(cps: &[char], start: usize, letters: &str) -> Option<usize> {
    let mut len = 0;
    for (offset, l) in letters.chars().enumerate() {
        match cps.get(start + offset) {
            Some(&c) if c == l => len += 1,
            _ => return None,
        }
    }
    Some(len)
}

// Order is independent vowel, consonant, vowel, diacritic. ុ is both a vowel
// and a diacritic and resolves to vowel.
pub fn detect_one_char(c: char) -> Option<OneCharGroup> {
    if tables::is_independent_vowel(c) {
        return Some(OneCharGroup::IndependentVowel(c));
    }
    if tables::is_consonant(c) {
        return Some(OneCharGroup::Consonant(c));
    }
    if tables::is_vowel(c) {
        return Some(OneCharGroup::Vowel(c));
    }
    if tables::is_diacritic(c) {
        return Some(OneCharGroup::Diacritic(c));
    }
    None
}

/// Exact match of a whole run against the multi-character tables.
pub fn detect_array_of_chars(cs: &[char]) -> Option<CharGroup> {
    if let Some(d) = EXTRA_CONSONANTS.iter().find(|d| run_eq(cs, d.letters)) {
        return Some(CharGroup::ExtraConsonant(d.letters));
    }
    if let Some(d) = VOWEL_COMBINATIONS.iter().find(|d| run_eq(cs, d.letters)) {
        return Some(CharGroup::VowelCombination(d.letters));
    }
    None
}

pub fn detect_using_equality(cs: &[char]) -> Result<CharGroup> {
    if let Some(g) = detect_array_of_chars(cs) {
        return Ok(g);
    }
    if let [c] = cs {
        if let Some(g) = detect_one_char(*c) {
            return Ok(g.into());
        }
    }
    Err(ClassifyError::UnknownSequence(cs.iter().collect()))
}

/// Multi-character entries in prefix-matching order: longest first, extra
/// consonants before vowel combinations of the same length.
pub fn multi_char_matchers() -> impl Iterator<Item = (CharGroup, &'static str)> {
    (1..=MAX_CLUSTER_LEN).rev().flat_map(|len| {
        let extras = EXTRA_CONSONANTS
            .iter()
            .filter(move |d| d.letters.chars().count() == len)
            .map(|d| (CharGroup::ExtraConsonant(d.letters), d.letters));
        let combos = VOWEL_COMBINATIONS
            .iter()
            .filter(move |d| d.letters.chars().count() == len)
            .map(|d| (CharGroup::VowelCombination(d.letters), d.letters));
        extras.chain(combos)
    })
}

/// Classifies the start of `cs`: the longest multi-character entry that is a
/// prefix, else the first code point on its own. `None` for an empty run or
/// an unclassifiable first code point.
pub fn detect_using_starts_with(cs: &[char]) -> Option<CharGroup> {
    let first = *cs.first()?;
    for (group, letters) in multi_char_matchers() {
        if prefix_len_at(cs, 0, letters).is_some() {
            return Some(group);
        }
    }
    detect_one_char(first).map(CharGroup::from)
}

/// Longest category match starting at `cps[start]`.
///
/// Candidates are visited in a fixed priority order (extra consonants,
/// independent vowels, vowel combinations, consonants, vowels, diacritics)
/// and only a strictly longer match replaces the current best, so the
/// earliest entry wins among equal lengths.
pub fn match_at(cps: &[char], start: usize) -> Option<ClusterMatch> {
    let c = *cps.get(start)?;
    let mut best: Option<ClusterMatch> = None;

    let mut offer = |group: CharGroup, len: usize| {
        if best.map_or(true, |b| len > b.len) {
            best = Some(ClusterMatch { group, len });
        }
    };

    for d in &EXTRA_CONSONANTS {
        if let Some(len) = prefix_len_at(cps, start, d.letters) {
            offer(CharGroup::ExtraConsonant(d.letters), len);
        }
    }
    if let Some(d) = INDEPENDENT_VOWELS.iter().find(|d| d.letter == c) {
        offer(CharGroup::IndependentVowel(d.letter), 1);
    }
    for d in &VOWEL_COMBINATIONS {
        if let Some(len) = prefix_len_at(cps, start, d.letters) {
            offer(CharGroup::VowelCombination(d.letters), len);
        }
    }
    if let Some(d) = CONSONANTS.iter().find(|d| d.letter == c) {
        offer(CharGroup::Consonant(d.letter), 1);
    }
    if let Some(d) = VOWELS.iter().find(|d| d.letter == c) {
        offer(CharGroup::Vowel(d.letter), 1);
    }
    if let Some(d) = DIACRITICS.iter().find(|d| d.symbol == c) {
        offer(CharGroup::Diacritic(d.symbol), 1);
    }

    best
}
