//! Two-level alphabetic index.
//!
//! Words are bucketed by their first significant character (the group) and
//! then by their second (the sub-bucket). Accumulation happens in unordered
//! hash maps; ordering is established only when the accumulators are
//! finalised into `BTreeMap`s with sorted word lists, so the result does not
//! depend on input order. Every key type orders by [`collation::compare`].

use fxhash::FxHashMap;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::Hash;

use crate::classifier::{detect_using_equality, CharGroup, OneCharGroup};
use crate::collation;
use crate::error::{ClassifyError, Result};
use crate::keys::{ClassifiedChar, SecondChar};

/// Single-character bucket key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CharKey(pub char);

/// Hashed form of an extra-consonant cluster: its run as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExtraConsonantKey(String);

/// Hashed form of a vowel combination: its run as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VowelCombinationKey(String);

impl From<char> for CharKey {
    fn from(c: char) -> Self {
        CharKey(c)
    }
}

impl Ord for CharKey {
    fn cmp(&self, other: &Self) -> Ordering {
        collation::compare_chars(self.0, other.0)
    }
}

impl PartialOrd for CharKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ExtraConsonantKey {
    fn cmp(&self, other: &Self) -> Ordering {
        collation::compare(&self.0, &other.0)
    }
}

impl PartialOrd for ExtraConsonantKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VowelCombinationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        collation::compare(&self.0, &other.0)
    }
}

impl PartialOrd for VowelCombinationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ExtraConsonantKey {
    pub fn from_run(letters: &str) -> Self {
        ExtraConsonantKey(letters.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-classifies the run; fails unless it is an extra consonant.
    pub fn unhash(&self) -> Result<CharGroup> {
        let chars: Vec<char> = self.0.chars().collect();
        match detect_using_equality(&chars)? {
            g @ CharGroup::ExtraConsonant(_) => Ok(g),
            _ => Err(ClassifyError::UnknownSequence(self.0.clone())),
        }
    }
}

impl VowelCombinationKey {
    pub fn from_run(letters: &str) -> Self {
        VowelCombinationKey(letters.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Re-classifies the run; fails unless it is a vowel combination.
    pub fn unhash(&self) -> Result<CharGroup> {
        let chars: Vec<char> = self.0.chars().collect();
        match detect_using_equality(&chars)? {
            g @ CharGroup::VowelCombination(_) => Ok(g),
            _ => Err(ClassifyError::UnknownSequence(self.0.clone())),
        }
    }
}

/// First-level category of alphabetic words, in navigation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WordsCategory {
    Consonant,
    IndependentVowel,
    Vowel,
    Diacritic,
}

impl WordsCategory {
    pub const ALL: [WordsCategory; 4] = [
        WordsCategory::Consonant,
        WordsCategory::IndependentVowel,
        WordsCategory::Vowel,
        WordsCategory::Diacritic,
    ];

    /// Category and character of a first key.
    pub fn split(g: OneCharGroup) -> (WordsCategory, char) {
        match g {
            OneCharGroup::Consonant(c) => (WordsCategory::Consonant, c),
            OneCharGroup::IndependentVowel(c) => (WordsCategory::IndependentVowel, c),
            OneCharGroup::Vowel(c) => (WordsCategory::Vowel, c),
            OneCharGroup::Diacritic(c) => (WordsCategory::Diacritic, c),
        }
    }
}

/// Words sharing one first character, split by their second character.
///
/// Every word lands in exactly one of the seven sub-buckets and no bucket is
/// ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlphabetGroup {
    pub consonant: BTreeMap<CharKey, Vec<String>>,
    pub vowel: BTreeMap<CharKey, Vec<String>>,
    pub independent_vowel: BTreeMap<CharKey, Vec<String>>,
    pub diacritic: BTreeMap<CharKey, Vec<String>>,
    pub extra_consonant: BTreeMap<ExtraConsonantKey, Vec<String>>,
    pub vowel_combination: BTreeMap<VowelCombinationKey, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_second_char: Option<Vec<String>>,
}

impl AlphabetGroup {
    pub fn word_count(&self) -> usize {
        fn sum<K>(m: &BTreeMap<K, Vec<String>>) -> usize {
            m.values().map(Vec::len).sum()
        }
        sum(&self.consonant)
            + sum(&self.vowel)
            + sum(&self.independent_vowel)
            + sum(&self.diacritic)
            + sum(&self.extra_consonant)
            + sum(&self.vowel_combination)
            + self.no_second_char.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }
}

/// The complete index over a word collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KhmerIndex {
    pub words_consonant: BTreeMap<CharKey, AlphabetGroup>,
    pub words_vowel: BTreeMap<CharKey, AlphabetGroup>,
    pub words_independent_vowel: BTreeMap<CharKey, AlphabetGroup>,
    pub words_diacritic: BTreeMap<CharKey, AlphabetGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punctuation: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunar_dates: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub others_known: Option<Vec<String>>,
}

impl KhmerIndex {
    pub fn groups(&self, category: WordsCategory) -> &BTreeMap<CharKey, AlphabetGroup> {
        match category {
            WordsCategory::Consonant => &self.words_consonant,
            WordsCategory::IndependentVowel => &self.words_independent_vowel,
            WordsCategory::Vowel => &self.words_vowel,
            WordsCategory::Diacritic => &self.words_diacritic,
        }
    }

    pub fn group(&self, category: WordsCategory, first_char: char) -> Option<&AlphabetGroup> {
        self.groups(category).get(&CharKey(first_char))
    }

    pub fn word_count(&self) -> usize {
        let grouped: usize = WordsCategory::ALL
            .iter()
            .flat_map(|&c| self.groups(c).values())
            .map(AlphabetGroup::word_count)
            .sum();
        let flat = [&self.numbers, &self.punctuation, &self.lunar_dates, &self.others_known]
            .iter()
            .map(|l| l.as_ref().map_or(0, Vec::len))
            .sum::<usize>();
        grouped + flat
    }

    pub fn is_empty(&self) -> bool {
        self.word_count() == 0
    }

    pub fn lengths(&self) -> IndexLengths {
        IndexLengths::of(self)
    }
}

#[derive(Default)]
struct Accumulator {
    consonant: FxHashMap<CharKey, Vec<String>>,
    vowel: FxHashMap<CharKey, Vec<String>>,
    independent_vowel: FxHashMap<CharKey, Vec<String>>,
    diacritic: FxHashMap<CharKey, Vec<String>>,
    extra_consonant: FxHashMap<ExtraConsonantKey, Vec<String>>,
    vowel_combination: FxHashMap<VowelCombinationKey, Vec<String>>,
    no_second: Vec<String>,
}

fn push_to<K: Hash + Eq>(map: &mut FxHashMap<K, Vec<String>>, key: K, word: String) {
    map.entry(key).or_default().push(word);
}

impl Accumulator {
    fn add(&mut self, second: SecondChar, word: String) {
        let group = match second {
            SecondChar::Absent => {
                self.no_second.push(word);
                return;
            }
            SecondChar::Group(g) => g,
        };
        match group {
            CharGroup::Consonant(c) => push_to(&mut self.consonant, CharKey(c), word),
            CharGroup::Vowel(c) => push_to(&mut self.vowel, CharKey(c), word),
            CharGroup::IndependentVowel(c) => push_to(&mut self.independent_vowel, CharKey(c), word),
            CharGroup::Diacritic(c) => push_to(&mut self.diacritic, CharKey(c), word),
            CharGroup::ExtraConsonant(s) => push_to(&mut self.extra_consonant, ExtraConsonantKey::from_run(s), word),
            CharGroup::VowelCombination(s) => {
                push_to(&mut self.vowel_combination, VowelCombinationKey::from_run(s), word)
            }
        }
    }

    fn finalize(self) -> AlphabetGroup {
        AlphabetGroup {
            consonant: finalize_map(self.consonant),
            vowel: finalize_map(self.vowel),
            independent_vowel: finalize_map(self.independent_vowel),
            diacritic: finalize_map(self.diacritic),
            extra_consonant: finalize_map(self.extra_consonant),
            vowel_combination: finalize_map(self.vowel_combination),
            no_second_char: finalize_list(self.no_second),
        }
    }
}

fn finalize_list(mut words: Vec<String>) -> Option<Vec<String>> {
    if words.is_empty() {
        return None;
    }
    words.sort_unstable();
    Some(words)
}

fn finalize_map<K: Ord>(map: FxHashMap<K, Vec<String>>) -> BTreeMap<K, Vec<String>> {
    map.into_iter()
        .filter_map(|(k, words)| finalize_list(words).map(|w| (k, w)))
        .collect()
}

fn finalize_groups(map: FxHashMap<CharKey, Accumulator>) -> BTreeMap<CharKey, AlphabetGroup> {
    map.into_iter().map(|(k, acc)| (k, acc.finalize())).collect()
}

/// Builds the index from `(word, keys)` pairs in a single pass.
pub fn build_index<I, W>(data: I) -> KhmerIndex
where
    I: IntoIterator<Item = (W, ClassifiedChar)>,
    W: Into<String>,
{
    let mut acc_consonant: FxHashMap<CharKey, Accumulator> = FxHashMap::default();
    let mut acc_vowel: FxHashMap<CharKey, Accumulator> = FxHashMap::default();
    let mut acc_independent: FxHashMap<CharKey, Accumulator> = FxHashMap::default();
    let mut acc_diacritic: FxHashMap<CharKey, Accumulator> = FxHashMap::default();

    let mut numbers = Vec::new();
    let mut punctuation = Vec::new();
    let mut lunar_dates = Vec::new();
    let mut others_known = Vec::new();

    for (word, keys) in data {
        let word = word.into();
        match keys {
            ClassifiedChar::Number { .. } => numbers.push(word),
            ClassifiedChar::Punctuation { .. } => punctuation.push(word),
            ClassifiedChar::LunarDate { .. } => lunar_dates.push(word),
            ClassifiedChar::OtherKnown { .. } => others_known.push(word),
            ClassifiedChar::Word { first_char, second_char } => {
                let acc = match first_char {
                    OneCharGroup::Consonant(c) => acc_consonant.entry(CharKey(c)).or_default(),
                    OneCharGroup::Vowel(c) => acc_vowel.entry(CharKey(c)).or_default(),
                    OneCharGroup::IndependentVowel(c) => acc_independent.entry(CharKey(c)).or_default(),
                    OneCharGroup::Diacritic(c) => acc_diacritic.entry(CharKey(c)).or_default(),
                };
                acc.add(second_char, word);
            }
        }
    }

    KhmerIndex {
        words_consonant: finalize_groups(acc_consonant),
        words_vowel: finalize_groups(acc_vowel),
        words_independent_vowel: finalize_groups(acc_independent),
        words_diacritic: finalize_groups(acc_diacritic),
        numbers: finalize_list(numbers),
        punctuation: finalize_list(punctuation),
        lunar_dates: finalize_list(lunar_dates),
        others_known: finalize_list(others_known),
    }
}

/// Word counts per sub-bucket of one group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlphabetGroupLengths {
    pub consonant: BTreeMap<CharKey, usize>,
    pub vowel: BTreeMap<CharKey, usize>,
    pub independent_vowel: BTreeMap<CharKey, usize>,
    pub diacritic: BTreeMap<CharKey, usize>,
    pub extra_consonant: BTreeMap<ExtraConsonantKey, usize>,
    pub vowel_combination: BTreeMap<VowelCombinationKey, usize>,
    pub no_second_char: usize,
}

/// The index with every word list replaced by its length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexLengths {
    pub words_consonant: BTreeMap<CharKey, AlphabetGroupLengths>,
    pub words_vowel: BTreeMap<CharKey, AlphabetGroupLengths>,
    pub words_independent_vowel: BTreeMap<CharKey, AlphabetGroupLengths>,
    pub words_diacritic: BTreeMap<CharKey, AlphabetGroupLengths>,
    pub numbers: usize,
    pub punctuation: usize,
    pub lunar_dates: usize,
    pub others_known: usize,
    pub total: usize,
}

fn count_map<K: Ord + Clone>(m: &BTreeMap<K, Vec<String>>) -> BTreeMap<K, usize> {
    m.iter().map(|(k, v)| (k.clone(), v.len())).collect()
}

impl AlphabetGroupLengths {
    fn of(g: &AlphabetGroup) -> Self {
        AlphabetGroupLengths {
            consonant: count_map(&g.consonant),
            vowel: count_map(&g.vowel),
            independent_vowel: count_map(&g.independent_vowel),
            diacritic: count_map(&g.diacritic),
            extra_consonant: count_map(&g.extra_consonant),
            vowel_combination: count_map(&g.vowel_combination),
            no_second_char: g.no_second_char.as_ref().map_or(0, Vec::len),
        }
    }
}

impl IndexLengths {
    fn of(index: &KhmerIndex) -> Self {
        let groups = |m: &BTreeMap<CharKey, AlphabetGroup>| {
            m.iter()
                .map(|(k, g)| (*k, AlphabetGroupLengths::of(g)))
                .collect::<BTreeMap<_, _>>()
        };
        let len = |l: &Option<Vec<String>>| l.as_ref().map_or(0, Vec::len);

        IndexLengths {
            words_consonant: groups(&index.words_consonant),
            words_vowel: groups(&index.words_vowel),
            words_independent_vowel: groups(&index.words_independent_vowel),
            words_diacritic: groups(&index.words_diacritic),
            numbers: len(&index.numbers),
            punctuation: len(&index.punctuation),
            lunar_dates: len(&index.lunar_dates),
            others_known: len(&index.others_known),
            total: index.word_count(),
        }
    }
}
