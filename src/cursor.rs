//! Cursor value objects addressing buckets of a [`KhmerIndex`].
//!
//! Cursors hold no reference into the index. They are compared structurally
//! and can be rebuilt from navigation state at any time.

use serde::Serialize;

use crate::classifier::CharGroup;
use crate::grouping::{
    AlphabetGroup, CharKey, ExtraConsonantKey, KhmerIndex, VowelCombinationKey, WordsCategory,
};
use crate::keys::{ClassifiedChar, SecondChar};

/// Second-level part of a [`Cursor`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "t", content = "v", rename_all = "snake_case")]
pub enum SubCursor {
    Consonant(char),
    IndependentVowel(char),
    Vowel(char),
    Diacritic(char),
    ExtraConsonant(ExtraConsonantKey),
    VowelCombination(VowelCombinationKey),
    NoSecondChar,
}

/// Addresses a first-level bucket only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum FirstLevelCursor {
    Words { category: WordsCategory, first_char: char },
    Numbers,
    Punctuation,
    LunarDates,
    OthersKnown,
}

/// Addresses a first-and-second-level bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "t", rename_all = "snake_case")]
pub enum Cursor {
    Words { category: WordsCategory, first_char: char, second_char: SubCursor },
    Numbers,
    Punctuation,
    LunarDates,
    OthersKnown,
}

impl SubCursor {
    pub fn from_second(second: SecondChar) -> Self {
        match second {
            SecondChar::Absent => SubCursor::NoSecondChar,
            SecondChar::Group(g) => match g {
                CharGroup::Consonant(c) => SubCursor::Consonant(c),
                CharGroup::IndependentVowel(c) => SubCursor::IndependentVowel(c),
                CharGroup::Vowel(c) => SubCursor::Vowel(c),
                CharGroup::Diacritic(c) => SubCursor::Diacritic(c),
                CharGroup::ExtraConsonant(s) => SubCursor::ExtraConsonant(ExtraConsonantKey::from_run(s)),
                CharGroup::VowelCombination(s) => {
                    SubCursor::VowelCombination(VowelCombinationKey::from_run(s))
                }
            },
        }
    }

    /// First non-empty sub-bucket of `group`, walking consonant, independent
    /// vowel, vowel, diacritic, extra consonant, vowel combination and finally
    /// the no-second-char list.
    pub fn default_for(group: &AlphabetGroup) -> Option<SubCursor> {
        if let Some(&CharKey(c)) = group.consonant.keys().next() {
            return Some(SubCursor::Consonant(c));
        }
        if let Some(&CharKey(c)) = group.independent_vowel.keys().next() {
            return Some(SubCursor::IndependentVowel(c));
        }
        if let Some(&CharKey(c)) = group.vowel.keys().next() {
            return Some(SubCursor::Vowel(c));
        }
        if let Some(&CharKey(c)) = group.diacritic.keys().next() {
            return Some(SubCursor::Diacritic(c));
        }
        if let Some(k) = group.extra_consonant.keys().next() {
            return Some(SubCursor::ExtraConsonant(k.clone()));
        }
        if let Some(k) = group.vowel_combination.keys().next() {
            return Some(SubCursor::VowelCombination(k.clone()));
        }
        if group.no_second_char.is_some() {
            return Some(SubCursor::NoSecondChar);
        }
        None
    }

    /// Words of `group` in the sub-bucket this cursor names.
    pub fn words_in<'a>(&self, group: &'a AlphabetGroup) -> Option<&'a [String]> {
        let words = match self {
            SubCursor::Consonant(c) => group.consonant.get(&CharKey(*c)),
            SubCursor::IndependentVowel(c) => group.independent_vowel.get(&CharKey(*c)),
            SubCursor::Vowel(c) => group.vowel.get(&CharKey(*c)),
            SubCursor::Diacritic(c) => group.diacritic.get(&CharKey(*c)),
            SubCursor::ExtraConsonant(k) => group.extra_consonant.get(k),
            SubCursor::VowelCombination(k) => group.vowel_combination.get(k),
            SubCursor::NoSecondChar => group.no_second_char.as_ref(),
        };
        words.map(Vec::as_slice)
    }
}

fn flat_lists(index: &KhmerIndex) -> [(FirstLevelCursor, &Option<Vec<String>>); 4] {
    [
        (FirstLevelCursor::Numbers, &index.numbers),
        (FirstLevelCursor::Punctuation, &index.punctuation),
        (FirstLevelCursor::LunarDates, &index.lunar_dates),
        (FirstLevelCursor::OthersKnown, &index.others_known),
    ]
}

impl FirstLevelCursor {
    /// First non-empty bucket in the order consonant, independent vowel,
    /// vowel, diacritic, numbers, punctuation, lunar dates, others.
    pub fn default_for(index: &KhmerIndex) -> Option<FirstLevelCursor> {
        for category in WordsCategory::ALL {
            if let Some(&CharKey(first_char)) = index.groups(category).keys().next() {
                return Some(FirstLevelCursor::Words { category, first_char });
            }
        }
        flat_lists(index)
            .into_iter()
            .find(|(_, words)| words.is_some())
            .map(|(cursor, _)| cursor)
    }

    /// The bucket for a word with these keys.
    pub fn of(keys: &ClassifiedChar) -> FirstLevelCursor {
        Cursor::of(keys).first_level()
    }

    /// The group or flat list this cursor addresses.
    pub fn bucket_in<'a>(&self, index: &'a KhmerIndex) -> Option<Bucket<'a>> {
        let list = match self {
            FirstLevelCursor::Words { category, first_char } => {
                return index.group(*category, *first_char).map(Bucket::Group);
            }
            FirstLevelCursor::Numbers => &index.numbers,
            FirstLevelCursor::Punctuation => &index.punctuation,
            FirstLevelCursor::LunarDates => &index.lunar_dates,
            FirstLevelCursor::OthersKnown => &index.others_known,
        };
        list.as_deref().map(Bucket::Flat)
    }
}

/// What a [`FirstLevelCursor`] resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket<'a> {
    Group(&'a AlphabetGroup),
    Flat(&'a [String]),
}

impl Cursor {
    /// Default bucket of a non-empty index; `None` only for an empty index.
    pub fn default_for(index: &KhmerIndex) -> Option<Cursor> {
        for category in WordsCategory::ALL {
            if let Some((&CharKey(first_char), group)) = index.groups(category).iter().next() {
                if let Some(second_char) = SubCursor::default_for(group) {
                    return Some(Cursor::Words { category, first_char, second_char });
                }
            }
        }
        if index.numbers.is_some() {
            return Some(Cursor::Numbers);
        }
        if index.punctuation.is_some() {
            return Some(Cursor::Punctuation);
        }
        if index.lunar_dates.is_some() {
            return Some(Cursor::LunarDates);
        }
        if index.others_known.is_some() {
            return Some(Cursor::OthersKnown);
        }
        None
    }

    /// The bucket a word with these keys is stored in.
    pub fn of(keys: &ClassifiedChar) -> Cursor {
        match keys {
            ClassifiedChar::Word { first_char, second_char } => {
                let (category, first_char) = WordsCategory::split(*first_char);
                Cursor::Words {
                    category,
                    first_char,
                    second_char: SubCursor::from_second(*second_char),
                }
            }
            ClassifiedChar::Number { .. } => Cursor::Numbers,
            ClassifiedChar::Punctuation { .. } => Cursor::Punctuation,
            ClassifiedChar::LunarDate { .. } => Cursor::LunarDates,
            ClassifiedChar::OtherKnown { .. } => Cursor::OthersKnown,
        }
    }

    pub fn first_level(&self) -> FirstLevelCursor {
        match self {
            Cursor::Words { category, first_char, .. } => {
                FirstLevelCursor::Words { category: *category, first_char: *first_char }
            }
            Cursor::Numbers => FirstLevelCursor::Numbers,
            Cursor::Punctuation => FirstLevelCursor::Punctuation,
            Cursor::LunarDates => FirstLevelCursor::LunarDates,
            Cursor::OthersKnown => FirstLevelCursor::OthersKnown,
        }
    }

    /// Word list addressed by this cursor, if the bucket exists.
    pub fn words_in<'a>(&self, index: &'a KhmerIndex) -> Option<&'a [String]> {
        let list = match self {
            Cursor::Words { category, first_char, second_char } => {
                let group = index.group(*category, *first_char)?;
                return second_char.words_in(group);
            }
            Cursor::Numbers => &index.numbers,
            Cursor::Punctuation => &index.punctuation,
            Cursor::LunarDates => &index.lunar_dates,
            Cursor::OthersKnown => &index.others_known,
        };
        list.as_deref()
    }
}
