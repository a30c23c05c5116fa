//! Linear rendering of a [`KhmerIndex`] for list views.
//!
//! Groups are emitted as a header row followed by their words. Every header
//! is sticky and addressable through a [`FirstLevelCursor`]; the first word
//! of every sub-bucket is addressable through a full [`Cursor`].

use fxhash::FxHashMap;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::cursor::{Cursor, FirstLevelCursor, SubCursor};
use crate::grouping::{AlphabetGroup, CharKey, KhmerIndex, WordsCategory};

pub const HEADER_NUMBERS: &str = "NUM";
pub const HEADER_PUNCTUATION: &str = "PUN";
pub const HEADER_LUNAR_DATES: &str = "LUN";
pub const HEADER_OTHERS: &str = "OTH";
pub const HEADER_CONTENT_MATCHES: &str = "Found in content";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlatItem {
    Header { label: String, index: usize },
    Word { word: String },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FlatList {
    pub items: Vec<FlatItem>,
    pub sticky_indexes: Vec<usize>,
    #[serde(skip)]
    pub l1_index: FxHashMap<FirstLevelCursor, usize>,
    #[serde(skip)]
    pub l2_index: FxHashMap<Cursor, usize>,
    #[serde(skip)]
    pub index_to_l1: BTreeMap<usize, FirstLevelCursor>,
    /// Position of the first word equal to the search query.
    pub exact_match_index: Option<usize>,
}

impl FlatList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row to scroll to for a first-level cursor.
    pub fn position_of_l1(&self, cursor: &FirstLevelCursor) -> Option<usize> {
        self.l1_index.get(cursor).copied()
    }

    /// Row of the first word addressed by a full cursor.
    pub fn position_of(&self, cursor: &Cursor) -> Option<usize> {
        self.l2_index.get(cursor).copied()
    }

    /// First-level cursor of the nearest header at or above `row`.
    pub fn l1_at(&self, row: usize) -> Option<&FirstLevelCursor> {
        self.index_to_l1.range(..=row).next_back().map(|(_, c)| c)
    }
}

struct Builder<'q> {
    out: FlatList,
    search: Option<&'q str>,
}

impl<'q> Builder<'q> {
    fn header(&mut self, label: String, cursor: Option<FirstLevelCursor>) {
        let index = self.out.items.len();
        self.out.items.push(FlatItem::Header { label, index });
        self.out.sticky_indexes.push(index);
        if let Some(cursor) = cursor {
            self.out.l1_index.insert(cursor.clone(), index);
            self.out.index_to_l1.insert(index, cursor);
        }
    }

    fn words(&mut self, words: &[String]) {
        for w in words {
            if self.out.exact_match_index.is_none() && self.search == Some(w.as_str()) {
                self.out.exact_match_index = Some(self.out.items.len());
            }
            self.out.items.push(FlatItem::Word { word: w.clone() });
        }
    }

    fn sub_bucket(&mut self, l1: &FirstLevelCursor, sub: SubCursor, words: &[String]) {
        if let FirstLevelCursor::Words { category, first_char } = *l1 {
            let cursor = Cursor::Words { category, first_char, second_char: sub };
            self.out.l2_index.insert(cursor, self.out.items.len());
        }
        self.words(words);
    }

    fn group(&mut self, category: WordsCategory, first_char: char, group: &AlphabetGroup) {
        let l1 = FirstLevelCursor::Words { category, first_char };
        self.header(first_char.to_string(), Some(l1.clone()));

        if let Some(words) = &group.no_second_char {
            self.sub_bucket(&l1, SubCursor::NoSecondChar, words);
        }
        for (&CharKey(c), words) in &group.consonant {
            self.sub_bucket(&l1, SubCursor::Consonant(c), words);
        }
        for (&CharKey(c), words) in &group.independent_vowel {
            self.sub_bucket(&l1, SubCursor::IndependentVowel(c), words);
        }
        for (&CharKey(c), words) in &group.vowel {
            self.sub_bucket(&l1, SubCursor::Vowel(c), words);
        }
        for (&CharKey(c), words) in &group.diacritic {
            self.sub_bucket(&l1, SubCursor::Diacritic(c), words);
        }
        for (k, words) in &group.extra_consonant {
            self.sub_bucket(&l1, SubCursor::ExtraConsonant(k.clone()), words);
        }
        for (k, words) in &group.vowel_combination {
            self.sub_bucket(&l1, SubCursor::VowelCombination(k.clone()), words);
        }
    }

    fn special(&mut self, label: &str, words: Option<&Vec<String>>, cursor: FirstLevelCursor) {
        let Some(words) = words else { return };
        self.header(label.to_string(), Some(cursor));
        self.words(words);
    }
}

/// Flattens `index` into header and word rows.
///
/// `search` sets [`FlatList::exact_match_index`]; `content_matches`, when
/// non-empty, are appended under a trailing header that has no cursor.
pub fn flatten(index: &KhmerIndex, search: Option<&str>, content_matches: &[String]) -> FlatList {
    let mut b = Builder { out: FlatList::default(), search };

    for category in WordsCategory::ALL {
        for (&CharKey(first_char), group) in index.groups(category) {
            b.group(category, first_char, group);
        }
    }

    b.special(HEADER_NUMBERS, index.numbers.as_ref(), FirstLevelCursor::Numbers);
    b.special(HEADER_PUNCTUATION, index.punctuation.as_ref(), FirstLevelCursor::Punctuation);
    b.special(HEADER_LUNAR_DATES, index.lunar_dates.as_ref(), FirstLevelCursor::LunarDates);
    b.special(HEADER_OTHERS, index.others_known.as_ref(), FirstLevelCursor::OthersKnown);

    if !content_matches.is_empty() {
        b.header(HEADER_CONTENT_MATCHES.to_string(), None);
        b.words(content_matches);
    }

    b.out
}
