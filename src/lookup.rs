//! Table definitions behind cursors and tokens, for display.

use serde::Serialize;

use crate::cursor::{Cursor, FirstLevelCursor, SubCursor};
use crate::grouping::WordsCategory;
use crate::series::EnrichedToken;
use crate::tables::{
    self, ConsonantDef, DiacriticDef, ExtraConsonantDef, IndependentVowelDef, Series,
    VowelCombinationDef, VowelDef,
};
use crate::tokenizer::TokenKind;

pub const LABEL_NUMBERS: &str = "Numbers (លេខ)";
pub const LABEL_PUNCTUATION: &str = "Punctuation (សញ្ញា)";
pub const LABEL_LUNAR_DATES: &str = "Lunar Dates";
pub const LABEL_OTHERS: &str = "Others";
pub const LABEL_NO_SECOND_CHAR: &str = "No Subscript (∅)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "def", rename_all = "snake_case")]
pub enum CharDefinition {
    Consonant(&'static ConsonantDef),
    ExtraConsonant(&'static ExtraConsonantDef),
    Vowel(&'static VowelDef),
    VowelCombination(&'static VowelCombinationDef),
    IndependentVowel(&'static IndependentVowelDef),
    Diacritic(&'static DiacriticDef),
    SpecialGroup(&'static str),
    Unknown(String),
}

fn single(category: WordsCategory, c: char) -> CharDefinition {
    let def = match category {
        WordsCategory::Consonant => tables::find_consonant(c).map(CharDefinition::Consonant),
        WordsCategory::IndependentVowel => {
            tables::find_independent_vowel(c).map(CharDefinition::IndependentVowel)
        }
        WordsCategory::Vowel => tables::find_vowel(c).map(CharDefinition::Vowel),
        WordsCategory::Diacritic => tables::find_diacritic(c).map(CharDefinition::Diacritic),
    };
    def.unwrap_or_else(|| CharDefinition::Unknown(c.to_string()))
}

/// Definition of the first character a group is keyed by.
pub fn definition_for_first_level(cursor: &FirstLevelCursor) -> CharDefinition {
    match *cursor {
        FirstLevelCursor::Words { category, first_char } => single(category, first_char),
        FirstLevelCursor::Numbers => CharDefinition::SpecialGroup(LABEL_NUMBERS),
        FirstLevelCursor::Punctuation => CharDefinition::SpecialGroup(LABEL_PUNCTUATION),
        FirstLevelCursor::LunarDates => CharDefinition::SpecialGroup(LABEL_LUNAR_DATES),
        FirstLevelCursor::OthersKnown => CharDefinition::SpecialGroup(LABEL_OTHERS),
    }
}

/// Definition of the second character a sub-bucket is keyed by. Flat
/// categories have no second level and resolve like their first level.
pub fn definition_for_cursor(cursor: &Cursor) -> CharDefinition {
    let sub = match cursor {
        Cursor::Words { second_char, .. } => second_char,
        _ => return definition_for_first_level(&cursor.first_level()),
    };
    match sub {
        SubCursor::NoSecondChar => CharDefinition::SpecialGroup(LABEL_NO_SECOND_CHAR),
        SubCursor::Consonant(c) => single(WordsCategory::Consonant, *c),
        SubCursor::IndependentVowel(c) => single(WordsCategory::IndependentVowel, *c),
        SubCursor::Vowel(c) => single(WordsCategory::Vowel, *c),
        SubCursor::Diacritic(c) => single(WordsCategory::Diacritic, *c),
        SubCursor::ExtraConsonant(k) => tables::find_extra_consonant(k.as_str())
            .map(CharDefinition::ExtraConsonant)
            .unwrap_or_else(|| CharDefinition::Unknown(k.as_str().to_string())),
        SubCursor::VowelCombination(k) => tables::find_vowel_combination(k.as_str())
            .map(CharDefinition::VowelCombination)
            .unwrap_or_else(|| CharDefinition::Unknown(k.as_str().to_string())),
    }
}

/// How one token is pronounced in its series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub value: String,
    pub kind: TokenKind,
    pub series: Series,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipa: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

fn by_series(series: Series, a: &'static str, o: &'static str) -> Option<&'static str> {
    match series {
        Series::A => Some(a),
        Series::O => Some(o),
    }
}

/// Looks up transliteration and IPA for a token. Dependent vowels read
/// differently per series; diacritics only carry a name.
pub fn reading(token: &EnrichedToken) -> Reading {
    let value = token.value();
    let mut chars = value.chars();
    let only = match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    };

    let mut r = Reading {
        value: value.to_string(),
        kind: token.kind(),
        series: token.series,
        trans: None,
        ipa: None,
        name: None,
    };

    match token.kind() {
        TokenKind::Consonant => {
            if let Some(d) = only.and_then(tables::find_consonant) {
                r.trans = Some(d.trans);
                r.ipa = Some(d.ipa);
            }
        }
        TokenKind::ExtraConsonant => {
            if let Some(d) = tables::find_extra_consonant(value) {
                r.trans = Some(d.trans);
                r.ipa = Some(d.ipa);
            }
        }
        TokenKind::IndependentVowel => {
            if let Some(d) = only.and_then(tables::find_independent_vowel) {
                r.trans = Some(d.trans);
                r.ipa = Some(d.ipa);
            }
        }
        TokenKind::Vowel => {
            if let Some(d) = only.and_then(tables::find_vowel) {
                r.trans = by_series(token.series, d.trans_a, d.trans_o);
                r.ipa = by_series(token.series, d.ipa_a, d.ipa_o);
            }
        }
        TokenKind::VowelCombination => {
            if let Some(d) = tables::find_vowel_combination(value) {
                r.trans = by_series(token.series, d.trans_a, d.trans_o);
                r.ipa = by_series(token.series, d.ipa_a, d.ipa_o);
            }
        }
        TokenKind::Diacritic => {
            r.name = only.and_then(tables::find_diacritic).map(|d| d.name);
        }
        TokenKind::Space | TokenKind::Unknown => {}
    }

    r
}

pub fn readings(tokens: &[EnrichedToken]) -> Vec<Reading> {
    tokens.iter().map(reading).collect()
}
