//! First/second significant character extraction for one word.

use serde::Serialize;

use crate::classifier::{detect_one_char, detect_using_starts_with, CharGroup, OneCharGroup};
use crate::constants::{is_coeng, is_khmer_char};
use crate::error::{ClassifyError, Result};
use crate::tables;

/// The grapheme following the first one, or an explicit marker that the word
/// has nothing after its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "t", content = "v", rename_all = "snake_case")]
pub enum SecondChar {
    Group(CharGroup),
    Absent,
}

impl SecondChar {
    pub fn group(&self) -> Option<CharGroup> {
        match *self {
            SecondChar::Group(g) => Some(g),
            SecondChar::Absent => None,
        }
    }
}

/// Bucketing keys of one word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifiedChar {
    Word { first_char: OneCharGroup, second_char: SecondChar },
    Number { v: Vec<char> },
    Punctuation { v: Vec<char> },
    LunarDate { v: char },
    OtherKnown { v: &'static str },
}

/// Computes the keys of a non-empty, trimmed, Khmer-only word.
///
/// Characters outside the Khmer script are dropped before classification and
/// subscript joiners never count as a significant character.
pub fn extract_keys(word: &str) -> Result<ClassifiedChar> {
    if let Some(known) = tables::find_other_known(word) {
        return Ok(ClassifiedChar::OtherKnown { v: known });
    }

    if !word.chars().any(is_khmer_char) {
        return Err(ClassifyError::NoKhmerChars { word: word.to_string() });
    }

    let chars: Vec<char> = word
        .chars()
        .filter(|&c| is_khmer_char(c) && !is_coeng(c))
        .collect();

    let (&first, tail) = match chars.split_first() {
        Some(split) => split,
        None => return Err(ClassifyError::EmptyAfterCoeng { word: word.to_string() }),
    };

    if chars.iter().all(|&c| tables::is_khmer_number(c)) {
        return Ok(ClassifiedChar::Number { v: chars });
    }

    if chars.iter().all(|&c| tables::is_khmer_punctuation(c)) {
        return Ok(ClassifiedChar::Punctuation { v: chars });
    }

    if tables::is_lunar_date_symbol(first) {
        return Ok(ClassifiedChar::LunarDate { v: first });
    }

    let first_char = detect_one_char(first).ok_or_else(|| ClassifyError::InvalidFirstChar {
        word: word.to_string(),
        ch: first,
    })?;

    let second_char = if tail.is_empty() {
        SecondChar::Absent
    } else {
        let group = detect_using_starts_with(tail).ok_or_else(|| {
            ClassifyError::UnclassifiableRemainder {
                word: word.to_string(),
                rest: tail.iter().collect(),
            }
        })?;
        SecondChar::Group(group)
    };

    Ok(ClassifiedChar::Word { first_char, second_char })
}
