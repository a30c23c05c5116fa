use serde::Serialize;
use std::cell::RefCell;

use crate::classifier::{match_at, GroupKind};
use crate::constants::is_space;
use crate::tables::{self, Series};

thread_local! {
    static TL_CODEPOINTS: RefCell<Vec<char>> = RefCell::new(Vec::with_capacity(1024));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Consonant,
    ExtraConsonant,
    Vowel,
    VowelCombination,
    IndependentVowel,
    Diacritic,
    Space,
    Unknown,
}

impl From<GroupKind> for TokenKind {
    fn from(kind: GroupKind) -> Self {
        match kind {
            GroupKind::Consonant => TokenKind::Consonant,
            GroupKind::ExtraConsonant => TokenKind::ExtraConsonant,
            GroupKind::Vowel => TokenKind::Vowel,
            GroupKind::VowelCombination => TokenKind::VowelCombination,
            GroupKind::IndependentVowel => TokenKind::IndependentVowel,
            GroupKind::Diacritic => TokenKind::Diacritic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Token { kind, value: value.into() }
    }

    /// Whether this token sets the series of what follows it.
    pub fn is_consonant_class(&self) -> bool {
        matches!(self.kind, TokenKind::Consonant | TokenKind::ExtraConsonant)
    }

    /// Intrinsic series of a consonant or extra-consonant token.
    pub fn own_series(&self) -> Option<Series> {
        match self.kind {
            TokenKind::Consonant => {
                let mut chars = self.value.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => tables::find_consonant(c).map(|d| d.series),
                    _ => None,
                }
            }
            TokenKind::ExtraConsonant => tables::find_extra_consonant(&self.value).map(|d| d.series),
            TokenKind::Vowel
            | TokenKind::VowelCombination
            | TokenKind::IndependentVowel
            | TokenKind::Diacritic
            | TokenKind::Space
            | TokenKind::Unknown => None,
        }
    }
}

/// Splits `text` into maximal clusters. Concatenating the values of the
/// result reproduces `text` exactly.
pub fn tokenize(text: &str) -> Vec<Token> {
    if text.is_empty() {
        return Vec::new();
    }

    TL_CODEPOINTS.with(|buf| {
        let mut cps = buf.borrow_mut();
        cps.clear();
        cps.extend(text.chars());
        tokenize_chars(&cps)
    })
}

/// Tokenizes an already split code point sequence.
pub fn tokenize_chars(cps: &[char]) -> Vec<Token> {
    let n = cps.len();
    let mut tokens = Vec::with_capacity(n);
    let mut i = 0;

    while i < n {
        let c = cps[i];

        // 1. Whitespace, one token per character
        if is_space(c) {
            tokens.push(Token::new(TokenKind::Space, c));
            i += 1;
            continue;
        }

        // 2. Longest classifier match
        if let Some(m) = match_at(cps, i) {
            let value: String = cps[i..i + m.len].iter().collect();
            tokens.push(Token::new(m.group.kind().into(), value));
            i += m.len;
            continue;
        }

        // 3. Fallback, always advances
        tokens.push(Token::new(TokenKind::Unknown, c));
        i += 1;
    }

    tokens
}

/// Concatenates token values back into text.
pub fn detokenize<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens.into_iter().map(|t| t.value.as_str()).collect()
}
