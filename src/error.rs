use thiserror::Error;

/// Malformed-input conditions raised while classifying a single word.
///
/// These indicate a data-integrity problem with the word itself; callers
/// processing a batch are expected to report and skip the word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("no Khmer characters found in: {word}")]
    NoKhmerChars { word: String },

    #[error("empty word after filtering coengs: {word}")]
    EmptyAfterCoeng { word: String },

    #[error("invalid first Khmer char {ch:?} in: {word}")]
    InvalidFirstChar { word: String, ch: char },

    #[error("unknown start of sequence {rest:?} in: {word}")]
    UnclassifiableRemainder { word: String, rest: String },

    #[error("unknown Khmer sequence: {0:?}")]
    UnknownSequence(String),
}

pub type Result<T> = std::result::Result<T, ClassifyError>;
