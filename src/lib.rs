//! # khmer-index
//!
//! Khmer grapheme classification and dictionary indexing.
//!
//! ## Pipeline
//!
//! 1. **Tokenize** - split text into consonants, subscript clusters, vowels
//!    and signs (`tokenize`, `tokenize_with_series`)
//! 2. **Extract keys** - find the first and second significant characters of
//!    a word (`extract_keys`)
//! 3. **Index** - bucket a word list into a deterministic two-level index
//!    (`build_index`) and navigate it with cursors
//!
//! ## Example Usage
//!
//! ```ignore
//! use khmer_index::{build_index, extract_keys, Cursor};
//!
//! let words = ["ក", "កា", "ខ្ញុំ"];
//! let pairs = words.iter().map(|w| Ok((*w, extract_keys(w)?)));
//! let index = build_index(pairs.collect::<Result<Vec<_>, khmer_index::ClassifyError>>()?);
//!
//! let cursor = Cursor::default_for(&index);
//! # Ok::<(), khmer_index::ClassifyError>(())
//! ```

pub mod classifier;
pub mod collation;
pub mod constants;
pub mod cursor;
pub mod dictionary;
pub mod error;
pub mod flatten;
pub mod grouping;
pub mod keys;
pub mod lookup;
pub mod series;
pub mod tables;
pub mod tokenizer;

pub use classifier::{detect_one_char, detect_using_equality, detect_using_starts_with, CharGroup, OneCharGroup};
pub use cursor::{Cursor, FirstLevelCursor, SubCursor};
pub use dictionary::WordList;
pub use error::{ClassifyError, Result};
pub use flatten::{flatten, FlatItem, FlatList};
pub use grouping::{build_index, AlphabetGroup, CharKey, KhmerIndex, WordsCategory};
pub use keys::{extract_keys, ClassifiedChar, SecondChar};
pub use series::{enrich_with_series, tokenize_with_series, EnrichedToken};
pub use tables::Series;
pub use tokenizer::{tokenize, Token, TokenKind};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
