use fxhash::FxHashSet;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::constants::{contains_khmer, ZERO_WIDTH_SPACE};
use crate::error::ClassifyError;
use crate::grouping::{build_index, KhmerIndex};
use crate::keys::{extract_keys, ClassifiedChar};

/// A deduplicated list of trimmed Khmer words, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub words: Vec<String>,
}

/// Outcome of classifying a whole word list.
#[derive(Debug, Default)]
pub struct Classified {
    pub accepted: Vec<(String, ClassifiedChar)>,
    pub rejected: Vec<Rejected>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Rejected {
    pub word: String,
    pub reason: String,
}

impl WordList {
    pub fn load(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        Ok(Self::from_lines(lines))
    }

    /// Normalises raw lines: zero-width spaces are stripped, lines trimmed,
    /// and empty, non-Khmer or repeated lines skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for line in lines {
            let cleaned: String = line.as_ref().chars().filter(|&c| c != ZERO_WIDTH_SPACE).collect();
            let word = cleaned.trim();
            if word.is_empty() {
                continue;
            }
            if !contains_khmer(word) {
                skipped += 1;
                continue;
            }
            if seen.insert(word.to_string()) {
                words.push(word.to_string());
            }
        }

        if skipped > 0 {
            debug!(skipped, "skipped lines without Khmer characters");
        }
        WordList { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Extracts keys for every word in parallel. Both halves of the result
    /// keep input order.
    pub fn classify(&self) -> Classified {
        let results: Vec<(&String, Result<ClassifiedChar, ClassifyError>)> = self
            .words
            .par_iter()
            .map(|w| (w, extract_keys(w)))
            .collect();

        let mut out = Classified::default();
        for (word, result) in results {
            match result {
                Ok(keys) => out.accepted.push((word.clone(), keys)),
                Err(e) => {
                    debug!(%word, error = %e, "word rejected");
                    out.rejected.push(Rejected { word: word.clone(), reason: e.to_string() });
                }
            }
        }

        if out.rejected.is_empty() {
            info!(accepted = out.accepted.len(), "classified word list");
        } else {
            warn!(
                accepted = out.accepted.len(),
                rejected = out.rejected.len(),
                "some words could not be classified"
            );
        }
        out
    }

    /// Classifies and indexes the list, returning the rejected words too.
    pub fn build_index(&self) -> (KhmerIndex, Vec<Rejected>) {
        let Classified { accepted, rejected } = self.classify();
        (build_index(accepted), rejected)
    }
}
