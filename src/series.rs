use serde::Serialize;

use crate::tables::Series;
use crate::tokenizer::{tokenize, Token, TokenKind};

/// A token together with the series it is read in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EnrichedToken {
    #[serde(flatten)]
    pub token: Token,
    pub series: Series,
}

impl EnrichedToken {
    pub fn kind(&self) -> TokenKind {
        self.token.kind
    }

    pub fn value(&self) -> &str {
        &self.token.value
    }
}

/// Attaches a series to every token: consonant-class tokens carry their own
/// and every other token inherits the nearest consonant to its left, or `a`
/// when there is none.
pub fn enrich_with_series(tokens: &[Token]) -> Vec<EnrichedToken> {
    let mut current = Series::A;
    let mut enriched = Vec::with_capacity(tokens.len());

    for token in tokens {
        if token.is_consonant_class() {
            if let Some(series) = token.own_series() {
                current = series;
            }
        }
        enriched.push(EnrichedToken { token: token.clone(), series: current });
    }

    enriched
}

/// Tokenizes and enriches in one step.
pub fn tokenize_with_series(text: &str) -> Vec<EnrichedToken> {
    enrich_with_series(&tokenize(text))
}
