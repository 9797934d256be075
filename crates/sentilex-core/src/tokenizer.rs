//! Tokenization capability consumed by the scorer.

use crate::error::ScoreError;

/// Splits raw text into normalized word tokens.
///
/// Contract: every token is lowercase, punctuation-only and whitespace-only
/// segments are excluded, and token order matches left-to-right appearance
/// in the source text. The token sequence must be deterministic for a fixed
/// input.
///
/// An implementation is bound once at build time and used read-only across
/// every call to the built scorer. An implementation that is not safe for
/// concurrent use forces callers to build one scorer per worker thread.
pub trait Tokenizer {
    /// Tokenize `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Tokenize`] if the input cannot be tokenized.
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ScoreError>;
}

/// Default tokenizer: split on whitespace, strip surrounding punctuation,
/// lowercase, drop segments with no alphanumeric content.
///
/// Total for any UTF-8 input. Interior punctuation is kept, so "rock-n-roll"
/// stays one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, ScoreError> {
        Ok(text
            .split_whitespace()
            .map(|s| {
                s.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_lowercase()
            })
            .filter(|s| !s.is_empty())
            .collect())
    }
}
