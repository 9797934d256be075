//! Scorer construction and the failure-fallback policy.

use std::fmt;

use crate::error::{BoxError, ScoreError};
use crate::lexicon::Lexicon;
use crate::scorer::score_message;
use crate::tokenizer::{Tokenizer, WordTokenizer};

/// Sentinel returned by [`MessageScorer::score`] when scoring fails
/// internally.
///
/// Callers cannot distinguish it from a genuinely negative message; use
/// [`MessageScorer::try_score`] or an error hook where that matters.
pub const FAILURE_SCORE: f32 = -1.0;

/// Message transform applied before tokenization.
pub enum Preprocess {
    /// Pass the message through unchanged.
    Identity,
    /// Apply a caller-supplied transform. A failed transform collapses the
    /// whole scoring call to [`FAILURE_SCORE`].
    Transform(Box<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>),
}

impl Preprocess {
    fn apply(&self, message: &str) -> Result<String, ScoreError> {
        match self {
            Preprocess::Identity => Ok(message.to_string()),
            Preprocess::Transform(transform) => {
                transform(message).map_err(ScoreError::Preprocess)
            }
        }
    }
}

impl fmt::Debug for Preprocess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preprocess::Identity => f.write_str("Identity"),
            Preprocess::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

type ErrorHook = Box<dyn Fn(&ScoreError) + Send + Sync>;

/// Builds a [`MessageScorer`] from an optional preprocess step, an optional
/// error hook, and a tokenizer.
///
/// The tokenizer is bound exactly once here and reused by every call to the
/// built scorer, so an expensive tokenizer setup is paid outside the scoring
/// hot path.
pub struct ScorerBuilder<T = WordTokenizer> {
    tokenizer: T,
    preprocess: Preprocess,
    on_error: Option<ErrorHook>,
}

impl ScorerBuilder<WordTokenizer> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: WordTokenizer,
            preprocess: Preprocess::Identity,
            on_error: None,
        }
    }
}

impl Default for ScorerBuilder<WordTokenizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Tokenizer> ScorerBuilder<T> {
    /// Replace the tokenizer bound to the built scorer.
    #[must_use]
    pub fn tokenizer<U: Tokenizer>(self, tokenizer: U) -> ScorerBuilder<U> {
        ScorerBuilder {
            tokenizer,
            preprocess: self.preprocess,
            on_error: self.on_error,
        }
    }

    /// Apply `transform` to every message before tokenization.
    #[must_use]
    pub fn preprocess<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        self.preprocess = Preprocess::Transform(Box::new(transform));
        self
    }

    /// Invoke `hook` with any error swallowed by [`MessageScorer::score`]
    /// before the sentinel is returned.
    #[must_use]
    pub fn on_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ScoreError) + Send + Sync + 'static,
    {
        self.on_error = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn build(self) -> MessageScorer<T> {
        MessageScorer {
            tokenizer: self.tokenizer,
            preprocess: self.preprocess,
            on_error: self.on_error,
        }
    }
}

/// A reusable scoring function bound to one tokenizer and one preprocess
/// configuration.
///
/// Model state is supplied per call, so the same scorer serves any number of
/// lexicons without rebuilding the tokenizer. The scorer holds no mutable
/// state: identical `(message, lexicon)` inputs always produce identical
/// scores.
pub struct MessageScorer<T = WordTokenizer> {
    tokenizer: T,
    preprocess: Preprocess,
    on_error: Option<ErrorHook>,
}

impl<T: Tokenizer> MessageScorer<T> {
    /// Score `message` against `lexicon`, or against the shared empty
    /// lexicon when `None` is supplied (every message then scores 0.0).
    ///
    /// Never fails. Preprocessing and tokenization errors are logged, passed
    /// to the error hook if one was configured, and collapsed to
    /// [`FAILURE_SCORE`].
    #[must_use]
    pub fn score(&self, message: &str, lexicon: Option<&Lexicon>) -> f32 {
        match self.try_score(message, lexicon) {
            Ok(score) => score,
            Err(e) => {
                tracing::warn!(error = %e, "scoring failed, returning sentinel");
                if let Some(hook) = &self.on_error {
                    hook(&e);
                }
                FAILURE_SCORE
            }
        }
    }

    /// Score `message`, surfacing failures instead of the sentinel.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError::Preprocess`] if the configured transform fails,
    /// or [`ScoreError::Tokenize`] if the tokenizer fails.
    pub fn try_score(&self, message: &str, lexicon: Option<&Lexicon>) -> Result<f32, ScoreError> {
        let lexicon = lexicon.unwrap_or_else(|| Lexicon::empty());
        let message = self.preprocess.apply(message)?;
        score_message(
            &self.tokenizer,
            &message,
            &lexicon.negative,
            &lexicon.positive,
        )
    }
}
