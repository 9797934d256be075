//! Composable lexicon-based sentiment scoring.
//!
//! Builds a reusable message scorer from an optional preprocessing step and
//! a tokenizer bound once at build time, then scores messages against
//! caller-supplied word-weight lexicons. The model state travels with each
//! call, so one built scorer serves any number of lexicons. Scoring never
//! fails from the caller's point of view: internal errors collapse to a
//! fixed sentinel score (see [`FAILURE_SCORE`]).

pub mod builder;
pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod tokenizer;

pub use builder::{FAILURE_SCORE, MessageScorer, Preprocess, ScorerBuilder};
pub use error::{BoxError, ScoreError};
pub use lexicon::{Lexicon, WeightMap};
pub use scorer::{score_message, score_word};
pub use tokenizer::{Tokenizer, WordTokenizer};
