//! Word-weight lexicon types.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Mapping from normalized lowercase word to sentiment weight.
pub type WeightMap = HashMap<String, f32>;

/// A sentiment model: one weight map for negative vocabulary, one for
/// positive.
///
/// The two maps are not assumed disjoint. A word present in both contributes
/// the sum of its weights when scored. The scorer never mutates a lexicon;
/// callers own it and pass it by reference per scoring call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    /// Negative vocabulary. Weights are conventionally negative numbers.
    #[serde(default)]
    pub negative: WeightMap,
    /// Positive vocabulary. Weights are conventionally positive numbers.
    #[serde(default)]
    pub positive: WeightMap,
}

static EMPTY: LazyLock<Lexicon> = LazyLock::new(Lexicon::default);

impl Lexicon {
    #[must_use]
    pub fn new(negative: WeightMap, positive: WeightMap) -> Self {
        Self { negative, positive }
    }

    /// Shared empty lexicon used when a caller scores without model state.
    ///
    /// Constructed once for the process. Every lookup misses, so every
    /// message scores 0.0 against it.
    #[must_use]
    pub fn empty() -> &'static Self {
        &EMPTY
    }
}
