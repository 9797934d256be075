//! Per-word and per-message lexicon scoring.

use crate::error::ScoreError;
use crate::lexicon::WeightMap;
use crate::tokenizer::Tokenizer;

/// Score a single token against the negative and positive weight maps.
///
/// A word absent from a map contributes 0 from that map; absence is a
/// normal case, not a failure. A word present in both maps contributes the
/// sum of both weights.
#[must_use]
pub fn score_word(word: &str, negative: &WeightMap, positive: &WeightMap) -> f32 {
    let neg = negative.get(word).copied().unwrap_or(0.0);
    let pos = positive.get(word).copied().unwrap_or(0.0);
    neg + pos
}

/// Score a whole message: tokenize, score every token, sum.
///
/// An empty token sequence scores 0.0.
///
/// # Errors
///
/// Returns [`ScoreError::Tokenize`] if the tokenizer fails.
pub fn score_message<T: Tokenizer + ?Sized>(
    tokenizer: &T,
    message: &str,
    negative: &WeightMap,
    positive: &WeightMap,
) -> Result<f32, ScoreError> {
    let tokens = tokenizer.tokenize(message)?;
    Ok(tokens
        .iter()
        .map(|word| score_word(word, negative, positive))
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WordTokenizer;

    fn weights(pairs: &[(&str, f32)]) -> WeightMap {
        pairs
            .iter()
            .map(|(word, weight)| ((*word).to_string(), *weight))
            .collect()
    }

    #[test]
    fn unknown_word_scores_zero() {
        let negative = weights(&[("bad", -1.0)]);
        let positive = weights(&[("good", 1.0)]);
        assert_eq!(score_word("neutral", &negative, &positive), 0.0);
    }

    #[test]
    fn word_in_one_map_scores_its_weight() {
        let negative = weights(&[("bad", -1.0)]);
        let positive = weights(&[("good", 1.0)]);
        assert_eq!(score_word("bad", &negative, &positive), -1.0);
        assert_eq!(score_word("good", &negative, &positive), 1.0);
    }

    #[test]
    fn word_in_both_maps_scores_additively() {
        let negative = weights(&[("bad", -2.0)]);
        let positive = weights(&[("bad", 0.5)]);
        let score = score_word("bad", &negative, &positive);
        assert!(
            (score + 1.5).abs() < f32::EPSILON,
            "expected -1.5, got {score}"
        );
    }

    #[test]
    fn message_score_is_sum_over_tokens() {
        let negative = weights(&[("terrible", -3.0)]);
        let positive = weights(&[("great", 2.0)]);
        let score = score_message(
            &WordTokenizer,
            "This movie is terrible, but the acting was great!",
            &negative,
            &positive,
        )
        .unwrap();
        assert!(
            (score + 1.0).abs() < f32::EPSILON,
            "expected -1.0, got {score}"
        );
    }

    #[test]
    fn repeated_words_accumulate() {
        let negative = WeightMap::new();
        let positive = weights(&[("good", 1.5)]);
        let score = score_message(&WordTokenizer, "good good good", &negative, &positive).unwrap();
        assert!(
            (score - 4.5).abs() < f32::EPSILON,
            "expected 4.5, got {score}"
        );
    }

    #[test]
    fn empty_message_scores_zero() {
        let negative = weights(&[("bad", -1.0)]);
        let positive = weights(&[("good", 1.0)]);
        let score = score_message(&WordTokenizer, "", &negative, &positive).unwrap();
        assert_eq!(score, 0.0);
    }
}
