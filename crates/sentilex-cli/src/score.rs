//! Command handlers for `score` and `tokens`.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use sentilex_core::{BoxError, Lexicon, ScorerBuilder, Tokenizer, WordTokenizer};

use crate::config::load_cli_config;

/// Score a message and print the result.
///
/// The lexicon comes from `--lexicon`, then `SENTILEX_LEXICON_PATH`. With
/// neither set the scorer runs against the empty lexicon and every message
/// scores 0.0. Scoring itself never fails; internal failures surface as the
/// sentinel score and an error log line.
///
/// # Errors
///
/// Returns an error if the message cannot be read or the lexicon file is
/// missing or malformed.
pub(crate) fn run_score(
    message: Option<String>,
    lexicon_path: Option<&Path>,
    strip_urls: bool,
) -> anyhow::Result<()> {
    let message = read_message(message)?;
    let lexicon = resolve_lexicon(lexicon_path)?;

    let builder =
        ScorerBuilder::new().on_error(|e| tracing::error!(error = %e, "scoring failed"));
    let scorer = if strip_urls {
        builder
            .preprocess(|msg| Ok::<_, BoxError>(strip_url_spans(msg)))
            .build()
    } else {
        builder.build()
    };

    let score = scorer.score(&message, lexicon.as_ref());
    println!("{score}");
    Ok(())
}

/// Print the default tokenization of a message, one token per line.
///
/// # Errors
///
/// Returns an error if the message cannot be read or tokenized.
pub(crate) fn run_tokens(message: Option<String>) -> anyhow::Result<()> {
    let message = read_message(message)?;
    let tokens = WordTokenizer
        .tokenize(&message)
        .context("tokenizing message")?;
    for token in tokens {
        println!("{token}");
    }
    Ok(())
}

/// Load the lexicon from the flag path, falling back to the env default.
/// `None` when neither is set.
fn resolve_lexicon(flag: Option<&Path>) -> anyhow::Result<Option<Lexicon>> {
    let path = match flag {
        Some(path) => Some(path.to_path_buf()),
        None => load_cli_config().lexicon_path,
    };
    let Some(path) = path else {
        return Ok(None);
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("reading lexicon file {}", path.display()))?;
    let lexicon: Lexicon = serde_json::from_str(&raw)
        .with_context(|| format!("parsing lexicon file {}", path.display()))?;
    Ok(Some(lexicon))
}

fn read_message(arg: Option<String>) -> anyhow::Result<String> {
    match arg {
        Some(message) => Ok(message),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading message from stdin")?;
            Ok(buf)
        }
    }
}

/// Drop whitespace-delimited segments that look like URLs.
fn strip_url_spans(message: &str) -> String {
    message
        .split_whitespace()
        .filter(|word| !word.starts_with("http://") && !word.starts_with("https://"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::strip_url_spans;

    #[test]
    fn strips_http_and_https_urls() {
        assert_eq!(
            strip_url_spans("great read https://example.com/post truly great"),
            "great read truly great"
        );
        assert_eq!(
            strip_url_spans("http://example.com only a link"),
            "only a link"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert_eq!(strip_url_spans("no links here"), "no links here");
    }
}
