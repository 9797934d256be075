use thiserror::Error;

/// Boxed error accepted from caller-supplied preprocess transforms.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("preprocess failed: {0}")]
    Preprocess(#[source] BoxError),

    #[error("tokenization failed: {0}")]
    Tokenize(String),
}
