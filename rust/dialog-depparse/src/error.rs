//! Error types for the dependency parser.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DepParseError {
    #[error("sentence has {words} words but {tags} part-of-speech tags")]
    MisalignedSentence { words: usize, tags: usize },

    #[error("label '{label}' appears more than once in the label vocabulary")]
    DuplicateLabel { label: String },

    #[error("transition '{action}' is not legal in the current configuration")]
    IllegalTransition { action: String },

    #[error("scorer returned {found} scores but the action table has {expected} actions")]
    ScoreCountMismatch { expected: usize, found: usize },

    #[error("scorer returned a non-finite score ({score}) for '{action}'")]
    NonFiniteScore { action: String, score: f64 },

    #[error("scorer ranked '{action}' more than once")]
    DuplicateCandidate { action: String },

    #[error("invalid parser configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("parse worker failed: {0}")]
    Worker(String),
}

impl DepParseError {
    /// Whether the error stems from the scorer producing unusable output.
    pub fn is_malformed_scores(&self) -> bool {
        matches!(
            self,
            DepParseError::ScoreCountMismatch { .. }
                | DepParseError::NonFiniteScore { .. }
                | DepParseError::DuplicateCandidate { .. }
        )
    }
}
