//! Parser settings.
//!
//! Settings are plain data with defaults for every field, so a partial JSON
//! document only needs to name what it overrides:
//!
//! ```
//! use dialog_depparse::ParserConfig;
//!
//! let config = ParserConfig::from_json(r#"{ "record_trace": true }"#).unwrap();
//! assert!(config.record_trace);
//! assert_eq!(config.concurrency, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::DepParseError;

/// Default number of sentences decoded concurrently in a streaming batch.
pub const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Upper bound on transitions per sentence. When unset the bound is
    /// twice the sentence length, which is exactly the length of a run that
    /// reaches a terminal configuration.
    pub max_transitions: Option<usize>,

    /// Record every transition into [`crate::Decoded::trace`].
    pub record_trace: bool,

    /// Sentences in flight at once in [`crate::batch::parse_stream`].
    pub concurrency: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_transitions: None,
            record_trace: false,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ParserConfig {
    pub fn from_json(json: &str) -> Result<Self, DepParseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_trace(mut self) -> Self {
        self.record_trace = true;
        self
    }

    pub fn with_max_transitions(mut self, max_transitions: usize) -> Self {
        self.max_transitions = Some(max_transitions);
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// The transition ceiling for a sentence of `token_count` non-root tokens.
    pub fn transition_limit(&self, token_count: usize) -> usize {
        self.max_transitions
            .unwrap_or_else(|| token_count.saturating_mul(2))
    }

    /// Concurrency clamped to at least one worker.
    pub fn workers(&self) -> usize {
        self.concurrency.max(1)
    }
}
