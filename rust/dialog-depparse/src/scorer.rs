//! Scoring and ranking of candidate actions.
//!
//! An [`ActionScorer`] looks at the current configuration and the static
//! sentence and assigns a score to every action of its vocabulary. It knows
//! nothing about legality; the decoder ranks whatever it returns and walks
//! the ranking until it finds a legal action.
//!
//! Ranking is a stable sort by descending score, so equal scores keep the
//! order the scorer listed them in — the vocabulary's enumeration order.

use std::collections::HashSet;
use std::sync::Arc;

use crate::configuration::Configuration;
use crate::error::DepParseError;
use crate::sentence::Sentence;
use crate::transition::Action;

/// An action paired with the score a scorer assigned to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAction {
    pub action: Action,
    pub score: f64,
}

impl ScoredAction {
    pub fn new(action: Action, score: f64) -> Self {
        ScoredAction { action, score }
    }
}

/// Scores the action vocabulary for a configuration.
///
/// Implementations must be deterministic: the same configuration, sentence
/// and model always produce the same scores, in the same order.
pub trait ActionScorer {
    fn score_actions(
        &self,
        configuration: &Configuration,
        sentence: &Sentence,
    ) -> Result<Vec<ScoredAction>, DepParseError>;
}

impl<S: ActionScorer + ?Sized> ActionScorer for &S {
    fn score_actions(
        &self,
        configuration: &Configuration,
        sentence: &Sentence,
    ) -> Result<Vec<ScoredAction>, DepParseError> {
        (**self).score_actions(configuration, sentence)
    }
}

impl<S: ActionScorer + ?Sized> ActionScorer for Arc<S> {
    fn score_actions(
        &self,
        configuration: &Configuration,
        sentence: &Sentence,
    ) -> Result<Vec<ScoredAction>, DepParseError> {
        (**self).score_actions(configuration, sentence)
    }
}

/// Validate scorer output and order it best first.
///
/// Non-finite scores and actions listed twice are malformed output and are
/// reported rather than papered over.
pub fn rank(mut candidates: Vec<ScoredAction>) -> Result<Vec<ScoredAction>, DepParseError> {
    {
        let mut seen = HashSet::with_capacity(candidates.len());
        for candidate in &candidates {
            if !candidate.score.is_finite() {
                return Err(DepParseError::NonFiniteScore {
                    action: candidate.action.to_string(),
                    score: candidate.score,
                });
            }
            if !seen.insert(&candidate.action) {
                return Err(DepParseError::DuplicateCandidate {
                    action: candidate.action.to_string(),
                });
            }
        }
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(candidates)
}
