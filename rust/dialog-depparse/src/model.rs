//! Adapter from a numeric model to an [`ActionScorer`].
//!
//! The model itself is opaque: it takes the six feature ids produced by the
//! [`FeatureExtractor`] and returns one logit per entry of the
//! [`ActionTable`]. [`ModelScorer`] glues the three together, turns logits
//! into probabilities and checks that the model held up its side of the
//! contract.

use crate::action_table::ActionTable;
use crate::configuration::Configuration;
use crate::error::DepParseError;
use crate::features::FeatureExtractor;
use crate::scorer::{ActionScorer, ScoredAction};
use crate::sentence::Sentence;

/// A trained scoring model.
pub trait Model {
    /// One logit per action table index.
    fn logits(&self, features: &[usize]) -> Vec<f64>;
}

impl<F> Model for F
where
    F: Fn(&[usize]) -> Vec<f64>,
{
    fn logits(&self, features: &[usize]) -> Vec<f64> {
        self(features)
    }
}

pub struct ModelScorer<M> {
    extractor: FeatureExtractor,
    model: M,
    actions: ActionTable,
}

impl<M: Model> ModelScorer<M> {
    pub fn new(extractor: FeatureExtractor, model: M, actions: ActionTable) -> Self {
        ModelScorer {
            extractor,
            model,
            actions,
        }
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }
}

impl<M: Model> ActionScorer for ModelScorer<M> {
    fn score_actions(
        &self,
        configuration: &Configuration,
        sentence: &Sentence,
    ) -> Result<Vec<ScoredAction>, DepParseError> {
        let features = self.extractor.input_representation(sentence, configuration);
        let logits = self.model.logits(&features);

        if logits.len() != self.actions.len() {
            return Err(DepParseError::ScoreCountMismatch {
                expected: self.actions.len(),
                found: logits.len(),
            });
        }
        if let Some((index, &score)) = logits.iter().enumerate().find(|(_, l)| !l.is_finite()) {
            return Err(DepParseError::NonFiniteScore {
                action: self
                    .actions
                    .action(index)
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                score,
            });
        }

        Ok(self
            .actions
            .iter()
            .cloned()
            .zip(softmax(&logits))
            .map(|(action, probability)| ScoredAction::new(action, probability))
            .collect())
    }
}

/// Numerically stable softmax over finite logits.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps = logits.iter().map(|l| (l - max).exp()).collect::<Vec<_>>();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
