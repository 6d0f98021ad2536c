//! The parser — a scorer plus the settings that drive decoding.
//!
//! ```text
//! Sentence → Decoder (scorer queries, legality, transitions)
//!          → TreeBuilder (validation)
//!          → DependencyStructure (complete or partial)
//! ```

use crate::config::ParserConfig;
use crate::decode::{Decoded, Decoder};
use crate::error::DepParseError;
use crate::scorer::ActionScorer;
use crate::sentence::Sentence;
use crate::tree::{DependencyStructure, TreeBuilder};

/// A parsed sentence together with the decode that produced it.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub structure: DependencyStructure,
    pub decoded: Decoded,
}

pub struct Parser<S> {
    scorer: S,
    decoder: Decoder,
}

impl<S: ActionScorer> Parser<S> {
    pub fn new(scorer: S) -> Self {
        Self::with_config(scorer, ParserConfig::default())
    }

    pub fn with_config(scorer: S, config: ParserConfig) -> Self {
        Parser {
            scorer,
            decoder: Decoder::new(config),
        }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    pub fn config(&self) -> &ParserConfig {
        self.decoder.config()
    }

    /// Parse one sentence into a dependency structure.
    ///
    /// A decode that gets stuck still produces a structure, flagged partial.
    /// Only malformed scorer output is an error.
    pub fn parse_sentence(&self, sentence: &Sentence) -> Result<DependencyStructure, DepParseError> {
        Ok(self.parse_with_decode(sentence)?.structure)
    }

    /// Like [`Parser::parse_sentence`], but keeps the transition sequence
    /// (and the trace, if enabled).
    #[tracing::instrument(level = "debug", skip_all, fields(tokens = sentence.token_count()))]
    pub fn parse_with_decode(&self, sentence: &Sentence) -> Result<ParseOutput, DepParseError> {
        let decoded = self.decoder.decode(sentence, &self.scorer)?;
        let structure = TreeBuilder::build(
            sentence,
            decoded.configuration.arcs().to_vec(),
            decoded.halt,
        );
        Ok(ParseOutput { structure, decoded })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::decode::Halt;
    use crate::scorer::ScoredAction;
    use crate::sentence::ROOT;
    use crate::transition::Action;
    use crate::tree::{ParseStatus, TreeDefect};
    use pretty_assertions::assert_eq;

    /// Attaches each new word to the previous one, the first to ROOT.
    struct Chain;

    impl ActionScorer for Chain {
        fn score_actions(
            &self,
            configuration: &Configuration,
            _sentence: &Sentence,
        ) -> Result<Vec<ScoredAction>, DepParseError> {
            let shift = if configuration.buffer().is_empty() { 0.0 } else { 1.0 };
            Ok(vec![
                ScoredAction::new(Action::Shift, shift),
                ScoredAction::new(Action::right_arc("next"), 0.5),
            ])
        }
    }

    /// Arcs only; a shift is never offered.
    struct NoShift;

    impl ActionScorer for NoShift {
        fn score_actions(
            &self,
            _configuration: &Configuration,
            _sentence: &Sentence,
        ) -> Result<Vec<ScoredAction>, DepParseError> {
            Ok(vec![ScoredAction::new(Action::right_arc("x"), 1.0)])
        }
    }

    #[test]
    fn parses_a_chain() {
        let parser = Parser::new(Chain);
        let sentence = Sentence::new(["a", "b", "c"], ["X", "X", "X"]).unwrap();
        let structure = parser.parse_sentence(&sentence).unwrap();

        assert!(structure.is_complete());
        let heads = structure
            .edges()
            .iter()
            .map(|edge| (edge.head, edge.dependent))
            .collect::<Vec<_>>();
        assert_eq!(heads, vec![(ROOT, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn stuck_decode_is_partial_not_an_error() {
        let parser = Parser::new(NoShift);
        let sentence = Sentence::new(["a", "b"], ["X", "X"]).unwrap();
        let output = parser.parse_with_decode(&sentence).unwrap();

        assert_eq!(output.decoded.halt, Halt::Stuck);
        assert_eq!(
            output.structure.status(),
            ParseStatus::Partial {
                halt: Halt::Stuck,
                defect: TreeDefect::MissingHead(1),
            }
        );
        assert!(output.structure.edges().is_empty());
    }

    #[test]
    fn works_through_a_shared_reference() {
        let parser = Parser::new(&Chain);
        let sentence = Sentence::new(["a"], ["X"]).unwrap();
        assert!(parser.parse_sentence(&sentence).unwrap().is_complete());
    }
}
