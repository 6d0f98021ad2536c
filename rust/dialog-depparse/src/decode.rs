//! The greedy decoding policy.
//!
//! ```text
//! loop:
//!   terminal?            → halt (Terminal)
//!   transition ceiling?  → halt (TransitionLimit)
//!   rank scorer output   (stable, descending)
//!   first legal action?  → apply it
//!   none legal           → halt (Stuck)
//! ```
//!
//! One scorer query per transition, no backtracking. Each transition is
//! reported as a `tracing` event at TRACE level and, when the
//! configuration asks for it, recorded as a [`TraceStep`].

use crate::config::ParserConfig;
use crate::configuration::{Configuration, DependencyEdge};
use crate::error::DepParseError;
use crate::scorer::{ActionScorer, rank};
use crate::sentence::{Sentence, TokenIndex};
use crate::transition::Action;

/// Why decoding stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// Buffer empty, only ROOT on the stack.
    Terminal,
    /// No ranked candidate was legal in a non-terminal configuration.
    Stuck,
    /// The per-sentence transition ceiling was reached.
    TransitionLimit,
}

/// One applied transition and the configuration it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub step: usize,
    pub action: Action,
    pub score: f64,
    pub arc: Option<DependencyEdge>,
    pub stack: Vec<TokenIndex>,
    pub buffer: Vec<TokenIndex>,
}

/// The outcome of decoding one sentence.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub configuration: Configuration,
    pub transitions: Vec<Action>,
    pub halt: Halt,
    pub trace: Option<Vec<TraceStep>>,
}

impl Decoded {
    pub fn shifts(&self) -> usize {
        self.transitions.iter().filter(|a| !a.is_arc()).count()
    }

    pub fn arc_actions(&self) -> usize {
        self.transitions.iter().filter(|a| a.is_arc()).count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: ParserConfig,
}

impl Decoder {
    pub fn new(config: ParserConfig) -> Self {
        Decoder { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Decode `sentence` greedily under `scorer`.
    ///
    /// Malformed scorer output is an error; getting stuck is not, and is
    /// reported through [`Decoded::halt`].
    pub fn decode<S>(&self, sentence: &Sentence, scorer: &S) -> Result<Decoded, DepParseError>
    where
        S: ActionScorer + ?Sized,
    {
        let mut configuration = Configuration::new(sentence.token_count());
        let limit = self.config.transition_limit(sentence.token_count());
        let mut transitions = Vec::with_capacity(limit.min(sentence.token_count() * 2));
        let mut trace = self.config.record_trace.then(Vec::new);

        let halt = loop {
            if configuration.is_terminal() {
                break Halt::Terminal;
            }
            if transitions.len() >= limit {
                tracing::debug!(limit, %configuration, "transition ceiling reached");
                break Halt::TransitionLimit;
            }

            let ranked = rank(scorer.score_actions(&configuration, sentence)?)?;
            let Some(chosen) = ranked
                .into_iter()
                .find(|candidate| candidate.action.is_legal(&configuration))
            else {
                tracing::debug!(%configuration, "no legal candidate action");
                break Halt::Stuck;
            };

            let arc = chosen.action.apply(&mut configuration)?;
            let step = transitions.len();
            tracing::trace!(
                step,
                action = %chosen.action,
                score = chosen.score,
                stack = ?configuration.stack(),
                buffer = ?configuration.buffer(),
                "transition"
            );

            if let Some(trace) = trace.as_mut() {
                trace.push(TraceStep {
                    step,
                    action: chosen.action.clone(),
                    score: chosen.score,
                    arc,
                    stack: configuration.stack().to_vec(),
                    buffer: configuration.buffer().iter().copied().collect(),
                });
            }
            transitions.push(chosen.action);
        };

        Ok(Decoded {
            configuration,
            transitions,
            halt,
            trace,
        })
    }
}
