//! # Dialog DepParse — greedy arc-standard dependency parsing
//!
//! Assigns a dependency tree to a sentence by running shift/reduce style
//! transitions over a stack-and-buffer configuration, asking a scorer at
//! every step which transition to take next.
//!
//! ## Core Ideas
//!
//! - **Configurations are plain data**: a stack, a buffer and the arcs built
//!   so far. One per sentence, never shared.
//! - **Legality lives in the transition system**: the scorer ranks every
//!   action it knows about; the decoder skips the ones that are not legal.
//! - **Decoding always terminates**: a terminal configuration, a stuck
//!   configuration or a transition ceiling ends every run.
//! - **Failure is local**: a stuck decode yields a partial structure, and
//!   malformed scorer output fails only the sentence it came from.
//!
//! ## Architecture
//!
//! ```text
//! Sentence → Configuration ⇄ Decoder ⇄ ActionScorer (features → model)
//!                              ↓
//!                         TreeBuilder → DependencyStructure
//! ```
//!
//! ## Example
//!
//! ```
//! use dialog_depparse::{
//!     Action, ActionScorer, Configuration, DepParseError, Parser, ScoredAction, Sentence,
//! };
//!
//! struct ShiftFirst;
//!
//! impl ActionScorer for ShiftFirst {
//!     fn score_actions(
//!         &self,
//!         _configuration: &Configuration,
//!         _sentence: &Sentence,
//!     ) -> Result<Vec<ScoredAction>, DepParseError> {
//!         Ok(vec![
//!             ScoredAction::new(Action::Shift, 0.9),
//!             ScoredAction::new(Action::right_arc("dep"), 0.1),
//!         ])
//!     }
//! }
//!
//! let sentence = Sentence::new(["Dogs", "bark"], ["NNS", "VBP"]).unwrap();
//! let structure = Parser::new(ShiftFirst).parse_sentence(&sentence).unwrap();
//!
//! assert!(structure.is_complete());
//! assert_eq!(structure.head_of(2).map(|edge| edge.head), Some(1));
//! assert_eq!(structure.head_of(1).map(|edge| edge.head), Some(0));
//! ```

pub mod action_table;
pub mod batch;
pub mod config;
pub mod configuration;
pub mod decode;
pub mod error;
pub mod features;
pub mod model;
pub mod parser;
pub mod scorer;
pub mod sentence;
pub mod transition;
pub mod tree;

pub use action_table::ActionTable;
pub use batch::{BatchSummary, ReportStatus, SentenceReport, parse_stream};
pub use config::ParserConfig;
pub use configuration::{Configuration, DependencyEdge};
pub use decode::{Decoded, Decoder, Halt, TraceStep};
pub use error::DepParseError;
pub use features::{FeatureExtractor, Vocabulary};
pub use model::{Model, ModelScorer};
pub use parser::{ParseOutput, Parser};
pub use scorer::{ActionScorer, ScoredAction};
pub use sentence::{ROOT, Sentence, TokenIndex};
pub use transition::{Action, Label, TransitionKind};
pub use tree::{DependencyStructure, ParseStatus, TreeBuilder, TreeDefect};
