//! Dependency structures — the output of a parse.
//!
//! The [`TreeBuilder`] takes the arcs a decode accumulated and checks that
//! they form a single tree rooted at ROOT. A structure that fails the check
//! (which only happens after a non-terminal halt) is still returned, with
//! every arc that was collected, but flagged as partial so callers can
//! report, skip or salvage it.

use std::fmt;

use crate::configuration::DependencyEdge;
use crate::decode::Halt;
use crate::sentence::{ROOT, Sentence, TokenIndex};

/// The first well-formedness violation found in an arc set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeDefect {
    /// An arc refers to a token outside the sentence.
    OutOfRange(TokenIndex),
    /// ROOT appears as a dependent.
    RootAsDependent,
    /// A token has no head.
    MissingHead(TokenIndex),
    /// A token has more than one head.
    MultipleHeads(TokenIndex),
    /// Following heads from this token never reaches ROOT.
    Cycle(TokenIndex),
    /// The arcs are well formed but decoding stopped short of a terminal
    /// configuration.
    Unfinished,
}

impl fmt::Display for TreeDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeDefect::OutOfRange(index) => write!(f, "token {} is out of range", index),
            TreeDefect::RootAsDependent => write!(f, "ROOT is attached as a dependent"),
            TreeDefect::MissingHead(index) => write!(f, "token {} has no head", index),
            TreeDefect::MultipleHeads(index) => write!(f, "token {} has several heads", index),
            TreeDefect::Cycle(index) => write!(f, "token {} is on a cycle", index),
            TreeDefect::Unfinished => write!(f, "decoding did not finish"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    Complete,
    Partial { halt: Halt, defect: TreeDefect },
}

/// Edges over a sentence, plus whether they form a complete tree.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyStructure {
    sentence: Sentence,
    edges: Vec<DependencyEdge>,
    status: ParseStatus,
}

impl DependencyStructure {
    /// Edges ordered by dependent.
    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    pub fn status(&self) -> ParseStatus {
        self.status
    }

    pub fn is_complete(&self) -> bool {
        self.status == ParseStatus::Complete
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn words(&self) -> &[String] {
        self.sentence.words()
    }

    pub fn tags(&self) -> &[String] {
        self.sentence.tags()
    }

    /// The edge whose dependent is `dependent`.
    pub fn head_of(&self, dependent: TokenIndex) -> Option<&DependencyEdge> {
        self.edges.iter().find(|edge| edge.dependent == dependent)
    }

    pub fn dependents_of(&self, head: TokenIndex) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.iter().filter(move |edge| edge.head == head)
    }

    /// No two edges cross when drawn above the sentence.
    pub fn is_projective(&self) -> bool {
        let span = |edge: &DependencyEdge| {
            (edge.head.min(edge.dependent), edge.head.max(edge.dependent))
        };
        self.edges.iter().all(|a| {
            let (a_lo, a_hi) = span(a);
            self.edges.iter().all(|b| {
                let (b_lo, b_hi) = span(b);
                !(a_lo < b_lo && b_lo < a_hi && a_hi < b_hi)
            })
        })
    }
}

impl fmt::Display for DependencyStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let word = |index| self.sentence.word(index).unwrap_or("?");
            write!(
                f,
                "{}({}-{}, {}-{})",
                edge.label,
                word(edge.head),
                edge.head,
                word(edge.dependent),
                edge.dependent
            )?;
        }
        Ok(())
    }
}

pub struct TreeBuilder;

impl TreeBuilder {
    pub fn build(sentence: &Sentence, arcs: Vec<DependencyEdge>, halt: Halt) -> DependencyStructure {
        let mut edges = arcs;
        edges.sort_by_key(|edge| (edge.dependent, edge.head));

        let status = match (Self::validate(sentence, &edges), halt) {
            (Ok(()), Halt::Terminal) => ParseStatus::Complete,
            (Err(defect), halt) => ParseStatus::Partial { halt, defect },
            (Ok(()), halt) => ParseStatus::Partial {
                halt,
                defect: TreeDefect::Unfinished,
            },
        };

        if let ParseStatus::Partial { halt, defect } = status {
            tracing::debug!(?halt, %defect, edges = edges.len(), "partial dependency structure");
        }

        DependencyStructure {
            sentence: sentence.clone(),
            edges,
            status,
        }
    }

    /// Check that `edges` form a single tree rooted at ROOT over `sentence`.
    pub fn validate(sentence: &Sentence, edges: &[DependencyEdge]) -> Result<(), TreeDefect> {
        let mut heads: Vec<Option<TokenIndex>> = vec![None; sentence.token_count() + 1];

        for edge in edges {
            for index in [edge.head, edge.dependent] {
                if !sentence.contains(index) {
                    return Err(TreeDefect::OutOfRange(index));
                }
            }
            if edge.dependent == ROOT {
                return Err(TreeDefect::RootAsDependent);
            }
            if heads[edge.dependent].replace(edge.head).is_some() {
                return Err(TreeDefect::MultipleHeads(edge.dependent));
            }
        }

        if let Some(index) = sentence.token_indices().find(|&i| heads[i].is_none()) {
            return Err(TreeDefect::MissingHead(index));
        }

        // Every token has one head, so a walk that takes more than
        // `token_count` steps without reaching ROOT is going round a cycle.
        for start in sentence.token_indices() {
            let mut current = start;
            let mut steps = 0;
            while current != ROOT {
                if steps > sentence.token_count() {
                    return Err(TreeDefect::Cycle(start));
                }
                current = heads[current].unwrap_or(ROOT);
                steps += 1;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Label;
    use pretty_assertions::assert_eq;

    fn edge(head: TokenIndex, dependent: TokenIndex) -> DependencyEdge {
        DependencyEdge::new(head, dependent, Label::new("dep"))
    }

    fn three_words() -> Sentence {
        Sentence::new(["the", "dog", "barks"], ["DT", "NN", "VBZ"]).unwrap()
    }

    #[test]
    fn complete_tree() {
        let sentence = three_words();
        let structure = TreeBuilder::build(
            &sentence,
            vec![edge(3, 2), edge(0, 3), edge(2, 1)],
            Halt::Terminal,
        );
        assert!(structure.is_complete());
        assert_eq!(structure.edges(), &[edge(2, 1), edge(3, 2), edge(0, 3)]);
        assert_eq!(structure.head_of(2), Some(&edge(3, 2)));
        assert_eq!(structure.dependents_of(3).count(), 1);
        assert!(structure.is_projective());
    }

    #[test]
    fn missing_head_is_partial() {
        let sentence = three_words();
        let structure = TreeBuilder::build(&sentence, vec![edge(2, 1)], Halt::Stuck);
        assert_eq!(
            structure.status(),
            ParseStatus::Partial {
                halt: Halt::Stuck,
                defect: TreeDefect::MissingHead(2),
            }
        );
        assert_eq!(structure.edges(), &[edge(2, 1)]);
    }

    #[test]
    fn detects_cycles() {
        let sentence = three_words();
        let result = TreeBuilder::validate(&sentence, &[edge(2, 1), edge(1, 2), edge(0, 3)]);
        assert_eq!(result, Err(TreeDefect::Cycle(1)));
    }

    #[test]
    fn detects_multiple_heads() {
        let sentence = three_words();
        let result = TreeBuilder::validate(&sentence, &[edge(2, 1), edge(3, 1)]);
        assert_eq!(result, Err(TreeDefect::MultipleHeads(1)));
    }

    #[test]
    fn detects_root_as_dependent_and_out_of_range() {
        let sentence = three_words();
        assert_eq!(
            TreeBuilder::validate(&sentence, &[edge(1, 0)]),
            Err(TreeDefect::RootAsDependent)
        );
        assert_eq!(
            TreeBuilder::validate(&sentence, &[edge(4, 1)]),
            Err(TreeDefect::OutOfRange(4))
        );
    }

    #[test]
    fn valid_arcs_after_early_halt_are_still_partial() {
        let sentence = Sentence::new(["hi"], ["UH"]).unwrap();
        let structure = TreeBuilder::build(&sentence, vec![edge(0, 1)], Halt::TransitionLimit);
        assert_eq!(
            structure.status(),
            ParseStatus::Partial {
                halt: Halt::TransitionLimit,
                defect: TreeDefect::Unfinished,
            }
        );
    }

    #[test]
    fn detects_crossing_edges() {
        let sentence = Sentence::new(["a", "b", "c", "d"], ["X", "X", "X", "X"]).unwrap();
        let structure = TreeBuilder::build(
            &sentence,
            vec![edge(0, 2), edge(2, 4), edge(4, 1), edge(2, 3)],
            Halt::Terminal,
        );
        assert!(structure.is_complete());
        assert!(!structure.is_projective());
    }

    #[test]
    fn displays_labelled_edges() {
        let sentence = Sentence::new(["Dogs", "bark"], ["NNS", "VBP"]).unwrap();
        let structure = TreeBuilder::build(
            &sentence,
            vec![
                DependencyEdge::new(0, 2, Label::new("root")),
                DependencyEdge::new(2, 1, Label::new("nsubj")),
            ],
            Halt::Terminal,
        );
        assert_eq!(
            structure.to_string(),
            "nsubj(bark-2, Dogs-1)\nroot(<ROOT>-0, bark-2)"
        );
    }
}
