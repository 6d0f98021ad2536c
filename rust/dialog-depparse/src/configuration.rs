//! The parser configuration — the mutable state a transition system acts on.
//!
//! A configuration is a `(stack, buffer, arcs)` triple:
//!
//! ```text
//! stack:  [ROOT, s3, s2, s1]   ← push/pop at the right
//! buffer: [b1, b2, b3, ...]    ← consumed from the left
//! arcs:   {(head, dependent, label), ...}
//! ```
//!
//! Every non-root token sits in exactly one of stack or buffer until it is
//! attached as a dependent, after which it sits in neither.

use std::collections::VecDeque;
use std::fmt;

use crate::sentence::{ROOT, TokenIndex};
use crate::transition::Label;

/// A labelled head → dependent edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyEdge {
    pub head: TokenIndex,
    pub dependent: TokenIndex,
    pub label: Label,
}

impl DependencyEdge {
    pub fn new(head: TokenIndex, dependent: TokenIndex, label: Label) -> Self {
        DependencyEdge {
            head,
            dependent,
            label,
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.head, self.label, self.dependent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    token_count: usize,
    stack: Vec<TokenIndex>,
    buffer: VecDeque<TokenIndex>,
    arcs: Vec<DependencyEdge>,
}

impl Configuration {
    /// The initial configuration for a sentence of `token_count` non-root
    /// tokens: ROOT on the stack, every other token in the buffer.
    pub fn new(token_count: usize) -> Self {
        Configuration {
            token_count,
            stack: vec![ROOT],
            buffer: (1..=token_count).collect(),
            arcs: Vec::with_capacity(token_count),
        }
    }

    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Stack contents, bottom first.
    pub fn stack(&self) -> &[TokenIndex] {
        &self.stack
    }

    /// Buffer contents, front first.
    pub fn buffer(&self) -> &VecDeque<TokenIndex> {
        &self.buffer
    }

    /// Arcs in the order they were added.
    pub fn arcs(&self) -> &[DependencyEdge] {
        &self.arcs
    }

    pub fn into_arcs(self) -> Vec<DependencyEdge> {
        self.arcs
    }

    /// The element on top of the stack.
    pub fn top(&self) -> Option<TokenIndex> {
        self.stack.last().copied()
    }

    /// The element directly beneath the top of the stack.
    pub fn second(&self) -> Option<TokenIndex> {
        self.stack.iter().rev().nth(1).copied()
    }

    /// The `depth`-th stack element from the top (0 is the top).
    pub fn stack_from_top(&self, depth: usize) -> Option<TokenIndex> {
        self.stack.iter().rev().nth(depth).copied()
    }

    /// The `position`-th buffer element from the front.
    pub fn buffer_at(&self, position: usize) -> Option<TokenIndex> {
        self.buffer.get(position).copied()
    }

    /// Buffer is empty and only ROOT remains on the stack.
    pub fn is_terminal(&self) -> bool {
        self.buffer.is_empty() && self.stack == [ROOT]
    }

    /// Tokens already attached as dependents.
    pub fn attached(&self) -> usize {
        self.arcs.len()
    }

    /// Checks the conservation law `|stack| + |buffer| + |arcs| = n + 1`
    /// together with ROOT pinned at the bottom of the stack and every
    /// non-root token accounted for exactly once.
    pub fn satisfies_invariant(&self) -> bool {
        if self.stack.first() != Some(&ROOT) {
            return false;
        }
        if self.stack.len() + self.buffer.len() + self.arcs.len() != self.token_count + 1 {
            return false;
        }

        let mut seen = vec![false; self.token_count + 1];
        let placed = self
            .stack
            .iter()
            .skip(1)
            .chain(self.buffer.iter())
            .chain(self.arcs.iter().map(|arc| &arc.dependent));
        for &index in placed {
            if index == ROOT || index > self.token_count || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }

    pub(crate) fn shift(&mut self) -> Option<TokenIndex> {
        let front = self.buffer.pop_front()?;
        self.stack.push(front);
        Some(front)
    }

    /// Attaches the second stack element under the top and removes it.
    pub(crate) fn reduce_left(&mut self, label: Label) -> Option<DependencyEdge> {
        let len = self.stack.len();
        if len < 2 {
            return None;
        }
        let head = self.stack[len - 1];
        let dependent = self.stack.remove(len - 2);
        let arc = DependencyEdge::new(head, dependent, label);
        self.arcs.push(arc.clone());
        Some(arc)
    }

    /// Attaches the top stack element under the second and pops it.
    pub(crate) fn reduce_right(&mut self, label: Label) -> Option<DependencyEdge> {
        let head = self.second()?;
        let dependent = self.stack.pop()?;
        let arc = DependencyEdge::new(head, dependent, label);
        self.arcs.push(arc.clone());
        Some(arc)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stack={:?} buffer={:?} arcs=[", self.stack, self.buffer)?;
        for (i, arc) in self.arcs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arc)?;
        }
        write!(f, "]")
    }
}
