//! The arc-standard transition system.
//!
//! | Action          | Legal when                                    | Effect                                   |
//! |-----------------|-----------------------------------------------|------------------------------------------|
//! | `shift`         | buffer non-empty                              | move buffer front onto the stack         |
//! | `left_arc(l)`   | ≥ 2 stack elements, second is not ROOT        | add `(s1, s2, l)`, remove `s2`           |
//! | `right_arc(l)`  | ≥ 2 stack elements                            | add `(s2, s1, l)`, pop `s1`              |
//!
//! where `s1` is the top of the stack and `s2` the element beneath it.
//! Driven to a terminal configuration, a sentence of `n` tokens sees exactly
//! `n` shifts and `n` arc actions and ends with a projective tree rooted at
//! ROOT.

use std::fmt;
use std::sync::Arc;

use crate::configuration::{Configuration, DependencyEdge};
use crate::error::DepParseError;
use crate::sentence::ROOT;

/// A dependency relation label, e.g. `nsubj`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(Arc<str>);

impl Label {
    pub fn new(label: impl AsRef<str>) -> Self {
        Label(Arc::from(label.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(label: &str) -> Self {
        Label::new(label)
    }
}

impl From<String> for Label {
    fn from(label: String) -> Self {
        Label(Arc::from(label))
    }
}

/// The unlabelled shape of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Shift,
    LeftArc,
    RightArc,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionKind::Shift => write!(f, "shift"),
            TransitionKind::LeftArc => write!(f, "left_arc"),
            TransitionKind::RightArc => write!(f, "right_arc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    Shift,
    LeftArc(Label),
    RightArc(Label),
}

impl Action {
    pub fn left_arc(label: impl Into<Label>) -> Self {
        Action::LeftArc(label.into())
    }

    pub fn right_arc(label: impl Into<Label>) -> Self {
        Action::RightArc(label.into())
    }

    pub fn kind(&self) -> TransitionKind {
        match self {
            Action::Shift => TransitionKind::Shift,
            Action::LeftArc(_) => TransitionKind::LeftArc,
            Action::RightArc(_) => TransitionKind::RightArc,
        }
    }

    pub fn label(&self) -> Option<&Label> {
        match self {
            Action::Shift => None,
            Action::LeftArc(label) | Action::RightArc(label) => Some(label),
        }
    }

    pub fn is_arc(&self) -> bool {
        !matches!(self, Action::Shift)
    }

    pub fn is_legal(&self, configuration: &Configuration) -> bool {
        match self {
            Action::Shift => !configuration.buffer().is_empty(),
            Action::LeftArc(_) => matches!(configuration.second(), Some(s2) if s2 != ROOT),
            Action::RightArc(_) => configuration.stack().len() >= 2,
        }
    }

    /// Applies the action, returning the arc it added, if any.
    ///
    /// An illegal action is refused and the configuration is left untouched.
    pub fn apply(
        &self,
        configuration: &mut Configuration,
    ) -> Result<Option<DependencyEdge>, DepParseError> {
        if !self.is_legal(configuration) {
            return Err(DepParseError::IllegalTransition {
                action: self.to_string(),
            });
        }

        let applied = match self {
            Action::Shift => configuration.shift().map(|_| None),
            Action::LeftArc(label) => configuration.reduce_left(label.clone()).map(Some),
            Action::RightArc(label) => configuration.reduce_right(label.clone()).map(Some),
        };

        applied.ok_or_else(|| DepParseError::IllegalTransition {
            action: self.to_string(),
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Shift => write!(f, "shift"),
            Action::LeftArc(label) => write!(f, "left_arc({})", label),
            Action::RightArc(label) => write!(f, "right_arc({})", label),
        }
    }
}
