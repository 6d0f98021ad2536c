//! The action vocabulary — a fixed bidirectional index ↔ [`Action`] table.
//!
//! A model emits one score per output index; the table maps those indices
//! back to actions (and actions to indices when building training targets).
//! The table is established once at model-build time and its order doubles
//! as the enumeration order used to break score ties:
//!
//! ```text
//! 0: shift
//! 1: left_arc(l0)   2: right_arc(l0)
//! 3: left_arc(l1)   4: right_arc(l1)
//! ...
//! ```

use indexmap::IndexSet;

use crate::error::DepParseError;
use crate::transition::{Action, Label};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTable {
    actions: IndexSet<Action>,
}

impl ActionTable {
    /// Build the table from a label vocabulary. Labels must be distinct.
    pub fn from_labels<I>(labels: I) -> Result<Self, DepParseError>
    where
        I: IntoIterator,
        I::Item: Into<Label>,
    {
        let mut actions = IndexSet::new();
        actions.insert(Action::Shift);

        for label in labels {
            let label = label.into();
            if !actions.insert(Action::LeftArc(label.clone())) {
                return Err(DepParseError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
            actions.insert(Action::RightArc(label));
        }

        Ok(ActionTable { actions })
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn action(&self, index: usize) -> Option<&Action> {
        self.actions.get_index(index)
    }

    pub fn index_of(&self, action: &Action) -> Option<usize> {
        self.actions.get_index_of(action)
    }

    /// Labels in vocabulary order.
    pub fn labels(&self) -> impl Iterator<Item = &Label> {
        self.actions.iter().filter_map(|action| match action {
            Action::LeftArc(label) => Some(label),
            _ => None,
        })
    }

    /// Actions in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

impl<'a> IntoIterator for &'a ActionTable {
    type Item = &'a Action;
    type IntoIter = indexmap::set::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}
