//! Feature extraction — turning a configuration into model inputs.
//!
//! The model sees six word ids: the top three stack tokens (top first)
//! followed by the first three buffer tokens. Slots with no token, the ROOT
//! token, numbers and proper nouns map to reserved placeholders so that a
//! small vocabulary still covers every input:
//!
//! ```text
//! stack:  [0, 4, 7]      buffer: [8, 9]
//! ids:    [7, 4, <ROOT>, 8, 9, <NULL>]
//! ```

use indexmap::IndexSet;

use crate::configuration::Configuration;
use crate::sentence::{ROOT, Sentence, TokenIndex};

pub const NULL_TOKEN: &str = "<NULL>";
pub const ROOT_TOKEN: &str = "<ROOT>";
pub const UNKNOWN_TOKEN: &str = "<UNK>";
pub const NUMBER_TOKEN: &str = "<CD>";
pub const PROPER_NOUN_TOKEN: &str = "<NNP>";

/// Number of stack and buffer slots fed to the model, each.
pub const WINDOW: usize = 3;

/// Length of an input representation.
pub const FEATURE_COUNT: usize = WINDOW * 2;

/// A word ↔ id table with reserved placeholder entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    entries: IndexSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary; placeholders take the first ids, then `words`
    /// in the order given (duplicates keep their first id).
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut entries = [
            NUMBER_TOKEN,
            PROPER_NOUN_TOKEN,
            UNKNOWN_TOKEN,
            ROOT_TOKEN,
            NULL_TOKEN,
        ]
        .into_iter()
        .map(str::to_string)
        .collect::<IndexSet<_>>();
        entries.extend(words.into_iter().map(Into::into));
        Vocabulary { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id of `word`, or the `<UNK>` id if it is not in the vocabulary.
    pub fn id(&self, word: &str) -> usize {
        self.entries
            .get_index_of(word)
            .unwrap_or_else(|| self.placeholder(UNKNOWN_TOKEN))
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries.get_index_of(word)
    }

    pub fn word(&self, id: usize) -> Option<&str> {
        self.entries.get_index(id).map(String::as_str)
    }

    fn placeholder(&self, token: &str) -> usize {
        // Placeholders are inserted first by construction.
        self.entries.get_index_of(token).unwrap_or_default()
    }
}

/// Maps configurations to fixed-width id vectors over a word vocabulary.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    words: Vocabulary,
}

impl FeatureExtractor {
    pub fn new(words: Vocabulary) -> Self {
        FeatureExtractor { words }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.words
    }

    pub fn input_representation(
        &self,
        sentence: &Sentence,
        configuration: &Configuration,
    ) -> [usize; FEATURE_COUNT] {
        let mut features = [self.words.placeholder(NULL_TOKEN); FEATURE_COUNT];

        for depth in 0..WINDOW {
            if let Some(index) = configuration.stack_from_top(depth) {
                features[depth] = self.token_id(sentence, index);
            }
            if let Some(index) = configuration.buffer_at(depth) {
                features[WINDOW + depth] = self.token_id(sentence, index);
            }
        }

        features
    }

    fn token_id(&self, sentence: &Sentence, index: TokenIndex) -> usize {
        if index == ROOT {
            return self.words.placeholder(ROOT_TOKEN);
        }
        match sentence.tag(index) {
            Some("CD") => return self.words.placeholder(NUMBER_TOKEN),
            Some("NNP") => return self.words.placeholder(PROPER_NOUN_TOKEN),
            _ => {}
        }
        match sentence.word(index) {
            Some(word) => self.words.id(&word.to_lowercase()),
            None => self.words.placeholder(NULL_TOKEN),
        }
    }
}
