//! Sentences — the static input to a parse.
//!
//! A sentence is an ordered sequence of words with an aligned sequence of
//! part-of-speech tags. Position 0 is reserved for a synthetic ROOT token
//! that heads the sentence; the caller's words occupy positions `1..=n`.

use std::fmt;

use crate::error::DepParseError;

/// Position of a token within a [`Sentence`].
pub type TokenIndex = usize;

/// The index of the synthetic ROOT token.
pub const ROOT: TokenIndex = 0;

/// Word and tag placed in the ROOT slot.
pub const ROOT_WORD: &str = "<ROOT>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<String>,
    tags: Vec<String>,
}

impl Sentence {
    /// Build a sentence from its non-root words and their tags.
    pub fn new<W, T>(words: W, tags: T) -> Result<Self, DepParseError>
    where
        W: IntoIterator,
        W::Item: Into<String>,
        T: IntoIterator,
        T::Item: Into<String>,
    {
        let words = std::iter::once(ROOT_WORD.to_string())
            .chain(words.into_iter().map(Into::into))
            .collect::<Vec<_>>();
        let tags = std::iter::once(ROOT_WORD.to_string())
            .chain(tags.into_iter().map(Into::into))
            .collect::<Vec<_>>();

        if words.len() != tags.len() {
            return Err(DepParseError::MisalignedSentence {
                words: words.len() - 1,
                tags: tags.len() - 1,
            });
        }

        Ok(Sentence { words, tags })
    }

    /// Number of non-root tokens.
    pub fn token_count(&self) -> usize {
        self.words.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.token_count() == 0
    }

    /// Whether `index` names a token of this sentence (ROOT included).
    pub fn contains(&self, index: TokenIndex) -> bool {
        index < self.words.len()
    }

    pub fn word(&self, index: TokenIndex) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn tag(&self, index: TokenIndex) -> Option<&str> {
        self.tags.get(index).map(String::as_str)
    }

    /// All words, ROOT slot first.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// All tags, ROOT slot first.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Indices of the non-root tokens, left to right.
    pub fn token_indices(&self) -> std::ops::Range<TokenIndex> {
        1..self.words.len()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (word, tag)) in self.words.iter().zip(&self.tags).skip(1).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}/{}", word, tag)?;
        }
        Ok(())
    }
}
