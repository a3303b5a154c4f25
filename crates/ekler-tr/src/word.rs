// Chainable word with bounded undo history.
//
// `Word` owns the current surface form, the compound/proper-noun flags and
// a fixed-capacity ring of earlier snapshots. Every mutating method takes
// `&mut self` and returns `&mut Self` so calls chain with `?`:
//
//   let mut w = Word::new("Ses", false);
//   w.make_possessive(Pronoun::SingularThird)?.make_case(Case::Ablative)?;
//   assert_eq!(w.to_string(), "Sesinden");
//
// A failing call leaves the word and its history untouched.

use std::collections::VecDeque;
use std::fmt;

use ekler_core::AffixError;
use ekler_core::enums::{Case, Compound, Pronoun};
use tracing::debug;

use crate::base::Base;
use crate::compose;

/// Number of snapshots kept by [`Word::new`].
pub const HISTORY_CAPACITY: usize = 20;

/// A snapshot of a [`Word`] taken before each mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordState {
    pub word: String,
    pub is_compound: bool,
    pub is_proper_noun: bool,
}

/// A noun that accumulates suffixes and can undo them.
#[derive(Debug, Clone)]
pub struct Word {
    word: String,
    is_compound: bool,
    is_proper_noun: bool,
    history: VecDeque<WordState>,
    capacity: usize,
}

impl Word {
    /// Create a word with the default history capacity.
    pub fn new<'a>(base: impl Into<Base<'a>>, is_proper_noun: bool) -> Self {
        Self::with_history_capacity(base, is_proper_noun, HISTORY_CAPACITY)
    }

    /// Create a word keeping at most `capacity` undo snapshots (at least one).
    pub fn with_history_capacity<'a>(
        base: impl Into<Base<'a>>,
        is_proper_noun: bool,
        capacity: usize,
    ) -> Self {
        let capacity = capacity.max(1);
        Self {
            word: base.into().into_stem().into_owned(),
            is_compound: false,
            is_proper_noun,
            history: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.word
    }

    pub fn is_compound(&self) -> bool {
        self.is_compound
    }

    pub fn is_proper_noun(&self) -> bool {
        self.is_proper_noun
    }

    /// Number of operations that can currently be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Proper-noun punctuation is only needed for the first suffix; once
    /// the apostrophe is written, later suffixes attach directly.
    fn needs_apostrophe(&self) -> bool {
        self.is_proper_noun && !self.word.contains('\'')
    }

    fn snapshot(&self) -> WordState {
        WordState {
            word: self.word.clone(),
            is_compound: self.is_compound,
            is_proper_noun: self.is_proper_noun,
        }
    }

    /// Record the current state and switch to `next`.
    fn commit(&mut self, next: String, is_compound: bool) {
        if self.history.len() >= self.capacity {
            if let Some(evicted) = self.history.pop_front() {
                debug!(word = %evicted.word, "history full, dropping oldest snapshot");
            }
        }
        let state = self.snapshot();
        self.history.push_back(state);
        self.word = next;
        self.is_compound = is_compound;
    }

    /// Attach the plural suffix.
    pub fn make_plural(&mut self) -> Result<&mut Self, AffixError> {
        let next = compose::make_plural(self.word.as_str(), self.needs_apostrophe())?;
        self.commit(next, self.is_compound);
        Ok(self)
    }

    /// Attach the equative suffix.
    pub fn make_equal(&mut self) -> Result<&mut Self, AffixError> {
        let next = compose::make_equal(self.word.as_str(), self.needs_apostrophe())?;
        self.commit(next, self.is_compound);
        Ok(self)
    }

    /// Attach a possessive suffix. The word counts as a compound afterwards.
    pub fn make_possessive(&mut self, pronoun: Pronoun) -> Result<&mut Self, AffixError> {
        let next =
            compose::make_possessive(self.word.as_str(), pronoun, self.needs_apostrophe())?;
        self.commit(next, true);
        Ok(self)
    }

    /// Attach a case suffix, taking the compound flag into account.
    pub fn make_case(&mut self, case: Case) -> Result<&mut Self, AffixError> {
        let next = compose::make_case(
            self.word.as_str(),
            case,
            self.needs_apostrophe(),
            self.is_compound,
        )?;
        self.commit(next, self.is_compound);
        Ok(self)
    }

    /// Attach a compound linker. The word counts as a compound afterwards.
    pub fn make_compound(&mut self, role: Compound) -> Result<&mut Self, AffixError> {
        let next = compose::make_compound(self.word.as_str(), role, self.needs_apostrophe())?;
        self.commit(next, true);
        Ok(self)
    }

    /// Restore the most recent snapshot. No-op when there is no history.
    pub fn undo(&mut self) -> &mut Self {
        if let Some(state) = self.history.pop_back() {
            debug!(from = %self.word, to = %state.word, "undo");
            self.word = state.word;
            self.is_compound = state.is_compound;
            self.is_proper_noun = state.is_proper_noun;
        }
        self
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.word)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.word
    }
}
