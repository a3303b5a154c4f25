//! Turkish noun suffix generation.
//!
//! Given a noun stem (or a number standing in for one) and a grammatical
//! operation, this crate computes the suffix and the mutated stem following
//! vowel harmony, consonant softening and vowel drop.
//!
//! ```
//! use ekler_tr::{Case, Pronoun, make_case, make_plural, make_possessive};
//!
//! assert_eq!(make_plural("Araba", false).unwrap(), "Arabalar");
//! assert_eq!(make_possessive("Çocuk", Pronoun::SingularFirst, false).unwrap(), "Çocuğum");
//! assert_eq!(make_case("Şehir", Case::Dative, false, false).unwrap(), "Şehre");
//! ```
//!
//! # Architecture
//!
//! - [`exceptions`] -- Curated word lists overriding the default rules
//! - [`components`] -- Last letter / last vowel extraction
//! - [`mutation`] -- Consonant softening and vowel drop
//! - [`suffix`] -- One suffix rule per grammatical operation
//! - [`compose`] -- Stem + suffix composition with proper-noun punctuation
//! - [`number`] -- Cardinal numbers as spoken words
//! - `word` -- Chainable word with undo history (feature `word`)

pub mod base;
pub mod components;
pub mod compose;
pub mod exceptions;
pub mod mutation;
pub mod number;
pub mod suffix;
#[cfg(feature = "word")]
pub mod word;

pub use ekler_core::AffixError;
pub use ekler_core::enums::{Case, Compound, Pronoun};
pub use ekler_core::suffix::Suffix;

pub use base::Base;
pub use components::{Components, get_components, syllable_count};
pub use compose::{
    make_case, make_compound, make_equal, make_plural, make_possessive, make_question,
    make_relative,
};
pub use mutation::{alter_to_voiced_consonant, alter_to_vowel_drop, get_voiced_consonant};
pub use suffix::{
    get_case_suffix, get_compound_suffix, get_compoundee_suffix, get_compounder_suffix,
    get_equality_suffix, get_plural_suffix, get_possessive_suffix, get_question_suffix,
    get_relative_suffix,
};
#[cfg(feature = "word")]
pub use word::{HISTORY_CAPACITY, Word, WordState};
