//! Shared building blocks for Turkish suffix generation.
//!
//! This crate holds everything that is independent of a particular rule
//! set: the phonological sound tables, Turkish-aware case folding, the
//! closed grammatical enums and the structured [`suffix::Suffix`] value.
//!
//! # Architecture
//!
//! - [`character`] -- Sound class tables and Turkish case folding (İ/i, I/ı)
//! - [`enums`] -- Pronoun, Case and Compound variants
//! - [`suffix`] -- `{prefix, infix, suffix}` affix decomposition

pub mod character;
pub mod enums;
pub mod suffix;

/// Error type for suffix rules and stem mutations.
///
/// Both variants describe input that is not a plausible Turkish noun stem.
/// They abort the single call; nothing is retried or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AffixError {
    #[error("no vowel found in stem {stem:?}")]
    NoVowel { stem: String },
    #[error("unrecognized vowel {vowel:?} in stem {stem:?}")]
    UnknownVowel { vowel: char, stem: String },
}
