// Component extraction: the last letter and last vowel of a stem.

use ekler_core::AffixError;
use ekler_core::character::{VowelGroup, harmonic_high_vowel, is_vowel, to_lower_tr, vowel_group};

/// The phonologically relevant tail of a stem, both case-folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Components {
    /// Final character of the stem.
    pub letter: char,
    /// Nearest vowel scanning from the end.
    pub vowel: char,
}

impl Components {
    /// The stem ends in a vowel.
    pub fn ends_in_vowel(&self) -> bool {
        is_vowel(self.letter)
    }
}

/// Extract the last letter and the last vowel of `stem`.
///
/// Fails with [`AffixError::NoVowel`] when the stem has no vowel at all,
/// which also covers the empty stem.
pub fn get_components(stem: &str) -> Result<Components, AffixError> {
    let no_vowel = || AffixError::NoVowel {
        stem: stem.to_string(),
    };
    let letter = stem.chars().next_back().map(to_lower_tr).ok_or_else(no_vowel)?;
    let vowel = stem
        .chars()
        .rev()
        .map(to_lower_tr)
        .find(|&c| is_vowel(c))
        .ok_or_else(no_vowel)?;
    Ok(Components { letter, vowel })
}

/// Number of vowels in `stem`, counted in either letter case.
pub fn syllable_count(stem: &str) -> usize {
    stem.chars().filter(|&c| is_vowel(c)).count()
}

/// Front/back group of the extracted vowel.
pub(crate) fn group_of(stem: &str, c: &Components) -> Result<VowelGroup, AffixError> {
    vowel_group(c.vowel).ok_or_else(|| AffixError::UnknownVowel {
        vowel: c.vowel,
        stem: stem.to_string(),
    })
}

/// High vowel (`ı i u ü`) in harmony with the extracted vowel.
pub(crate) fn high_vowel_of(stem: &str, c: &Components) -> Result<char, AffixError> {
    harmonic_high_vowel(c.vowel).ok_or_else(|| AffixError::UnknownVowel {
        vowel: c.vowel,
        stem: stem.to_string(),
    })
}
