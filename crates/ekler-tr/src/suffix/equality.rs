// Equative: -ca / -ce / -ça / -çe

use ekler_core::AffixError;
use ekler_core::character::is_unvoiced;
use ekler_core::suffix::Suffix;

use super::by_group;
use crate::base::Base;
use crate::components::{get_components, group_of};

/// Equative suffix: `ç` after an unvoiced consonant, `c` otherwise, then
/// `a` or `e` by vowel group. "Çocuk" -> "ça", "akıllı" -> "ca".
pub fn get_equality_suffix<'a>(base: impl Into<Base<'a>>) -> Result<Suffix, AffixError> {
    equality_suffix_of(&base.into().into_stem())
}

pub(crate) fn equality_suffix_of(stem: &str) -> Result<Suffix, AffixError> {
    let components = get_components(stem)?;
    let consonant = if is_unvoiced(components.letter) { 'ç' } else { 'c' };
    let vowel = by_group(group_of(stem, &components)?, "a", "e");

    let mut body = String::with_capacity(3);
    body.push(consonant);
    body.push_str(vowel);
    Ok(Suffix::body(body))
}
