// Noun compound (izafet) linkers

use ekler_core::AffixError;
use ekler_core::enums::Compound;
use ekler_core::suffix::Suffix;

use crate::base::Base;
use crate::components::{get_components, high_vowel_of};

/// Possessor linker: `n` + harmonic vowel + `n` after a vowel, otherwise
/// harmonic vowel + `n`. "Köprü" -> "nün", "kitap" -> "ın".
pub fn get_compounder_suffix<'a>(base: impl Into<Base<'a>>) -> Result<Suffix, AffixError> {
    compound_suffix_of(&base.into().into_stem(), Compound::Compounder)
}

/// Possessed linker: `s` + harmonic vowel after a vowel, otherwise the
/// harmonic vowel alone. "kapı" -> "sı", "kol" -> "u".
pub fn get_compoundee_suffix<'a>(base: impl Into<Base<'a>>) -> Result<Suffix, AffixError> {
    compound_suffix_of(&base.into().into_stem(), Compound::Compoundee)
}

/// Compound linker for either role.
pub fn get_compound_suffix<'a>(
    base: impl Into<Base<'a>>,
    role: Compound,
) -> Result<Suffix, AffixError> {
    compound_suffix_of(&base.into().into_stem(), role)
}

pub(crate) fn compound_suffix_of(stem: &str, role: Compound) -> Result<Suffix, AffixError> {
    let components = get_components(stem)?;
    let high = high_vowel_of(stem, &components)?;
    let vowel_final = components.ends_in_vowel();

    let suffix = match role {
        Compound::Compounder => {
            let infix = if vowel_final { "n" } else { "" };
            Suffix::with_infix(infix, format!("{high}n"))
        }
        Compound::Compoundee => {
            let infix = if vowel_final { "s" } else { "" };
            Suffix::with_infix(infix, high.to_string())
        }
    };
    Ok(suffix)
}
