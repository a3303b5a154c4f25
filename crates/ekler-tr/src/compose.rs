// Composers: mutate the stem, compute the suffix, concatenate.
//
// Before a vowel-initial suffix the stem first loses its vowel (if it is
// on the vowel-drop list) and then softens its final stop. Softening is
// decided on the stem as written, so "kayıp" becomes "kaybı" and not
// "kaypı". Proper nouns keep their written form and get an apostrophe
// between the stem and the suffix.

use ekler_core::AffixError;
use ekler_core::character::is_vowel;
use ekler_core::enums::{Case, Compound, Pronoun};
use ekler_core::suffix::Suffix;
use tracing::trace;

use crate::base::Base;
use crate::mutation::{alter_to_vowel_drop, replace_last, voiced_consonant_of};
use crate::suffix;

const APOSTROPHE: char = '\'';

/// Stem as it appears before a vowel-initial suffix.
fn mutated_root(stem: &str) -> Result<String, AffixError> {
    let voiced = voiced_consonant_of(stem, false)?;
    let dropped = alter_to_vowel_drop(stem)?;
    Ok(match voiced {
        Some(c) => replace_last(&dropped, c),
        None => dropped,
    })
}

/// Join `stem` and `suffix`, applying stem mutations and punctuation.
///
/// An empty suffix leaves the stem untouched, without an apostrophe.
fn attach(stem: &str, suffix: &Suffix, is_proper_noun: bool) -> Result<String, AffixError> {
    if suffix.is_empty() {
        return Ok(stem.to_string());
    }

    let root = match suffix.first_char() {
        Some(c) if is_vowel(c) && !is_proper_noun => mutated_root(stem)?,
        _ => stem.to_string(),
    };

    let rendered = suffix.render();
    let mut out = String::with_capacity(root.len() + rendered.len() + 1);
    out.push_str(&root);
    if is_proper_noun && suffix.prefix.is_empty() {
        out.push(APOSTROPHE);
    }
    out.push_str(&rendered);

    trace!(stem, suffix = %rendered, result = %out, "attached suffix");
    Ok(out)
}

/// Plural form: "Araba" -> "Arabalar", "o" -> "onlar".
pub fn make_plural<'a>(
    base: impl Into<Base<'a>>,
    is_proper_noun: bool,
) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let suffix = suffix::plural_suffix_of(&stem)?;
    attach(&stem, &suffix, is_proper_noun)
}

/// Equative form: "Çocuk" -> "Çocukça".
pub fn make_equal<'a>(
    base: impl Into<Base<'a>>,
    is_proper_noun: bool,
) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let suffix = suffix::equality_suffix_of(&stem)?;
    attach(&stem, &suffix, is_proper_noun)
}

/// Possessive form: "Çocuk" -> "Çocuğum", "Akıl" -> "Aklımız".
pub fn make_possessive<'a>(
    base: impl Into<Base<'a>>,
    pronoun: Pronoun,
    is_proper_noun: bool,
) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let suffix = suffix::possessive_suffix_of(&stem, pronoun)?;
    attach(&stem, &suffix, is_proper_noun)
}

/// Case form: "Kağıt" -> "Kağıdı", "Şehir" -> "Şehre".
///
/// `is_compound` marks a stem that already carries a possessive or
/// compound linker, which changes the buffer consonant.
pub fn make_case<'a>(
    base: impl Into<Base<'a>>,
    case: Case,
    is_proper_noun: bool,
    is_compound: bool,
) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let suffix = suffix::case_suffix_of(&stem, case, is_compound)?;
    attach(&stem, &suffix, is_proper_noun)
}

/// Compound form: "Köprü" -> "Köprünün", "kapı" -> "kapısı".
pub fn make_compound<'a>(
    base: impl Into<Base<'a>>,
    role: Compound,
    is_proper_noun: bool,
) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let suffix = suffix::compound_suffix_of(&stem, role)?;
    attach(&stem, &suffix, is_proper_noun)
}

/// Question form: "ev" -> "ev mi". The particle is a separate word, so
/// there is no proper-noun punctuation.
pub fn make_question<'a>(base: impl Into<Base<'a>>) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let suffix = suffix::question_suffix_of(&stem)?;
    attach(&stem, &suffix, false)
}

/// Relative form: "ev" -> "evdeki", "İstanbul" -> "İstanbul'daki".
pub fn make_relative<'a>(
    base: impl Into<Base<'a>>,
    is_proper_noun: bool,
    is_compound: bool,
) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let suffix = suffix::relative_suffix_of(&stem, is_compound)?;
    attach(&stem, &suffix, is_proper_noun)
}
