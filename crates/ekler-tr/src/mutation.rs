// Stem mutations: consonant softening and vowel drop.
//
// Both are applied only when a vowel-initial suffix follows; the composers
// decide when. Vowel drop runs first, and softening is decided on the stem
// as it was before the drop ("kayıp" -> "kayb" + "ı").

use ekler_core::AffixError;
use ekler_core::character::{
    is_acute, is_unvoiced_stopping, is_upper, lower_tr, to_lower_tr, voiced_counterpart,
};

use crate::base::Base;
use crate::components::{get_components, syllable_count};
use crate::exceptions;

/// The voiced replacement for the stem's final consonant, if it softens.
///
/// A stem softens when it ends in `p ç t k`, is not a proper noun, is not
/// listed as resisting softening, and either has more than one syllable or
/// is a listed single-syllable exception. A stem ending in "nk" always
/// yields `g`. The returned letter keeps the case of the final character.
pub fn get_voiced_consonant<'a>(
    base: impl Into<Base<'a>>,
    is_proper_noun: bool,
) -> Result<Option<char>, AffixError> {
    let stem = base.into().into_stem();
    voiced_consonant_of(&stem, is_proper_noun)
}

pub(crate) fn voiced_consonant_of(
    stem: &str,
    is_proper_noun: bool,
) -> Result<Option<char>, AffixError> {
    let components = get_components(stem)?;
    if is_proper_noun || !is_unvoiced_stopping(components.letter) {
        return Ok(None);
    }

    let lower = lower_tr(stem);
    if exceptions::resists_softening(&lower) {
        return Ok(None);
    }

    // The final char exists: get_components succeeded.
    let last = stem.chars().next_back().unwrap_or(components.letter);

    if lower.ends_with("nk") {
        return Ok(Some(if is_upper(last) { 'G' } else { 'g' }));
    }

    if syllable_count(stem) > 1 || exceptions::softens_single_syllable(&lower) {
        return Ok(voiced_counterpart(last));
    }

    Ok(None)
}

/// Replace the final consonant with its voiced counterpart when it softens.
///
/// "Çocuk" -> "Çocuğ", "Renk" -> "Reng", "Akıl" -> "Akıl".
pub fn alter_to_voiced_consonant<'a>(
    base: impl Into<Base<'a>>,
    is_proper_noun: bool,
) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let voiced = voiced_consonant_of(&stem, is_proper_noun)?;
    Ok(match voiced {
        Some(c) => replace_last(&stem, c),
        None => stem.into_owned(),
    })
}

/// Drop the last vowel of a listed two-syllable stem.
///
/// Applies only when the stem has exactly two syllables, its last vowel
/// is one of `ı i u ü`, and the folded stem is on the vowel-drop list.
/// Otherwise the whitespace-trimmed stem is returned. "Akıl" -> "Akl",
/// "Bebek" -> "Bebek".
pub fn alter_to_vowel_drop<'a>(base: impl Into<Base<'a>>) -> Result<String, AffixError> {
    let stem = base.into().into_stem();
    let components = get_components(&stem)?;
    let word = stem.trim();

    if syllable_count(&stem) == 2
        && is_acute(components.vowel)
        && exceptions::drops_vowel(&lower_tr(word))
    {
        return Ok(remove_last_vowel(word, components.vowel));
    }

    Ok(word.to_string())
}

/// Replace the last character of `stem` with `c`.
pub(crate) fn replace_last(stem: &str, c: char) -> String {
    let mut out = stem.to_string();
    out.pop();
    out.push(c);
    out
}

/// Remove the occurrence of `vowel` nearest to the end, in either case.
fn remove_last_vowel(word: &str, vowel: char) -> String {
    match word.char_indices().rev().find(|&(_, c)| to_lower_tr(c) == vowel) {
        Some((i, c)) => {
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..i]);
            out.push_str(&word[i + c.len_utf8()..]);
            out
        }
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- get_voiced_consonant --

    #[test]
    fn voiced_counterpart_query() {
        assert_eq!(get_voiced_consonant("Çocuk", false).unwrap(), Some('ğ'));
        assert_eq!(get_voiced_consonant("Bebek", false).unwrap(), Some('ğ'));
        assert_eq!(get_voiced_consonant("Ağaç", false).unwrap(), Some('c'));
        assert_eq!(get_voiced_consonant("Sebep", false).unwrap(), Some('b'));
        assert_eq!(get_voiced_consonant("akıllı", false).unwrap(), None);
        assert_eq!(get_voiced_consonant("sebepsiz", false).unwrap(), None);
    }

    #[test]
    fn voiced_query_respects_exceptions() {
        assert_eq!(get_voiced_consonant("Merak", false).unwrap(), None);
        assert_eq!(get_voiced_consonant("bilet", false).unwrap(), None);
        assert_eq!(get_voiced_consonant("Çocuk", true).unwrap(), None);
    }

    #[test]
    fn single_syllable_stems() {
        assert_eq!(get_voiced_consonant("top", false).unwrap(), None);
        assert_eq!(get_voiced_consonant("saç", false).unwrap(), None);
        assert_eq!(get_voiced_consonant("uç", false).unwrap(), Some('c'));
        assert_eq!(get_voiced_consonant("Uç", false).unwrap(), Some('c'));
    }

    #[test]
    fn nk_always_gives_g() {
        assert_eq!(get_voiced_consonant("renk", false).unwrap(), Some('g'));
        assert_eq!(get_voiced_consonant("ahenk", false).unwrap(), Some('g'));
        assert_eq!(get_voiced_consonant("RENK", false).unwrap(), Some('G'));
    }

    #[test]
    fn uppercase_final_letter_stays_uppercase() {
        assert_eq!(get_voiced_consonant("KİTAP", false).unwrap(), Some('B'));
        assert_eq!(get_voiced_consonant("AĞAÇ", false).unwrap(), Some('C'));
    }

    #[test]
    fn voiced_query_needs_a_vowel() {
        assert!(get_voiced_consonant("krt", false).is_err());
    }

    // -- alter_to_voiced_consonant --

    #[test]
    fn alter_voiced() {
        assert_eq!(alter_to_voiced_consonant("Çocuk", false).unwrap(), "Çocuğ");
        assert_eq!(alter_to_voiced_consonant("Bebek", false).unwrap(), "Bebeğ");
        assert_eq!(alter_to_voiced_consonant("Ağaç", false).unwrap(), "Ağac");
        assert_eq!(alter_to_voiced_consonant("Sebep", false).unwrap(), "Sebeb");
        assert_eq!(alter_to_voiced_consonant("akıllı", false).unwrap(), "akıllı");
        assert_eq!(alter_to_voiced_consonant("sebepsiz", false).unwrap(), "sebepsiz");
        assert_eq!(alter_to_voiced_consonant("Renk", false).unwrap(), "Reng");
        assert_eq!(alter_to_voiced_consonant("Akıl", false).unwrap(), "Akıl");
    }

    #[test]
    fn alter_voiced_numbers() {
        assert_eq!(alter_to_voiced_consonant(4, false).unwrap(), "dörd");
        assert_eq!(alter_to_voiced_consonant(3, false).unwrap(), "üç");
    }

    // -- alter_to_vowel_drop --

    #[test]
    fn vowel_drop() {
        assert_eq!(alter_to_vowel_drop("oğul").unwrap(), "oğl");
        assert_eq!(alter_to_vowel_drop("basın").unwrap(), "basın");
        assert_eq!(alter_to_vowel_drop("bağır").unwrap(), "bağr");
        assert_eq!(alter_to_vowel_drop("bebek").unwrap(), "bebek");
        assert_eq!(alter_to_vowel_drop("beyin").unwrap(), "beyn");
        assert_eq!(alter_to_vowel_drop("kafa").unwrap(), "kafa");
        assert_eq!(alter_to_vowel_drop("burun ").unwrap(), "burn");
        assert_eq!(alter_to_vowel_drop("fare").unwrap(), "fare");
        assert_eq!(alter_to_vowel_drop("ağız").unwrap(), "ağz");
        assert_eq!(alter_to_vowel_drop("karın").unwrap(), "karn");
        assert_eq!(alter_to_vowel_drop("içeri").unwrap(), "içeri");
        assert_eq!(alter_to_vowel_drop("şura").unwrap(), "şura");
        assert_eq!(alter_to_vowel_drop("yayın").unwrap(), "yayın");
    }

    #[test]
    fn vowel_drop_keeps_case() {
        assert_eq!(alter_to_vowel_drop("Akıl").unwrap(), "Akl");
        assert_eq!(alter_to_vowel_drop("Şehir").unwrap(), "Şehr");
        assert_eq!(alter_to_vowel_drop("AKIL").unwrap(), "AKL");
        assert_eq!(alter_to_vowel_drop("İSİM").unwrap(), "İSM");
    }

    #[test]
    fn vowel_drop_needs_a_vowel() {
        assert!(alter_to_vowel_drop("").is_err());
    }

    // -- helpers --

    #[test]
    fn replace_last_char() {
        assert_eq!(replace_last("ağaç", 'c'), "ağac");
        assert_eq!(replace_last("k", 'ğ'), "ğ");
    }
}
