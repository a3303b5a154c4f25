// Case suffixes and the relative -ki built on the locative

use ekler_core::AffixError;
use ekler_core::character::is_unvoiced;
use ekler_core::enums::Case;
use ekler_core::suffix::Suffix;

use super::by_group;
use crate::base::Base;
use crate::components::{get_components, group_of, high_vowel_of};

/// Relative marker appended after the locative ("evde" -> "evdeki").
const RELATIVE_MARKER: &str = "ki";

/// Case suffix for a stem.
///
/// | Case | Linker (vowel-final stem) | Body |
/// |---|---|---|
/// | Absolute | none | empty |
/// | Accusative | `n` | `ı i u ü` |
/// | Ablative | `n` if compound | `t`/`d` + `an`/`en` |
/// | Locative | `n` if compound | `t`/`d` + `a`/`e` |
/// | Instrumental | `y` | `la`/`le` |
/// | Dative | `n` if compound, else `y` | `a`/`e` |
///
/// `t` is used after an unvoiced consonant, `d` otherwise.
pub fn get_case_suffix<'a>(
    base: impl Into<Base<'a>>,
    case: Case,
    is_compound: bool,
) -> Result<Suffix, AffixError> {
    case_suffix_of(&base.into().into_stem(), case, is_compound)
}

pub(crate) fn case_suffix_of(stem: &str, case: Case, is_compound: bool) -> Result<Suffix, AffixError> {
    let components = get_components(stem)?;
    let vowel_final = components.ends_in_vowel();
    let group = group_of(stem, &components)?;
    let stop = if is_unvoiced(components.letter) { "t" } else { "d" };

    let linker = |when: bool, c: &'static str| if when { c } else { "" };

    let suffix = match case {
        Case::Absolute => Suffix::default(),
        Case::Accusative => {
            let high = high_vowel_of(stem, &components)?;
            Suffix::with_infix(linker(vowel_final, "n"), high.to_string())
        }
        Case::Ablative => Suffix::with_infix(
            linker(vowel_final && is_compound, "n"),
            format!("{stop}{}", by_group(group, "an", "en")),
        ),
        Case::Locative => Suffix::with_infix(
            linker(vowel_final && is_compound, "n"),
            format!("{stop}{}", by_group(group, "a", "e")),
        ),
        Case::Instrumental => {
            Suffix::with_infix(linker(vowel_final, "y"), by_group(group, "la", "le"))
        }
        Case::Dative => {
            let infix = match (vowel_final, is_compound) {
                (false, _) => "",
                (true, true) => "n",
                (true, false) => "y",
            };
            Suffix::with_infix(infix, by_group(group, "a", "e"))
        }
    };

    Ok(suffix)
}

/// Relative suffix: the locative followed by "ki".
///
/// "ev" -> "deki", "araba" -> "daki", compound "evi" -> "ndeki".
pub fn get_relative_suffix<'a>(
    base: impl Into<Base<'a>>,
    is_compound: bool,
) -> Result<Suffix, AffixError> {
    relative_suffix_of(&base.into().into_stem(), is_compound)
}

pub(crate) fn relative_suffix_of(stem: &str, is_compound: bool) -> Result<Suffix, AffixError> {
    let mut suffix = case_suffix_of(stem, Case::Locative, is_compound)?;
    suffix.suffix.push_str(RELATIVE_MARKER);
    Ok(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(stem: &str, case: Case, compound: bool) -> String {
        get_case_suffix(stem, case, compound).unwrap().render()
    }

    #[test]
    fn absolute_is_empty() {
        assert!(get_case_suffix("kitap", Case::Absolute, false).unwrap().is_empty());
        assert!(get_case_suffix("araba", Case::Absolute, true).unwrap().is_empty());
    }

    #[test]
    fn accusative() {
        assert_eq!(render("Kağıt", Case::Accusative, false), "ı");
        assert_eq!(render("göz", Case::Accusative, false), "ü");
        assert_eq!(render("okul", Case::Accusative, false), "u");
        assert_eq!(render("ev", Case::Accusative, false), "i");
        assert_eq!(render("Sesi", Case::Accusative, true), "ni");
    }

    #[test]
    fn ablative_and_locative() {
        assert_eq!(render("kitap", Case::Ablative, false), "tan");
        assert_eq!(render("ev", Case::Ablative, false), "den");
        assert_eq!(render("araba", Case::Ablative, false), "dan");
        assert_eq!(render("Sesi", Case::Ablative, true), "nden");
        assert_eq!(render("kitap", Case::Locative, false), "ta");
        assert_eq!(render("ev", Case::Locative, false), "de");
        assert_eq!(render("kapısı", Case::Locative, true), "nda");
    }

    #[test]
    fn instrumental() {
        assert_eq!(render("kalem", Case::Instrumental, false), "le");
        assert_eq!(render("araba", Case::Instrumental, false), "yla");
        assert_eq!(render("kedi", Case::Instrumental, true), "yle");
    }

    #[test]
    fn dative() {
        assert_eq!(render("Şehir", Case::Dative, false), "e");
        assert_eq!(render("araba", Case::Dative, false), "ya");
        assert_eq!(render("kapısı", Case::Dative, true), "na");
        assert_eq!(render("okul", Case::Dative, true), "a");
    }

    #[test]
    fn dative_linker_is_an_infix() {
        let s = get_case_suffix("kedi", Case::Dative, false).unwrap();
        assert_eq!(s.infix, "y");
        assert_eq!(s.suffix, "e");
    }

    #[test]
    fn every_case_is_handled() {
        for case in Case::ALL {
            assert!(get_case_suffix("masa", case, false).is_ok(), "{case:?}");
            assert!(get_case_suffix("krt", case, false).is_err(), "{case:?}");
        }
    }

    #[test]
    fn case_query_is_pure() {
        for case in Case::ALL {
            assert_eq!(
                get_case_suffix("ağaç", case, false),
                get_case_suffix("ağaç", case, false)
            );
        }
    }

    // -- relative --

    #[test]
    fn relative() {
        assert_eq!(get_relative_suffix("ev", false).unwrap().render(), "deki");
        assert_eq!(get_relative_suffix("araba", false).unwrap().render(), "daki");
        assert_eq!(get_relative_suffix("sepet", false).unwrap().render(), "teki");
        assert_eq!(get_relative_suffix("evi", true).unwrap().render(), "ndeki");
    }
}
