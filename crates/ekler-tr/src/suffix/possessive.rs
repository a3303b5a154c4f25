// Possessive: -(ı)m, -(ı)n, -(s)ı, -(ı)mız, -(ı)nız, -ları

use ekler_core::AffixError;
use ekler_core::enums::Pronoun;
use ekler_core::suffix::Suffix;

use super::by_group;
use crate::base::Base;
use crate::components::{get_components, group_of, high_vowel_of};

/// Possessive suffix for a stem and possessor.
///
/// The harmonic high vowel `V` (`ı i u ü`) follows the stem's last vowel.
/// Consonant-final stems take `V` as a buffer before the personal ending;
/// vowel-final stems do not, except that the third person singular then
/// takes an `s` infix: "Sebep" -> "i", "Ayşe" -> "si". The third person
/// plural is "ları" or "leri" and never takes a buffer.
pub fn get_possessive_suffix<'a>(
    base: impl Into<Base<'a>>,
    pronoun: Pronoun,
) -> Result<Suffix, AffixError> {
    possessive_suffix_of(&base.into().into_stem(), pronoun)
}

pub(crate) fn possessive_suffix_of(stem: &str, pronoun: Pronoun) -> Result<Suffix, AffixError> {
    let components = get_components(stem)?;
    let high = high_vowel_of(stem, &components)?;
    let vowel_final = components.ends_in_vowel();

    let mut infix = String::new();
    let mut body = String::with_capacity(8);

    // buffer vowel
    let buffered = match pronoun {
        Pronoun::PluralThird => false,
        Pronoun::SingularThird => true,
        _ => !vowel_final,
    };
    if buffered {
        body.push(high);
    }
    if vowel_final && pronoun == Pronoun::SingularThird {
        infix.push('s');
    }

    match pronoun {
        Pronoun::SingularFirst => body.push('m'),
        Pronoun::SingularSecond => body.push('n'),
        Pronoun::SingularThird => {}
        Pronoun::PluralFirst => {
            body.push('m');
            body.push(high);
            body.push('z');
        }
        Pronoun::PluralSecond => {
            body.push('n');
            body.push(high);
            body.push('z');
        }
        // The buffer vowel would share the stem vowel's group anyway.
        Pronoun::PluralThird => {
            body.push_str(by_group(group_of(stem, &components)?, "ları", "leri"));
        }
    }

    Ok(Suffix {
        prefix: String::new(),
        infix,
        suffix: body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(stem: &str, pronoun: Pronoun) -> String {
        get_possessive_suffix(stem, pronoun).unwrap().render()
    }

    #[test]
    fn possessive_consonant_final() {
        assert_eq!(render("Çocuk", Pronoun::SingularFirst), "um");
        assert_eq!(render("Bebek", Pronoun::SingularSecond), "in");
        assert_eq!(render("Sebep", Pronoun::SingularThird), "i");
        assert_eq!(render("Akıl", Pronoun::PluralFirst), "ımız");
        assert_eq!(render("Merak", Pronoun::PluralSecond), "ınız");
        assert_eq!(render("Ağaç", Pronoun::PluralThird), "ları");
    }

    #[test]
    fn possessive_vowel_final() {
        assert_eq!(render("araba", Pronoun::SingularFirst), "m");
        assert_eq!(render("araba", Pronoun::SingularSecond), "n");
        assert_eq!(render("araba", Pronoun::SingularThird), "sı");
        assert_eq!(render("araba", Pronoun::PluralFirst), "mız");
        assert_eq!(render("araba", Pronoun::PluralSecond), "nız");
        assert_eq!(render("araba", Pronoun::PluralThird), "ları");
        assert_eq!(render("köprü", Pronoun::PluralFirst), "müz");
        assert_eq!(render("kuzu", Pronoun::PluralSecond), "nuz");
        assert_eq!(render("kedi", Pronoun::PluralThird), "leri");
    }

    #[test]
    fn possessive_third_singular_infix() {
        let s = get_possessive_suffix("Ayşe", Pronoun::SingularThird).unwrap();
        assert_eq!(s.infix, "s");
        assert_eq!(s.suffix, "i");
    }

    #[test]
    fn possessive_rounded_harmony() {
        assert_eq!(render("göz", Pronoun::PluralFirst), "ümüz");
        assert_eq!(render("okul", Pronoun::PluralSecond), "unuz");
        assert_eq!(render("göz", Pronoun::PluralThird), "leri");
        assert_eq!(render("okul", Pronoun::PluralThird), "ları");
    }

    #[test]
    fn possessive_covers_every_pronoun() {
        for pronoun in Pronoun::ALL {
            let s = get_possessive_suffix("ev", pronoun).unwrap();
            assert!(!s.is_empty(), "{pronoun:?}");
        }
    }
}
