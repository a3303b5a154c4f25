// Question particle: mı / mi / mu / mü, written as a separate word

use ekler_core::AffixError;
use ekler_core::suffix::Suffix;

use crate::base::Base;
use crate::components::{get_components, high_vowel_of};

/// Question particle for a stem. The leading space is carried in
/// `prefix` since the particle is a detached token.
pub fn get_question_suffix<'a>(base: impl Into<Base<'a>>) -> Result<Suffix, AffixError> {
    question_suffix_of(&base.into().into_stem())
}

pub(crate) fn question_suffix_of(stem: &str) -> Result<Suffix, AffixError> {
    let components = get_components(stem)?;
    let high = high_vowel_of(stem, &components)?;
    Ok(Suffix {
        prefix: " ".to_string(),
        infix: String::new(),
        suffix: format!("m{high}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_particles() {
        assert_eq!(get_question_suffix("araba").unwrap().render(), " mı");
        assert_eq!(get_question_suffix("okul").unwrap().render(), " mu");
        assert_eq!(get_question_suffix("ev").unwrap().render(), " mi");
        assert_eq!(get_question_suffix("göz").unwrap().render(), " mü");
    }

    #[test]
    fn question_particle_is_detached() {
        let s = get_question_suffix("kitap").unwrap();
        assert_eq!(s.prefix, " ");
        assert_eq!(s.suffix, "mı");
    }
}
