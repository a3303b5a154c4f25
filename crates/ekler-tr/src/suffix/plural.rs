// Plural: -lar / -ler

use ekler_core::AffixError;
use ekler_core::character::lower_tr;
use ekler_core::suffix::Suffix;

use super::by_group;
use crate::base::Base;
use crate::components::{get_components, group_of};
use crate::exceptions;

/// Plural suffix for a stem: "lar" after a front vowel, "ler" after a back
/// vowel. Listed stems take an `n` infix ("o" -> "onlar").
pub fn get_plural_suffix<'a>(base: impl Into<Base<'a>>) -> Result<Suffix, AffixError> {
    plural_suffix_of(&base.into().into_stem())
}

pub(crate) fn plural_suffix_of(stem: &str) -> Result<Suffix, AffixError> {
    let components = get_components(stem)?;
    let body = by_group(group_of(stem, &components)?, "lar", "ler");
    let infix = if exceptions::takes_plural_infix(&lower_tr(stem)) {
        "n"
    } else {
        ""
    };
    Ok(Suffix::with_infix(infix, body))
}
