// Suffix rules, one per grammatical operation.
//
// Each rule extracts the components of the stem and branches on sound
// classes. The public `get_*` functions accept any `Base`; the `*_of`
// variants work on an already resolved stem and are shared with the
// composers.

mod case;
mod compound;
mod equality;
mod plural;
mod possessive;
mod question;

pub use case::{get_case_suffix, get_relative_suffix};
pub use compound::{get_compound_suffix, get_compoundee_suffix, get_compounder_suffix};
pub use equality::get_equality_suffix;
pub use plural::get_plural_suffix;
pub use possessive::get_possessive_suffix;
pub use question::get_question_suffix;

pub(crate) use case::{case_suffix_of, relative_suffix_of};
pub(crate) use compound::compound_suffix_of;
pub(crate) use equality::equality_suffix_of;
pub(crate) use plural::plural_suffix_of;
pub(crate) use possessive::possessive_suffix_of;
pub(crate) use question::question_suffix_of;

use ekler_core::character::VowelGroup;

/// Pick the front or back allomorph.
pub(crate) fn by_group(group: VowelGroup, front: &'static str, back: &'static str) -> &'static str {
    match group {
        VowelGroup::Front => front,
        VowelGroup::Back => back,
    }
}
