// Input accepted in place of a stem: text or an integer.

use std::borrow::Cow;

use crate::number;

/// A noun stem, or a cardinal number standing in for one.
///
/// Numbers are rendered with [`number::to_words`] before any rule runs,
/// so `make_plural(5)` behaves exactly like `make_plural("beş")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base<'a> {
    Word(Cow<'a, str>),
    Number(i64),
}

impl<'a> Base<'a> {
    /// Resolve to the stem text the rules operate on.
    pub fn into_stem(self) -> Cow<'a, str> {
        match self {
            Base::Word(w) => w,
            Base::Number(n) => Cow::Owned(number::to_words(n)),
        }
    }
}

impl<'a> From<&'a str> for Base<'a> {
    fn from(s: &'a str) -> Self {
        Base::Word(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Base<'a> {
    fn from(s: &'a String) -> Self {
        Base::Word(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Base<'_> {
    fn from(s: String) -> Self {
        Base::Word(Cow::Owned(s))
    }
}

impl<'a> From<Cow<'a, str>> for Base<'a> {
    fn from(s: Cow<'a, str>) -> Self {
        Base::Word(s)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Base<'_> {
                fn from(n: $t) -> Self {
                    Base::Number(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
