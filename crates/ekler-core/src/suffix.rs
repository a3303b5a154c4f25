// Structured affix value returned by every suffix rule

use std::fmt;

/// Affix material to attach after a stem.
///
/// `prefix` holds detached material that precedes the affix (the space
/// before a question particle). `infix` holds a linking consonant such as
/// the buffer `n`, `y` or `s`. `suffix` is the suffix body itself.
/// Rendering concatenates the three in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Suffix {
    pub prefix: String,
    pub infix: String,
    pub suffix: String,
}

impl Suffix {
    /// A suffix body with no prefix or infix.
    pub fn body(suffix: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            infix: String::new(),
            suffix: suffix.into(),
        }
    }

    /// A suffix body preceded by a linking consonant.
    pub fn with_infix(infix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            infix: infix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty() && self.infix.is_empty() && self.suffix.is_empty()
    }

    /// First character of the rendered affix, if any.
    pub fn first_char(&self) -> Option<char> {
        self.prefix
            .chars()
            .chain(self.infix.chars())
            .chain(self.suffix.chars())
            .next()
    }

    /// Render as a single string: prefix, infix, then body.
    pub fn render(&self) -> String {
        let mut out =
            String::with_capacity(self.prefix.len() + self.infix.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&self.infix);
        out.push_str(&self.suffix);
        out
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.infix, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_order() {
        let s = Suffix {
            prefix: " ".to_string(),
            infix: "n".to_string(),
            suffix: "ın".to_string(),
        };
        assert_eq!(s.render(), " nın");
        assert_eq!(s.to_string(), " nın");
    }

    #[test]
    fn first_char_skips_empty_parts() {
        assert_eq!(Suffix::with_infix("y", "la").first_char(), Some('y'));
        assert_eq!(Suffix::body("ı").first_char(), Some('ı'));
        assert_eq!(Suffix::default().first_char(), None);
    }

    #[test]
    fn empty_suffix() {
        assert!(Suffix::default().is_empty());
        assert!(Suffix::body("").is_empty());
        assert!(!Suffix::with_infix("n", "").is_empty());
    }
}
