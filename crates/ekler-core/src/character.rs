// Sound classification tables and Turkish case folding
//
// Every table is declared once as a lowercase base list and expanded with
// the Turkish uppercase forms at first use. Turkish pairs dotted i with İ
// and dotless ı with I, so the generic Unicode mapping cannot be used for
// those two letters.

use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Base lists (lowercase)
// ---------------------------------------------------------------------------

const UNVOICED_STOPPING_CONSONANTS: &[char] = &['p', 'ç', 't', 'k'];
const UNVOICED_CONTINUOUS_CONSONANTS: &[char] = &['f', 's', 'ş', 'h'];
/// Same index order as `UNVOICED_STOPPING_CONSONANTS`.
const VOICED_STOPPING_CONSONANTS: &[char] = &['b', 'c', 'd', 'ğ'];
const UNVOICED_CONSONANTS: &[char] = &['f', 's', 'ş', 'h', 'p', 'ç', 't', 'k'];
const ROUNDED_VOWELS: &[char] = &['o', 'u', 'ö', 'ü'];
const UNROUNDED_VOWELS: &[char] = &['a', 'ı', 'e', 'i'];
const FRONT_VOWELS: &[char] = &['a', 'ı', 'o', 'u'];
const BACK_VOWELS: &[char] = &['e', 'i', 'ö', 'ü'];
const ACUTE_VOWELS: &[char] = &['ı', 'i', 'u', 'ü'];
const WIDE_VOWELS: &[char] = &['a', 'e', 'o', 'ö'];
const VOWELS: &[char] = &['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü'];

// ---------------------------------------------------------------------------
// Turkish case folding
// ---------------------------------------------------------------------------

/// Lowercase a character using Turkish rules: `İ` -> `i`, `I` -> `ı`.
///
/// Other characters use the simple one-to-one Unicode mapping.
pub fn to_lower_tr(c: char) -> char {
    match c {
        'İ' => 'i',
        'I' => 'ı',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Uppercase a character using Turkish rules: `i` -> `İ`, `ı` -> `I`.
pub fn to_upper_tr(c: char) -> char {
    match c {
        'i' => 'İ',
        'ı' => 'I',
        _ => c.to_uppercase().next().unwrap_or(c),
    }
}

/// Lowercase a whole string with [`to_lower_tr`].
pub fn lower_tr(s: &str) -> String {
    s.chars().map(to_lower_tr).collect()
}

/// Check whether a character is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c != to_lower_tr(c)
}

/// Return `list` followed by the Turkish uppercase form of every entry.
///
/// `['a', 'ı', 'i']` becomes `['a', 'ı', 'i', 'A', 'I', 'İ']`.
pub fn duplicate_to_uppercase(list: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(list.len() * 2);
    out.extend_from_slice(list);
    out.extend(list.iter().map(|&c| to_upper_tr(c)));
    out
}

// ---------------------------------------------------------------------------
// Sound tables
// ---------------------------------------------------------------------------

/// An immutable set of characters holding both letter cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundSet(Vec<char>);

impl SoundSet {
    fn from_base(base: &[char]) -> Self {
        Self(duplicate_to_uppercase(base))
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Position of `c` in the expanded table.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.0.iter().position(|&x| x == c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }
}

/// All sound class tables.
///
/// Note that "front" and "back" follow this library's own labelling:
/// front is `a ı o u`, back is `e i ö ü`.
#[derive(Debug)]
pub struct Sounds {
    pub unvoiced_stopping_consonants: SoundSet,
    pub unvoiced_continuous_consonants: SoundSet,
    pub voiced_stopping_consonants: SoundSet,
    pub unvoiced_consonants: SoundSet,
    pub rounded_vowels: SoundSet,
    pub unrounded_vowels: SoundSet,
    pub front_vowels: SoundSet,
    pub back_vowels: SoundSet,
    pub acute_vowels: SoundSet,
    pub wide_vowels: SoundSet,
    pub vowels: SoundSet,
}

impl Sounds {
    fn new() -> Self {
        Self {
            unvoiced_stopping_consonants: SoundSet::from_base(UNVOICED_STOPPING_CONSONANTS),
            unvoiced_continuous_consonants: SoundSet::from_base(UNVOICED_CONTINUOUS_CONSONANTS),
            voiced_stopping_consonants: SoundSet::from_base(VOICED_STOPPING_CONSONANTS),
            unvoiced_consonants: SoundSet::from_base(UNVOICED_CONSONANTS),
            rounded_vowels: SoundSet::from_base(ROUNDED_VOWELS),
            unrounded_vowels: SoundSet::from_base(UNROUNDED_VOWELS),
            front_vowels: SoundSet::from_base(FRONT_VOWELS),
            back_vowels: SoundSet::from_base(BACK_VOWELS),
            acute_vowels: SoundSet::from_base(ACUTE_VOWELS),
            wide_vowels: SoundSet::from_base(WIDE_VOWELS),
            vowels: SoundSet::from_base(VOWELS),
        }
    }
}

/// Process-wide sound tables, built on first access and never mutated.
pub static SOUNDS: LazyLock<Sounds> = LazyLock::new(Sounds::new);

// ---------------------------------------------------------------------------
// Classification helpers
// ---------------------------------------------------------------------------

/// Vowel group used by every harmony decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelGroup {
    /// `a ı o u`
    Front,
    /// `e i ö ü`
    Back,
}

pub fn is_vowel(c: char) -> bool {
    SOUNDS.vowels.contains(c)
}

/// Classify a vowel as front or back. `None` for anything else.
pub fn vowel_group(c: char) -> Option<VowelGroup> {
    if SOUNDS.front_vowels.contains(c) {
        Some(VowelGroup::Front)
    } else if SOUNDS.back_vowels.contains(c) {
        Some(VowelGroup::Back)
    } else {
        None
    }
}

pub fn is_rounded(c: char) -> bool {
    SOUNDS.rounded_vowels.contains(c)
}

pub fn is_acute(c: char) -> bool {
    SOUNDS.acute_vowels.contains(c)
}

pub fn is_unvoiced(c: char) -> bool {
    SOUNDS.unvoiced_consonants.contains(c)
}

pub fn is_unvoiced_stopping(c: char) -> bool {
    SOUNDS.unvoiced_stopping_consonants.contains(c)
}

/// Voiced counterpart of an unvoiced stop, keeping the letter case.
///
/// `p ç t k` map to `b c d ğ`; anything else yields `None`.
pub fn voiced_counterpart(c: char) -> Option<char> {
    let i = SOUNDS.unvoiced_stopping_consonants.index_of(c)?;
    SOUNDS.voiced_stopping_consonants.as_slice().get(i).copied()
}

/// The high vowel in harmony with `c`: one of `ı i u ü`.
///
/// Front unrounded gives `ı`, front rounded `u`, back unrounded `i`,
/// back rounded `ü`. `None` when `c` is not a vowel.
pub fn harmonic_high_vowel(c: char) -> Option<char> {
    let group = vowel_group(c)?;
    let v = match (group, is_rounded(c)) {
        (VowelGroup::Front, false) => 'ı',
        (VowelGroup::Front, true) => 'u',
        (VowelGroup::Back, false) => 'i',
        (VowelGroup::Back, true) => 'ü',
    };
    Some(v)
}
