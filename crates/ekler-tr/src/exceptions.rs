// Curated word lists that override the default rule outcomes.
//
// Entries are whole lowercase words. Callers fold the stem with
// `lower_tr` before looking it up.

use std::sync::LazyLock;

use hashbrown::HashSet;

/// Stems ending in an unvoiced stop that keep it before a vowel suffix.
const UNVOICED: &[&str] = &[
    "hukuk", "bilet", "tabiat", "devlet", "bisiklet", "millet", "ahret", "ahiret", "merak",
];

/// Single-syllable stems that soften anyway ("uç" -> "ucu").
///
/// "dört" is listed so that numeric input yields "dördü".
const UNVOICED_SINGLE_SYLLABLE: &[&str] = &["uç", "dört"];

/// Stems that take an `n` infix before the plural suffix ("o" -> "onlar").
const PLURAL: &[&str] = &["o"];

/// Stems that lose their last vowel before a vowel-initial suffix.
const VOWEL_DROP: &[&str] = &[
    "ağız", "akıl", "alın", "bağır", "beyin", "boyun", "burun", "çevir", "devir", "emir",
    "fikir", "göğüs", "gönül", "hapis", "isim", "karın", "kayıp", "nehir", "oğul", "ömür",
    "sabır", "seyir", "şehir", "şekil", "zulüm",
];

fn build(words: &[&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

static UNVOICED_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| build(UNVOICED));
static UNVOICED_SINGLE_SYLLABLE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| build(UNVOICED_SINGLE_SYLLABLE));
static PLURAL_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| build(PLURAL));
static VOWEL_DROP_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| build(VOWEL_DROP));

/// The stem resists consonant softening.
pub fn resists_softening(lower: &str) -> bool {
    UNVOICED_SET.contains(lower)
}

/// The single-syllable stem softens despite having one syllable.
pub fn softens_single_syllable(lower: &str) -> bool {
    UNVOICED_SINGLE_SYLLABLE_SET.contains(lower)
}

pub fn takes_plural_infix(lower: &str) -> bool {
    PLURAL_SET.contains(lower)
}

pub fn drops_vowel(lower: &str) -> bool {
    VOWEL_DROP_SET.contains(lower)
}

/// The closed vowel-drop list, in its declared order.
pub fn vowel_drop_words() -> &'static [&'static str] {
    VOWEL_DROP
}
