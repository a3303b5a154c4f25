// Turkish cardinal numbers as spoken words
//
// Numeric input is turned into its spoken form before any suffix rule
// runs. Only the last word matters phonologically, so the rules see
// "beş" for 25 just as they would for 5.

const ONES: [&str; 10] = [
    "", "bir", "iki", "üç", "dört", "beş", "altı", "yedi", "sekiz", "dokuz",
];

const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "kırk", "elli", "altmış", "yetmiş", "seksen", "doksan",
];

/// Scale words for each group of three digits, lowest first.
const SCALES: [&str; 7] = ["", "bin", "milyon", "milyar", "trilyon", "katrilyon", "kentilyon"];

const ZERO: &str = "sıfır";
const MINUS: &str = "eksi";

/// Spoken words for a group of three digits (1..=999), pushed onto `out`.
fn push_group(out: &mut Vec<&'static str>, group: u64) {
    let hundreds = (group / 100) as usize;
    let tens = ((group / 10) % 10) as usize;
    let ones = (group % 10) as usize;

    if hundreds > 1 {
        out.push(ONES[hundreds]);
    }
    if hundreds > 0 {
        out.push("yüz");
    }
    if tens > 0 {
        out.push(TENS[tens]);
    }
    if ones > 0 {
        out.push(ONES[ones]);
    }
}

/// Render an integer as Turkish cardinal words.
///
/// ```
/// use ekler_tr::number::to_words;
/// assert_eq!(to_words(0), "sıfır");
/// assert_eq!(to_words(1250), "bin iki yüz elli");
/// assert_eq!(to_words(-3), "eksi üç");
/// ```
pub fn to_words(value: i64) -> String {
    if value == 0 {
        return ZERO.to_string();
    }

    let mut magnitude = value.unsigned_abs();
    let mut groups = Vec::new();
    while magnitude > 0 {
        groups.push(magnitude % 1000);
        magnitude /= 1000;
    }

    let mut words: Vec<&'static str> = Vec::new();
    if value < 0 {
        words.push(MINUS);
    }
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // "bin", never "bir bin"
        if scale == 1 && group == 1 {
            words.push(SCALES[1]);
            continue;
        }
        push_group(&mut words, group);
        if scale > 0 {
            words.push(SCALES[scale]);
        }
    }

    words.join(" ")
}
