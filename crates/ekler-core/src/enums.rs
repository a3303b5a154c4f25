// Grammatical operation enums: Pronoun, Case, Compound

/// Possessor person and number for possessive suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pronoun {
    /// Birinci tekil şahıs: "benim kitabım".
    SingularFirst,
    /// İkinci tekil şahıs: "senin kitabın".
    SingularSecond,
    /// Üçüncü tekil şahıs: "onun kitabı".
    SingularThird,
    /// Birinci çoğul şahıs: "bizim kitabımız".
    PluralFirst,
    /// İkinci çoğul şahıs: "sizin kitabınız".
    PluralSecond,
    /// Üçüncü çoğul şahıs: "onların kitapları".
    PluralThird,
}

impl Pronoun {
    pub const ALL: [Pronoun; 6] = [
        Pronoun::SingularFirst,
        Pronoun::SingularSecond,
        Pronoun::SingularThird,
        Pronoun::PluralFirst,
        Pronoun::PluralSecond,
        Pronoun::PluralThird,
    ];
}

/// Grammatical case of a noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Case {
    /// Yalın hâl, no suffix.
    Absolute,
    /// Belirtme hâli, -i.
    Accusative,
    /// Ayrılma hâli, -den.
    Ablative,
    /// Bulunma hâli, -de.
    Locative,
    /// Vasıta hâli, -le.
    Instrumental,
    /// Yönelme hâli, -e.
    Dative,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Absolute,
        Case::Accusative,
        Case::Ablative,
        Case::Locative,
        Case::Instrumental,
        Case::Dative,
    ];
}

/// Role of a noun inside a noun-noun compound (izafet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compound {
    /// Tamlayan, the possessor: "kapının".
    Compounder,
    /// Tamlanan, the possessed: "kolu".
    Compoundee,
}

impl Compound {
    pub const ALL: [Compound; 2] = [Compound::Compounder, Compound::Compoundee];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_are_distinct() {
        for (i, a) in Pronoun::ALL.iter().enumerate() {
            for b in &Pronoun::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        for (i, a) in Case::ALL.iter().enumerate() {
            for b in &Case::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_ne!(Compound::ALL[0], Compound::ALL[1]);
    }

    #[test]
    fn all_lists_are_exhaustive() {
        // Adding a variant breaks these matches until ALL is updated too.
        let n = Pronoun::ALL
            .iter()
            .map(|p| match p {
                Pronoun::SingularFirst
                | Pronoun::SingularSecond
                | Pronoun::SingularThird
                | Pronoun::PluralFirst
                | Pronoun::PluralSecond
                | Pronoun::PluralThird => 1,
            })
            .sum::<usize>();
        assert_eq!(n, 6);

        let n = Case::ALL
            .iter()
            .map(|c| match c {
                Case::Absolute
                | Case::Accusative
                | Case::Ablative
                | Case::Locative
                | Case::Instrumental
                | Case::Dative => 1,
            })
            .sum::<usize>();
        assert_eq!(n, 6);
    }
}
