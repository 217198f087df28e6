use crate::prelude::*;

/// Side of the epoch an era abbreviation points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Era {
    #[display(fmt = "BC")]
    BeforeChrist,
    #[display(fmt = "AD")]
    AnnoDomini,
}

impl Era {
    /// Applies the era to a positive year count
    pub const fn signed_year(self, year: i64) -> i64 {
        match self {
            Self::BeforeChrist => -year,
            Self::AnnoDomini => year,
        }
    }
}

/// Era abbreviations across the supported languages, matched case-insensitively.
pub const ERA_ABBREVIATIONS: &[(&str, Era)] = &[
    // en
    ("BC", Era::BeforeChrist),
    ("B.C.", Era::BeforeChrist),
    ("BCE", Era::BeforeChrist),
    ("B.C.E.", Era::BeforeChrist),
    ("AD", Era::AnnoDomini),
    ("A.D.", Era::AnnoDomini),
    ("CE", Era::AnnoDomini),
    ("C.E.", Era::AnnoDomini),
    // de, nl
    ("v. Chr.", Era::BeforeChrist),
    ("v.Chr.", Era::BeforeChrist),
    ("n. Chr.", Era::AnnoDomini),
    ("n.Chr.", Era::AnnoDomini),
    ("vC", Era::BeforeChrist),
    ("nC", Era::AnnoDomini),
    // fr
    ("av. J.-C.", Era::BeforeChrist),
    ("av. J.C.", Era::BeforeChrist),
    ("ap. J.-C.", Era::AnnoDomini),
    ("ap. J.C.", Era::AnnoDomini),
    // es, it, pt
    ("a.C.", Era::BeforeChrist),
    ("a. C.", Era::BeforeChrist),
    ("d.C.", Era::AnnoDomini),
    ("d. C.", Era::AnnoDomini),
    ("aC", Era::BeforeChrist),
    ("dC", Era::AnnoDomini),
    // da, sv
    ("f.Kr.", Era::BeforeChrist),
    ("f. Kr.", Era::BeforeChrist),
    ("e.Kr.", Era::AnnoDomini),
    ("e. Kr.", Era::AnnoDomini),
    // fi
    ("eKr.", Era::BeforeChrist),
    ("jKr.", Era::AnnoDomini),
    // et
    ("eKr", Era::BeforeChrist),
    ("pKr", Era::AnnoDomini),
    // lv
    ("p.m.ē.", Era::BeforeChrist),
    ("m.ē.", Era::AnnoDomini),
    // lt, hr
    ("pr. Kr.", Era::BeforeChrist),
    ("po Kr.", Era::AnnoDomini),
    ("po. Kr.", Era::AnnoDomini),
    // pl
    ("p.n.e.", Era::BeforeChrist),
    ("n.e.", Era::AnnoDomini),
    // cs, sk
    ("př. n. l.", Era::BeforeChrist),
    ("pred n. l.", Era::BeforeChrist),
    ("n. l.", Era::AnnoDomini),
    // sl
    ("pr. n. št.", Era::BeforeChrist),
    ("n. št.", Era::AnnoDomini),
    // hu
    ("i. e.", Era::BeforeChrist),
    ("i. sz.", Era::AnnoDomini),
    // ro
    ("î.Hr.", Era::BeforeChrist),
    ("d.Hr.", Era::AnnoDomini),
    // bg
    ("пр.н.е.", Era::BeforeChrist),
    ("пр. Хр.", Era::BeforeChrist),
    ("сл.н.е.", Era::AnnoDomini),
    ("сл. Хр.", Era::AnnoDomini),
    // el
    ("π.Χ.", Era::BeforeChrist),
    ("μ.Χ.", Era::AnnoDomini),
    // ga
    ("RC", Era::BeforeChrist),
    // mt
    ("QK", Era::BeforeChrist),
    ("WK", Era::AnnoDomini),
];

/// Era of an abbreviation, case-insensitive.
pub fn lookup(abbreviation: &str) -> Option<Era> {
    let lower = abbreviation.to_lowercase();
    ERA_ABBREVIATIONS
        .iter()
        .find(|(candidate, _)| candidate.to_lowercase() == lower)
        .map(|&(_, era)| era)
}
