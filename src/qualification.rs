use crate::consts::{APPROXIMATE_MARK, UNCERTAIN_APPROXIMATE_MARK, UNCERTAIN_MARK};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Uncertainty and approximation attached to an instant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DateQualification {
    #[default]
    #[display(fmt = "none")]
    None,
    #[display(fmt = "uncertain")]
    Uncertain,
    #[display(fmt = "approximate")]
    Approximate,
    #[display(fmt = "uncertain-and-approximate")]
    UncertainAndApproximate,
}

impl DateQualification {
    pub const fn from_flags(uncertain: bool, approximate: bool) -> Self {
        match (uncertain, approximate) {
            (false, false) => Self::None,
            (true, false) => Self::Uncertain,
            (false, true) => Self::Approximate,
            (true, true) => Self::UncertainAndApproximate,
        }
    }

    pub const fn is_uncertain(self) -> bool {
        matches!(self, Self::Uncertain | Self::UncertainAndApproximate)
    }

    pub const fn is_approximate(self) -> bool {
        matches!(self, Self::Approximate | Self::UncertainAndApproximate)
    }

    /// EDTF suffix character, `None` for an unqualified date
    pub const fn suffix(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Uncertain => Some(UNCERTAIN_MARK),
            Self::Approximate => Some(APPROXIMATE_MARK),
            Self::UncertainAndApproximate => Some(UNCERTAIN_APPROXIMATE_MARK),
        }
    }

    pub const fn from_suffix(mark: char) -> Option<Self> {
        match mark {
            UNCERTAIN_MARK => Some(Self::Uncertain),
            APPROXIMATE_MARK => Some(Self::Approximate),
            UNCERTAIN_APPROXIMATE_MARK => Some(Self::UncertainAndApproximate),
            _ => None,
        }
    }

    /// Uncertain when the text opens or closes with a question mark.
    pub fn from_question_marks(text: &str) -> Self {
        Self::from_flags(
            text.starts_with(UNCERTAIN_MARK) || text.ends_with(UNCERTAIN_MARK),
            false,
        )
    }
}

/// Picks the qualification an extractor reports.
///
/// A requested qualification other than `None` always wins over what the
/// input's own markers say.
pub const fn resolve(
    requested: Option<DateQualification>,
    computed: DateQualification,
) -> DateQualification {
    match requested {
        Some(DateQualification::None) | None => computed,
        Some(requested) => requested,
    }
}
