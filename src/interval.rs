use std::cmp::Ordering;

use serde::{Serialize, Serializer};

use crate::prelude::*;
use crate::{DatePart, InstantDate};

/// Represents an interval between two instants.
/// At least one edge is definite, and definite edges are in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct IntervalDate {
    start: InstantDate,
    end:   InstantDate,
}

impl IntervalDate {
    /// Unvalidated pair; `IntervalDateBuilder` is the checked way in.
    pub(crate) const fn from_edges(start: InstantDate, end: InstantDate) -> Self {
        Self { start, end }
    }

    pub const fn start(&self) -> InstantDate {
        self.start
    }

    pub const fn end(&self) -> InstantDate {
        self.end
    }

    /// Returns both edges as a tuple
    pub const fn edges(&self) -> (InstantDate, InstantDate) {
        (self.start, self.end)
    }

    pub(crate) const fn swapped(self) -> Self {
        Self {
            start: self.end,
            end:   self.start,
        }
    }

    /// True when the definite edges do not run backwards.
    /// An interval with an open or unknown edge is always in order.
    pub fn is_chronological(&self) -> bool {
        match (self.start.part(), self.end.part()) {
            (Some(start), Some(end)) => compare_parts(&start, &end) != Ordering::Greater,
            _ => true,
        }
    }

    /// At least one edge is definite and every definite edge is a full date
    pub fn is_complete(&self) -> bool {
        let edges = [self.start, self.end];
        edges.iter().any(InstantDate::is_definite)
            && edges
                .iter()
                .filter(|edge| edge.is_definite())
                .all(InstantDate::is_complete)
    }
}

/// Chronological comparison of two calendar values.
///
/// When either side has a coarse precision, both years are cut to the
/// coarser one and only years are compared. Otherwise month and day break
/// ties, and a missing month or day compares equal to anything.
fn compare_parts(start: &DatePart, end: &DatePart) -> Ordering {
    let duration = start.precision().duration().max(end.precision().duration());
    if duration > 1 {
        return ((start.year() / duration) * duration).cmp(&((end.year() / duration) * duration));
    }
    start
        .year()
        .cmp(&end.year())
        .then_with(|| compare_optional(start.month(), end.month()))
        .then_with(|| compare_optional(start.day(), end.day()))
}

fn compare_optional(a: Option<u8>, b: Option<u8>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

impl Serialize for IntervalDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
