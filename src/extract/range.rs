use tracing::debug;

use crate::{BuildPolicy, InstantDate, IntervalDate, IntervalDateBuilder};

/// How a range grammar splits its text into two edges.
#[derive(Debug, Clone, Copy)]
pub(super) struct RangeSeparator {
    pub token:       &'static str,
    /// Trim whitespace around each edge after splitting
    pub trim:        bool,
    /// An edge containing any of these is not a candidate
    pub forbidden:   &'static [char],
    /// Edge texts meaning "no bound", turned into an open edge
    pub unspecified: &'static [&'static str],
}

impl RangeSeparator {
    pub const fn new(token: &'static str) -> Self {
        Self {
            token,
            trim: false,
            forbidden: &[],
            unspecified: &[],
        }
    }

    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    pub const fn forbid(mut self, forbidden: &'static [char]) -> Self {
        self.forbidden = forbidden;
        self
    }

    pub const fn unspecified(mut self, tokens: &'static [&'static str]) -> Self {
        self.unspecified = tokens;
        self
    }

    /// Every `(start, end)` split of `text` at an occurrence of the token
    fn splits<'a>(&self, text: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
        let token = self.token;
        let trim = self.trim;
        text.match_indices(token).map(move |(index, _)| {
            let (start, end) = (&text[..index], &text[index + token.len()..]);
            if trim { (start.trim(), end.trim()) } else { (start, end) }
        })
    }

    fn admits(&self, edge: &str) -> bool {
        !edge.contains(self.forbidden)
    }
}

/// Splits `text` on each separator in turn and hands both halves to `edge`.
///
/// The first split whose edges both parse and join into a valid interval
/// wins; a failed split moves on to the next occurrence or separator.
pub(super) fn extract_range<F>(
    text: &str,
    separators: &[RangeSeparator],
    policy: &BuildPolicy,
    mut edge: F,
) -> Option<IntervalDate>
where
    F: FnMut(&str) -> Option<InstantDate>,
{
    for separator in separators {
        for (start, end) in separator.splits(text) {
            if !separator.admits(start) || !separator.admits(end) {
                continue;
            }
            let mut resolve = |value: &str| {
                if separator.unspecified.contains(&value) {
                    Some(InstantDate::open())
                } else {
                    edge(value)
                }
            };
            let (Some(start), Some(end)) = (resolve(start), resolve(end)) else {
                continue;
            };
            match IntervalDateBuilder::new(start, end).build(policy) {
                Ok(interval) => return Some(interval),
                Err(error) => {
                    debug!(text, separator = separator.token, %error, "range edges rejected");
                }
            }
        }
    }
    None
}
