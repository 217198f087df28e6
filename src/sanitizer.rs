/// Normalizes the raw text before any grammar sees it.
///
/// Non-breaking spaces become spaces and en dashes become hyphens, then
/// whitespace runs collapse to one space and the ends are trimmed.
pub fn sanitize(raw: &str) -> String {
    raw.replace('\u{a0}', " ")
        .replace('\u{2013}', "-")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
