//! Cleaning operations that strip editorial noise around a date before the
//! grammars are tried again.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::extract::pattern;
use crate::prelude::*;

static LEADING_PARENTHESES: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?:\s*\([^)]*\))+\s*(?P<rest>.*)$"));
static SQUARE_BRACKETS_CIRCA: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)\[\s*(?:circa|ca|c)(?:\.\s*|\s+)(?P<inner>[^\]]*)\]"));
static SQUARE_BRACKETS: LazyLock<Regex> = LazyLock::new(|| pattern(r"\[(?P<inner>[^\]]*)\]"));
static LEADING_CIRCA: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^(?:circa|ca|c)(?:\.\s*|\s+)(?P<rest>.+)$"));
static TRAILING_CLOSING_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?P<rest>[^\[]*?)\s*\]$"));
static TRAILING_DOT: LazyLock<Regex> = LazyLock::new(|| pattern(r"^(?P<rest>.*)\.$"));
static TRAILING_SQUARE_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"^(?P<rest>.*?)\s*\[.*\]$"));
static PARENTHESES_CIRCA: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)^\(\s*(?:circa|ca|c)(?:\.\s*|\s+)(?P<inner>[^)]*)\)$"));
static PARENTHESES: LazyLock<Regex> = LazyLock::new(|| pattern(r"^\((?P<inner>[^)]*)\)$"));

/// A single text rewrite tried by a cleaning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CleanOperation {
    /// `Date: 1989` becomes `1989`
    #[display(fmt = "STARTING_TEXT_UNTIL_FIRST_COLON")]
    StartingTextUntilFirstColon,
    #[display(fmt = "STARTING_PARENTHESES")]
    StartingParentheses,
    #[display(fmt = "ENDING_PARENTHESES")]
    EndingParentheses,
    /// `[ca. 1920]` becomes `1920`
    #[display(fmt = "CAPTURE_VALUE_IN_SQUARE_BRACKETS_WITH_CIRCA")]
    CaptureValueInSquareBracketsWithCirca,
    #[display(fmt = "CAPTURE_VALUE_IN_SQUARE_BRACKETS")]
    CaptureValueInSquareBrackets,
    #[display(fmt = "STARTING_CIRCA")]
    StartingCirca,
    #[display(fmt = "ENDING_CLOSING_SQUARE_BRACKET")]
    EndingClosingSquareBracket,
    #[display(fmt = "ENDING_DOT")]
    EndingDot,
    #[display(fmt = "ENDING_SQUARE_BRACKETS")]
    EndingSquareBrackets,
    #[display(fmt = "CAPTURE_VALUE_IN_PARENTHESES_WITH_CIRCA")]
    CaptureValueInParenthesesWithCirca,
    #[display(fmt = "CAPTURE_VALUE_IN_PARENTHESES")]
    CaptureValueInParentheses,
}

/// Operations of the first pass, in order
pub const FIRST_PASS: [CleanOperation; 8] = [
    CleanOperation::StartingTextUntilFirstColon,
    CleanOperation::StartingParentheses,
    CleanOperation::EndingParentheses,
    CleanOperation::CaptureValueInSquareBracketsWithCirca,
    CleanOperation::CaptureValueInSquareBrackets,
    CleanOperation::StartingCirca,
    CleanOperation::EndingClosingSquareBracket,
    CleanOperation::EndingDot,
];

/// Operations of the second pass, in order
pub const SECOND_PASS: [CleanOperation; 3] = [
    CleanOperation::EndingSquareBrackets,
    CleanOperation::CaptureValueInParenthesesWithCirca,
    CleanOperation::CaptureValueInParentheses,
];

/// Operations tried once for generic properties
pub const GENERIC_PASS: [CleanOperation; 4] = [
    CleanOperation::CaptureValueInSquareBracketsWithCirca,
    CleanOperation::CaptureValueInSquareBrackets,
    CleanOperation::StartingCirca,
    CleanOperation::EndingParentheses,
];

impl CleanOperation {
    /// Circa operations mark the cleaned date as approximate
    pub const fn is_approximate(self) -> bool {
        matches!(
            self,
            Self::CaptureValueInSquareBracketsWithCirca
                | Self::StartingCirca
                | Self::CaptureValueInParenthesesWithCirca
        )
    }

    /// Rewritten text, `None` when the operation does not apply or would
    /// leave nothing behind.
    pub fn apply(self, text: &str) -> Option<String> {
        let cleaned = match self {
            Self::StartingTextUntilFirstColon => text.split_once(':').map(|(_, rest)| rest.to_owned()),
            Self::StartingParentheses => capture(&LEADING_PARENTHESES, text, "rest"),
            Self::EndingParentheses => strip_trailing_groups(text),
            Self::CaptureValueInSquareBracketsWithCirca => unwrap_all(&SQUARE_BRACKETS_CIRCA, text),
            Self::CaptureValueInSquareBrackets => unwrap_all(&SQUARE_BRACKETS, text),
            Self::StartingCirca => capture(&LEADING_CIRCA, text, "rest"),
            Self::EndingClosingSquareBracket => capture(&TRAILING_CLOSING_BRACKET, text, "rest"),
            Self::EndingDot => capture(&TRAILING_DOT, text, "rest"),
            Self::EndingSquareBrackets => capture(&TRAILING_SQUARE_BRACKETS, text, "rest"),
            Self::CaptureValueInParenthesesWithCirca => capture(&PARENTHESES_CIRCA, text, "inner"),
            Self::CaptureValueInParentheses => capture(&PARENTHESES, text, "inner"),
        }?;
        let cleaned = cleaned.trim();
        (!cleaned.is_empty()).then(|| cleaned.to_owned())
    }
}

fn capture(regex: &Regex, text: &str, group: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|captures| captures.name(group).map(|found| found.as_str().to_owned()))
}

/// Drops the balanced parenthesized groups closing `text`, nested ones included
fn strip_trailing_groups(text: &str) -> Option<String> {
    let mut rest = text.trim_end();
    while rest.ends_with(')') {
        let mut depth = 0usize;
        let open = rest.char_indices().rev().find_map(|(index, c)| {
            match c {
                ')' => depth += 1,
                '(' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(index);
                    }
                }
                _ => {}
            }
            None
        })?;
        rest = rest[..open].trim_end();
    }
    (rest.len() < text.trim_end().len()).then(|| rest.to_owned())
}

/// Replaces every bracketed group with its content
fn unwrap_all(regex: &Regex, text: &str) -> Option<String> {
    regex
        .is_match(text)
        .then(|| regex.replace_all(text, "${inner}").into_owned())
}

/// Text produced by a cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub operation: CleanOperation,
    pub text:      String,
}

/// Runs the operations in order; the first one that applies wins.
pub fn clean(text: &str, operations: &[CleanOperation]) -> Option<Cleaned> {
    operations.iter().find_map(|&operation| {
        operation.apply(text).map(|text| Cleaned { operation, text })
    })
}
