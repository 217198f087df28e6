use super::edtf::parse_instant;
use super::{DateExtractor, DateMatch, ExtractorFamily, MatchId, accept};
use crate::consts::W3C_DTF_SCHEME;
use crate::sanitizer::sanitize;
use crate::{BuildPolicy, DateQualification, InstantDate, IntervalDateBuilder};

/// Raw components of a DCMI period value.
#[derive(Debug, Default)]
struct PeriodFields<'a> {
    start:  Option<&'a str>,
    end:    Option<&'a str>,
    name:   Option<&'a str>,
    scheme: Option<&'a str>,
}

impl<'a> PeriodFields<'a> {
    /// Splits `key=value` components on `;`.
    ///
    /// Components without `=` are ignored; an unknown or repeated key
    /// rejects the whole value.
    fn parse(text: &'a str) -> Option<Self> {
        let mut fields = Self::default();
        for component in text.split(';') {
            let Some((key, value)) = component.split_once('=') else {
                continue;
            };
            let slot = match key.trim().to_ascii_lowercase().as_str() {
                "start" => &mut fields.start,
                "end" => &mut fields.end,
                "name" => &mut fields.name,
                "scheme" => &mut fields.scheme,
                _ => return None,
            };
            if slot.replace(value.trim()).is_some() {
                return None;
            }
        }
        Some(fields)
    }
}

/// Dublin Core period values: `name=Modern era; start=1975; scheme=W3C-DTF`.
///
/// Edges use the canonical grammar; a missing edge is open. The period name,
/// if any, becomes the match label.
#[derive(Debug, Clone, Copy, Default)]
pub struct DcmiPeriodExtractor;

impl DateExtractor for DcmiPeriodExtractor {
    fn family(&self) -> ExtractorFamily {
        ExtractorFamily::DcmiPeriod
    }

    fn extract(
        &self,
        input: &str,
        requested: Option<DateQualification>,
        policy: &BuildPolicy,
    ) -> Option<DateMatch> {
        let text = sanitize(input);
        if !text.contains('=') {
            return None;
        }
        let fields = PeriodFields::parse(&text)?;
        if fields
            .scheme
            .is_some_and(|scheme| !scheme.eq_ignore_ascii_case(W3C_DTF_SCHEME))
        {
            return None;
        }
        if fields.start.is_none() && fields.end.is_none() {
            return None;
        }

        let edge = |value: Option<&str>| match value {
            Some(value) => parse_instant(value, requested, policy),
            None => Ok(InstantDate::open()),
        };
        let interval = edge(fields.start).and_then(|start| {
            let end = edge(fields.end)?;
            IntervalDateBuilder::new(start, end).build(policy)
        });
        let interval = accept(interval, self.family(), &text)?;

        let label = fields
            .name
            .filter(|name| !name.is_empty())
            .map(str::to_owned);
        Some(DateMatch::new(MatchId::DcmiPeriod, interval).with_label(label))
    }
}
