use std::collections::HashMap;

use regex::Regex;

use crate::duration::{Duration, Unit};
use crate::engine::{Assists, Resolver};
use crate::error::Error;
use crate::locale::{DurationTable, Locale};
use crate::{DURATIONS, Kind, NUMBERS, Range, Spanned, Stash, Token, Value};

use crate::rules::duration::helpers::{clock_millis, clock_regex, continues_word, unit_pattern};

/// Constructor used by the registry.
pub fn get() -> Result<Box<dyn Resolver>, Error> {
    Ok(Box::new(DurationResolver::new()?))
}

/// Finds unit words and clock literals, scales units by the number in front of
/// them and sums runs of segments into one duration.
#[derive(Debug)]
pub struct DurationResolver {
    /// Unit pattern per locale tag.
    units: HashMap<&'static str, Regex>,
}

/// A raw duration match before numbers are applied.
#[derive(Debug)]
enum Found {
    Unit { range: Range, unit: Unit },
    Clock { range: Range, millis: f64 },
}

impl Spanned for Found {
    fn range(&self) -> Range {
        match self {
            Found::Unit { range, .. } | Found::Clock { range, .. } => *range,
        }
    }
}

impl DurationResolver {
    pub fn new() -> Result<Self, Error> {
        let mut units = HashMap::new();
        for locale in Locale::all() {
            units.insert(locale.tag, Regex::new(&unit_pattern(locale.durations.names()))?);
        }
        Ok(DurationResolver { units })
    }

    fn scan(&self, input: &str, locale: &Locale) -> Result<Stash<Found>, Error> {
        let re = self.units.get(locale.tag).ok_or_else(|| Error::unsupported_locale(locale.tag, DURATIONS))?;
        let mut stash = Stash::empty();

        for caps in re.captures_iter(input) {
            let Some(name) = caps.get(1) else { continue };
            if continues_word(input, name.end()) {
                continue;
            }
            let unit = locale
                .durations
                .unit_of(name.as_str())
                .ok_or_else(|| Error::InvalidDurationUnit(name.as_str().to_string()))?;
            stash.insert(Found::Unit { range: Range::new(name.start(), name.end()), unit });
        }

        for caps in clock_regex().captures_iter(input) {
            let (Some(whole), Some(millis)) = (caps.get(0), clock_millis(&caps)) else { continue };
            stash.insert(Found::Clock { range: Range::new(whole.start(), whole.end()), millis });
        }

        Ok(stash)
    }
}

impl Resolver for DurationResolver {
    fn name(&self) -> &'static str {
        DURATIONS
    }

    fn assistants(&self) -> &'static [&'static str] {
        &[NUMBERS]
    }

    fn parse(&self, input: &str, locale: &'static Locale, assists: &Assists) -> Result<Vec<Token>, Error> {
        let found = self.scan(input, locale)?;
        if found.null() {
            return Ok(Vec::new());
        }

        let numbers = assists.get(NUMBERS);
        let table = &locale.durations;
        let mut previous_end = 0;
        let mut segments = Vec::with_capacity(found.len());

        for item in found.into_vec() {
            let end = item.range().end;
            let segment = match item {
                Found::Unit { range, unit } => unit_segment(input, table, numbers, previous_end, range, unit),
                Found::Clock { range, millis } => {
                    Token::new(Kind::DurationSegment, input, range, Value::Duration(Duration::from_millis_f64(millis)))
                }
            };
            previous_end = end;
            segments.push(segment);
        }

        let count = segments.len();
        let durations = merge(input, table, segments);
        tracing::debug!(
            target: "babble::durations",
            locale = locale.tag,
            numbers = numbers.len(),
            segments = count,
            durations = durations.len(),
            "resolved"
        );
        Ok(durations)
    }
}

/// A unit scaled by the nearest number between the previous match and the
/// unit, when only a modifier joiner separates them; otherwise one bare unit.
fn unit_segment(
    input: &str,
    table: &DurationTable,
    numbers: &[Token],
    previous_end: usize,
    range: Range,
    unit: Unit,
) -> Token {
    let unit_millis = unit.millis() as f64;
    let modifier = numbers
        .iter()
        .filter(|t| t.start() >= previous_end && t.end() <= range.start)
        .last()
        .filter(|t| input.get(t.end()..range.start).is_some_and(|between| table.is_modifier_joiner(between)));

    match modifier {
        Some(number) => {
            let millis = number.value.as_f64() * unit_millis;
            tracing::trace!(target: "babble::durations", number = %number.text, unit = unit.as_str(), millis, "scaled unit");
            let range = number.range.cover(&range);
            Token::new(Kind::DurationSegment, input, range, Value::Duration(Duration::from_millis_f64(millis)))
                .with_children(vec![number.clone()])
        }
        None => {
            tracing::trace!(target: "babble::durations", unit = unit.as_str(), "bare unit");
            Token::new(Kind::DurationSegment, input, range, Value::Duration(Duration::from_millis_f64(unit_millis)))
        }
    }
}

/// Sum consecutive segments separated only by a time joiner ("1 hour, 30 minutes").
fn merge(input: &str, table: &DurationTable, segments: Vec<Token>) -> Vec<Token> {
    let mut durations = Vec::new();
    let mut group: Vec<Token> = Vec::new();

    for segment in segments {
        let joined = group
            .last()
            .and_then(|last| input.get(last.end()..segment.start()))
            .is_some_and(|between| table.is_time_joiner(between));
        if !joined && !group.is_empty() {
            durations.push(finish(input, std::mem::take(&mut group)));
        }
        group.push(segment);
    }

    if !group.is_empty() {
        durations.push(finish(input, group));
    }
    durations
}

fn finish(input: &str, group: Vec<Token>) -> Token {
    let millis = group.iter().filter_map(|s| s.value.as_duration()).fold(0i64, |acc, d| acc.saturating_add(d.as_millis()));
    let range = match (group.first(), group.last()) {
        (Some(first), Some(last)) => first.range.cover(&last.range),
        _ => Range::new(0, 0),
    };
    Token::new(Kind::Duration, input, range, Value::Duration(Duration::from_millis(millis))).with_children(group)
}
