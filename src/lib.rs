#[macro_use]
mod macros;
mod api;
mod duration;
mod engine;
mod error;
mod locale;
mod rules;

pub use api::{
    DURATIONS, NUMBERS, ParseDetails, ParseResult, ParseResultVerbose, TranslateOptions, digify, parse_durations,
    parse_numbers, parse_verbose, registry, translate,
};
pub use duration::{Components, Duration, Fields, Format, Specificity, Unit};
pub use engine::{Assists, AssistantMetrics, Constructor, Registry, Resolver, RunMetrics, RunResult};
pub use error::Error;
pub use locale::{DurationTable, Locale, NumberTable, UnitNames};

// --- Tokens -----------------------------------------------------------------

/// Byte span into the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

impl Range {
    pub fn new(start: usize, end: usize) -> Self {
        Range { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    pub fn cover(&self, other: &Range) -> Range {
        Range { start: self.start.min(other.start), end: self.end.max(other.end) }
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// What a token stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A single number word or digit literal as it appears in the input.
    NumberWord,
    /// One magnitude group of a composite number.
    NumberSegment,
    /// A finished composite number.
    Number,
    /// A unit word (optionally scaled by a number) or a clock literal.
    DurationSegment,
    /// A finished, possibly compound, duration.
    Duration,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::NumberWord => "number.word",
            Kind::NumberSegment => "number.segment",
            Kind::Number => "number",
            Kind::DurationSegment => "duration.segment",
            Kind::Duration => "duration.full",
        }
    }
}

/// Resolved value carried by a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Number(f64),
    Duration(Duration),
}

impl Value {
    /// Numeric view of the value; durations yield their millisecond count.
    pub fn as_f64(&self) -> f64 {
        match self {
            Value::Number(v) => *v,
            Value::Duration(d) => d.as_millis() as f64,
        }
    }

    pub fn as_duration(&self) -> Option<&Duration> {
        match self {
            Value::Duration(d) => Some(d),
            Value::Number(_) => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(v) => f.write_str(&rules::numeral::helpers::format_number(*v)),
            Value::Duration(d) => write!(f, "{}", d.as_millis()),
        }
    }
}

/// A resolved lexical unit: its span in the input, the value it resolved to,
/// and the sub-tokens it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: Kind,
    pub range: Range,
    /// Exact slice of the input covered by `range`.
    pub text: String,
    pub value: Value,
    pub children: Vec<Token>,
}

impl Token {
    pub(crate) fn new(kind: Kind, input: &str, range: Range, value: Value) -> Self {
        let text = input.get(range.start..range.end).unwrap_or_default().to_string();
        Token { kind, range, text, value, children: Vec::new() }
    }

    pub(crate) fn with_children(mut self, children: Vec<Token>) -> Self {
        self.children = children;
        self
    }

    pub fn start(&self) -> usize {
        self.range.start
    }

    pub fn end(&self) -> usize {
        self.range.end
    }
}

// --- Stash: position-ordered match container --------------------------------

/// Anything occupying a span of the input.
pub(crate) trait Spanned {
    fn range(&self) -> Range;
}

impl Spanned for Token {
    fn range(&self) -> Range {
        self.range
    }
}

/// Matches kept in ascending start order.
///
/// Two matches starting at the same offset never coexist: the longer one wins,
/// which gives maximal munch across independently scanned patterns.
#[derive(Debug, Clone)]
pub(crate) struct Stash<T> {
    items: Vec<T>,
}

impl<T: Spanned> Stash<T> {
    pub fn empty() -> Self {
        Stash { items: Vec::new() }
    }

    pub fn null(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Insert `item` keeping start order; on a start tie the longer span replaces the shorter.
    pub fn insert(&mut self, item: T) {
        let range = item.range();
        match self.items.last() {
            None => {
                self.items.push(item);
                return;
            }
            Some(last) if last.range().start < range.start => {
                self.items.push(item);
                return;
            }
            _ => {}
        }

        let idx = self.items.partition_point(|it| it.range().start < range.start);
        match self.items.get(idx) {
            Some(existing) if existing.range().start == range.start => {
                if existing.range().len() < range.len() {
                    self.items[idx] = item;
                }
            }
            _ => self.items.insert(idx, item),
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}
