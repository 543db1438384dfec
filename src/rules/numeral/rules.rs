use std::collections::HashMap;

use regex::Regex;

use crate::engine::{Assists, Resolver};
use crate::error::Error;
use crate::locale::{Locale, NumberTable};
use crate::{Kind, NUMBERS, Range, Stash, Token, Value};

use crate::rules::numeral::{
    helpers::{parse_literal, saturate, word_pattern},
    predicates::{has_more_digits, is_fraction, sign_is_glued},
};

/// Constructor used by the registry.
pub fn get() -> Result<Box<dyn Resolver>, Error> {
    Ok(Box::new(NumeralResolver::new()?))
}

/// Finds spelled-out and digit numbers and folds adjacent ones into composites.
#[derive(Debug)]
pub struct NumeralResolver {
    /// Word pattern per locale tag.
    words: HashMap<&'static str, Regex>,
}

impl NumeralResolver {
    pub fn new() -> Result<Self, Error> {
        let mut words = HashMap::new();
        for locale in Locale::all() {
            let table = &locale.numbers;
            let pattern = word_pattern(table.words.iter().map(|(w, _)| *w), table.compounds);
            words.insert(locale.tag, Regex::new(&pattern)?);
        }
        Ok(NumeralResolver { words })
    }

    /// Every number word and digit literal in `input`, in position order.
    fn scan(&self, input: &str, locale: &Locale) -> Result<Stash<Token>, Error> {
        let re = self.words.get(locale.tag).ok_or_else(|| Error::unsupported_locale(locale.tag, NUMBERS))?;
        let mut stash = Stash::empty();

        for m in re.find_iter(input) {
            let Some(value) = locale.numbers.value_of(m.as_str()) else {
                tracing::trace!(target: "babble::numbers", word = m.as_str(), "matched word missing from table");
                continue;
            };
            stash.insert(Token::new(Kind::NumberWord, input, Range::new(m.start(), m.end()), Value::Number(value)));
        }

        for m in regex!(r"[+-]?[0-9]+(?:\.[0-9]+)?").find_iter(input) {
            let mut start = m.start();
            if m.as_str().starts_with(['+', '-']) && sign_is_glued(input, start) {
                start += 1;
            }
            let Some(value) = input.get(start..m.end()).and_then(parse_literal) else {
                continue;
            };
            stash.insert(Token::new(Kind::NumberWord, input, Range::new(start, m.end()), Value::Number(value)));
        }

        Ok(stash)
    }
}

impl Resolver for NumeralResolver {
    fn name(&self) -> &'static str {
        NUMBERS
    }

    fn parse(&self, input: &str, locale: &'static Locale, _assists: &Assists) -> Result<Vec<Token>, Error> {
        let words = self.scan(input, locale)?;
        if words.null() {
            return Ok(Vec::new());
        }

        let found = words.len();
        let numbers = combine(input, &locale.numbers, words.into_vec());
        tracing::debug!(target: "babble::numbers", locale = locale.tag, words = found, numbers = numbers.len(), "resolved");
        Ok(numbers)
    }
}

// --- Composition ---------------------------------------------------------------

/// Walk the words left to right, splitting wherever the text between two
/// words is not a joiner.
fn combine(input: &str, table: &NumberTable, words: Vec<Token>) -> Vec<Token> {
    let mut numbers = Vec::new();
    let mut current: Option<Composite> = None;
    let mut previous: Option<Range> = None;

    for word in words {
        let range = word.range;
        let joiner = previous.and_then(|p| input.get(p.end..range.start)).filter(|j| table.is_joiner(j));

        match (current.as_mut(), joiner) {
            (Some(composite), Some(joiner)) => composite.absorb(word, joiner, table),
            _ => {
                if let Some(done) = current.take() {
                    numbers.push(done.finish(input));
                }
                current = Some(Composite::new(word));
            }
        }
        previous = Some(range);
    }

    if let Some(done) = current {
        numbers.push(done.finish(input));
    }
    numbers
}

/// One magnitude group: "two hundred" in "two hundred thousand".
#[derive(Debug)]
struct Segment {
    value: f64,
    range: Range,
    words: Vec<Token>,
}

impl Segment {
    fn new(word: Token) -> Self {
        Segment { value: word.value.as_f64(), range: word.range, words: vec![word] }
    }

    fn scale(&mut self, word: Token) {
        self.value = saturate(self.value * word.value.as_f64());
        self.extend(word);
    }

    fn add(&mut self, word: Token) {
        self.value = saturate(self.value + word.value.as_f64());
        self.extend(word);
    }

    fn extend(&mut self, word: Token) {
        self.range = self.range.cover(&word.range);
        self.words.push(word);
    }
}

/// A number under construction.
#[derive(Debug)]
struct Composite {
    segments: Vec<Segment>,
}

impl Composite {
    fn new(word: Token) -> Self {
        Composite { segments: vec![Segment::new(word)] }
    }

    fn absorb(&mut self, word: Token, joiner: &str, table: &NumberTable) {
        let incoming = word.value.as_f64();
        let before = self.segments.len().checked_sub(2).and_then(|i| self.segments.get(i)).map(|s| s.value);
        let Some(last) = self.segments.last_mut() else {
            self.segments.push(Segment::new(word));
            return;
        };
        let current = last.value;

        if is_fraction(&word) {
            trace_step(&word, current, "scale fraction");
            last.scale(word);
        } else if has_more_digits(current, incoming) {
            if before.is_some_and(|b| b < incoming) {
                trace_step(&word, current, "merge");
                self.merge(word);
            } else if table.is_flipper(joiner) {
                trace_step(&word, current, "add flipped");
                last.add(word);
            } else {
                trace_step(&word, current, "scale");
                last.scale(word);
            }
        } else if incoming < current {
            trace_step(&word, current, "new segment");
            self.segments.push(Segment::new(word));
        } else {
            trace_step(&word, current, "add");
            last.add(word);
        }
    }

    /// Sum trailing segments while the total stays within the incoming
    /// multiplier, then replace them with one segment of `sum * multiplier`.
    /// "two hundred fifty one" + "thousand" becomes 251000.
    fn merge(&mut self, word: Token) {
        let incoming = word.value.as_f64();
        let mut tally = 0.0;
        let mut split = 0;
        for (idx, segment) in self.segments.iter().enumerate().rev() {
            if tally + segment.value > incoming {
                split = idx + 1;
                break;
            }
            tally += segment.value;
        }

        if split >= self.segments.len() {
            if let Some(last) = self.segments.last_mut() {
                last.scale(word);
            }
            return;
        }

        let merged: Vec<Segment> = self.segments.drain(split..).collect();
        let range = merged.first().map_or(word.range, |s| s.range).cover(&word.range);
        let mut words: Vec<Token> = merged.into_iter().flat_map(|s| s.words).collect();
        words.push(word);
        self.segments.push(Segment { value: saturate(tally * incoming), range, words });
    }

    fn finish(self, input: &str) -> Token {
        let value = saturate(self.segments.iter().map(|s| s.value).sum());
        let range = match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => first.range.cover(&last.range),
            _ => Range::new(0, 0),
        };
        let children = self
            .segments
            .into_iter()
            .map(|s| Token::new(Kind::NumberSegment, input, s.range, Value::Number(s.value)).with_children(s.words))
            .collect();
        Token::new(Kind::Number, input, range, Value::Number(value)).with_children(children)
    }
}

fn trace_step(word: &Token, current: f64, step: &'static str) {
    tracing::trace!(target: "babble::numbers", word = %word.text, value = word.value.as_f64(), current, step);
}
