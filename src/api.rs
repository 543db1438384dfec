use crate::engine::{AssistantMetrics, Assists, Registry, RunResult};
use crate::error::Error;
use crate::{Kind, Range, Token, Value};
use once_cell::sync::Lazy;
use std::fmt;
use std::time::Duration;

/// Registry name of the number resolver.
pub const NUMBERS: &str = "numbers";
/// Registry name of the duration resolver.
pub const DURATIONS: &str = "durations";

static DEFAULT_REGISTRY: Lazy<Registry> = Lazy::new(Registry::with_defaults);

/// The process-wide registry holding `numbers` and `durations`.
pub fn registry() -> &'static Registry {
    &DEFAULT_REGISTRY
}

/// Result from [`parse_numbers`], [`parse_durations`] and [`translate`].
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed input text.
    pub text: String,
    /// Tag of the locale the text was parsed with.
    pub locale: &'static str,
    /// Top-level tokens, position-ascending and non-overlapping.
    pub tokens: Vec<Token>,
    /// Output of the resolver's assistants for the same text.
    pub assists: Assists,
    /// Total elapsed time, assistants included.
    pub elapsed: Duration,
}

impl ParseResult {
    fn from_run(text: &str, run: RunResult) -> Self {
        ParseResult {
            text: text.to_string(),
            locale: run.locale.tag,
            tokens: run.tokens,
            assists: run.assists,
            elapsed: run.metrics.total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn values(&self) -> Vec<Value> {
        self.tokens.iter().map(|t| t.value).collect()
    }

    /// Replace every recognized span with its value.
    ///
    /// Top-level tokens are replaced first; assistant numbers are replaced too
    /// when no top-level token overlaps them ("bring 3 apples" inside a
    /// duration parse). Durations render as milliseconds.
    pub fn digify(&self) -> String {
        let mut spans: Vec<(Range, &Value)> = self.tokens.iter().map(|t| (t.range, &t.value)).collect();
        for (_, tokens) in self.assists.iter() {
            for t in tokens.iter().filter(|t| t.kind == Kind::Number) {
                if !self.tokens.iter().any(|top| top.range.overlaps(&t.range)) {
                    spans.push((t.range, &t.value));
                }
            }
        }
        spans.sort_by_key(|(range, _)| range.start);

        let mut out = String::with_capacity(self.text.len());
        let mut cursor = 0;
        for (range, value) in spans {
            if range.start < cursor {
                continue;
            }
            out.push_str(self.text.get(cursor..range.start).unwrap_or_default());
            out.push_str(&value.to_string());
            cursor = range.end;
        }
        out.push_str(self.text.get(cursor..).unwrap_or_default());
        out
    }
}

/// Additional details returned by [`parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseDetails {
    /// Resolver that was requested.
    pub resolver: String,
    /// Total elapsed time.
    pub total: Duration,
    /// Per-assistant timings, in the order they ran.
    pub assistants: Vec<AssistantMetrics>,
    /// Time spent in the requested resolver itself.
    pub resolve: Duration,
}

/// Result from [`parse_verbose`].
#[derive(Debug, Clone)]
pub struct ParseResultVerbose {
    pub result: ParseResult,
    pub details: ParseDetails,
}

/// Per-call options for [`translate`].
#[derive(Clone, Copy, Default)]
pub struct TranslateOptions<'a> {
    /// Locale tag; `None` uses the resolver's default locale.
    pub locale: Option<&'a str>,
    /// Called with the result before [`translate`] returns it.
    pub on_result: Option<&'a dyn Fn(&ParseResult)>,
}

impl fmt::Debug for TranslateOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslateOptions")
            .field("locale", &self.locale)
            .field("on_result", &self.on_result.is_some())
            .finish()
    }
}

/// Run the resolver registered as `name` in the default [`registry`].
///
/// # Example
/// ```
/// use babble::{translate, TranslateOptions, DURATIONS};
///
/// let seen = std::cell::Cell::new(0);
/// let notify = |r: &babble::ParseResult| seen.set(r.tokens.len());
/// let options = TranslateOptions { locale: Some("en-US"), on_result: Some(&notify) };
///
/// let out = translate(DURATIONS, "1 hour and 30 minutes", options).unwrap();
/// assert_eq!(out.tokens.len(), 1);
/// assert_eq!(seen.get(), 1);
/// ```
pub fn translate(name: &str, text: &str, options: TranslateOptions<'_>) -> Result<ParseResult, Error> {
    let run = DEFAULT_REGISTRY.run(name, text, options.locale)?;
    let result = ParseResult::from_run(text, run);
    if let Some(callback) = options.on_result {
        callback(&result);
    }
    Ok(result)
}

/// Find numbers in `text`. `locale` defaults to `en-US`.
///
/// # Example
/// ```
/// let out = babble::parse_numbers("fifty cats flew twenty two miles", None).unwrap();
/// let values: Vec<f64> = out.tokens.iter().map(|t| t.value.as_f64()).collect();
/// assert_eq!(values, vec![50.0, 22.0]);
/// assert_eq!(out.tokens[1].text, "twenty two");
/// ```
pub fn parse_numbers(text: &str, locale: Option<&str>) -> Result<ParseResult, Error> {
    translate(NUMBERS, text, TranslateOptions { locale, on_result: None })
}

/// Find durations in `text`. `locale` defaults to `en-US`.
///
/// # Example
/// ```
/// let out = babble::parse_durations("1hr30min", None).unwrap();
/// let millis = out.tokens[0].value.as_duration().map(|d| d.as_millis());
/// assert_eq!(millis, Some(5_400_000));
/// ```
pub fn parse_durations(text: &str, locale: Option<&str>) -> Result<ParseResult, Error> {
    translate(DURATIONS, text, TranslateOptions { locale, on_result: None })
}

/// Replace every number and duration in `text` with its value.
///
/// # Example
/// ```
/// let out = babble::digify("fifty cats flew twenty two miles", None).unwrap();
/// assert_eq!(out, "50 cats flew 22 miles");
/// ```
pub fn digify(text: &str, locale: Option<&str>) -> Result<String, Error> {
    parse_durations(text, locale).map(|result| result.digify())
}

/// Run `name` on `text` and also return timing details.
///
/// The default entry points carry the same timings in `elapsed` only; this
/// keeps the per-assistant breakdown.
pub fn parse_verbose(name: &str, text: &str, locale: Option<&str>) -> Result<ParseResultVerbose, Error> {
    let run = DEFAULT_REGISTRY.run(name, text, locale)?;
    let details = ParseDetails {
        resolver: name.to_string(),
        total: run.metrics.total,
        assistants: run.metrics.assistants.clone(),
        resolve: run.metrics.resolve,
    };
    Ok(ParseResultVerbose { result: ParseResult::from_run(text, run), details })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn omitted_locale_behaves_as_default() {
        let text = "one million two hundred fifty one thousand three hundred and sixty five";
        let implicit = parse_numbers(text, None).unwrap();
        let explicit = parse_numbers(text, Some("en-US")).unwrap();

        assert_eq!(implicit.locale, "en-US");
        assert_eq!(implicit.tokens, explicit.tokens);
        assert_eq!(implicit.values(), vec![Value::Number(1_251_365.0)]);
    }

    #[test]
    fn german_digify() {
        let text = "eine million sechs hundertdreiundfünfzigtausend eins katze und drei hundert siebzig hunde";
        assert_eq!(digify(text, Some("de-DE")).unwrap(), "1653001 katze und 370 hunde");
    }

    #[test]
    fn digify_replaces_durations_and_loose_numbers() {
        let text = "wait 1 hour and bring 3 apples";
        assert_eq!(digify(text, None).unwrap(), "wait 3600000 and bring 3 apples");
    }

    #[test]
    fn digify_is_stable_after_one_pass() {
        let texts = [
            "fifty cats flew twenty two miles past five dogs",
            "the meeting ran 1 hour, 30 minutes over",
            "twelve hundred fifty people waited half an hour",
            "ein und zwanzig katzen",
        ];
        for text in texts {
            let locale = if text.starts_with("ein ") { Some("de-DE") } else { None };
            let once = digify(text, locale).unwrap();
            let twice = digify(&once, locale).unwrap();
            assert_eq!(once, twice, "digify not stable for '{text}'");
        }
    }

    #[test]
    fn parse_result_digify_on_numbers() {
        let result = parse_numbers("twelve hundred fifty", None).unwrap();
        assert_eq!(result.digify(), "1250");
        assert!(result.assists.is_empty());
    }

    #[test]
    fn translate_invokes_callback_before_returning() {
        let calls = Cell::new(0);
        let callback = |_: &ParseResult| calls.set(calls.get() + 1);
        let out = translate(NUMBERS, "three", TranslateOptions { locale: None, on_result: Some(&callback) }).unwrap();

        assert_eq!(calls.get(), 1);
        assert_eq!(out.values(), vec![Value::Number(3.0)]);
    }

    #[test]
    fn errors_surface_from_the_registry() {
        assert!(matches!(parse_numbers("one", Some("fr-FR")), Err(Error::UnsupportedLocale { .. })));
        assert!(matches!(
            translate("moments", "now", TranslateOptions::default()),
            Err(Error::UnregisteredResolver(name)) if name == "moments"
        ));
    }

    #[test]
    fn parse_verbose_includes_assistant_metrics() {
        let res = parse_verbose(DURATIONS, "1 hour, 30 minutes", None).unwrap();

        assert_eq!(res.details.resolver, "durations");
        assert_eq!(res.result.elapsed, res.details.total);
        assert!(res.details.resolve <= res.details.total);
        assert_eq!(res.details.assistants.len(), 1);
        assert_eq!(res.details.assistants[0].name, NUMBERS);
        assert_eq!(res.details.assistants[0].tokens, 2);
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let res = parse_durations("nothing to see", None).unwrap();
        assert!(res.is_empty());
        assert_eq!(res.digify(), "nothing to see");
    }
}
