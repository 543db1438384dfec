use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use once_cell::sync::OnceCell;

use super::{Assists, AssistantMetrics, Resolver, RunMetrics, RunResult};
use crate::error::Error;
use crate::locale::Locale;
use crate::rules;
use crate::Token;

/// Builds a resolver. Called at most once per registry entry.
pub type Constructor = fn() -> Result<Box<dyn Resolver>, Error>;

const DEFAULT_LOCALE: &str = "en-US";
const DEFAULT_SUPPORTED: &[&str] = &["en-US", "de-DE"];

struct Registration {
    constructor: Constructor,
    default_locale: &'static str,
    supported_locales: &'static [&'static str],
    instance: OnceCell<Box<dyn Resolver>>,
}

impl Registration {
    fn instance(&self) -> Result<&dyn Resolver, Error> {
        let resolver = self.instance.get_or_try_init(|| {
            tracing::debug!(target: "babble::registry", "constructing resolver");
            (self.constructor)()
        })?;
        Ok(resolver.as_ref())
    }

    fn supports(&self, tag: &str) -> bool {
        self.supported_locales.iter().any(|s| s.eq_ignore_ascii_case(tag))
    }
}

/// Named resolvers, each created on first use and shared afterwards.
///
/// Registration needs `&mut self`; lookups and runs only need `&self`, so a
/// fully registered `Registry` can sit in a `static` and serve every thread.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<&'static str, Registration>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("names", &self.names()).finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `numbers` and `durations`, both defaulting to `en-US` and accepting `en-US` and `de-DE`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(crate::NUMBERS, rules::numeral::rules::get, DEFAULT_LOCALE, DEFAULT_SUPPORTED);
        registry.register(crate::DURATIONS, rules::duration::rules::get, DEFAULT_LOCALE, DEFAULT_SUPPORTED);
        registry
    }

    /// Record a resolver under `name`. Registering a name again replaces the
    /// previous entry, including any instance it had already created.
    pub fn register(
        &mut self,
        name: &'static str,
        constructor: Constructor,
        default_locale: &'static str,
        supported_locales: &'static [&'static str],
    ) {
        let registration = Registration { constructor, default_locale, supported_locales, instance: OnceCell::new() };
        if self.entries.insert(name, registration).is_some() {
            tracing::debug!(target: "babble::registry", name, "replaced registration");
        }
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The singleton for `name`, after checking it accepts `locale`
    /// (`None` means the resolver's default locale).
    pub fn get(&self, name: &str, locale: Option<&str>) -> Result<&dyn Resolver, Error> {
        let registration = self.registration(name)?;
        Self::locale_for(name, registration, locale)?;
        registration.instance()
    }

    /// The locale `name` would run with for the requested tag.
    pub fn locale(&self, name: &str, locale: Option<&str>) -> Result<&'static Locale, Error> {
        Self::locale_for(name, self.registration(name)?, locale)
    }

    /// Run `name` on `input`, running its assistants first.
    pub fn run(&self, name: &str, input: &str, locale: Option<&str>) -> Result<RunResult, Error> {
        let start = Instant::now();
        let mut metrics = RunMetrics::default();
        let mut stack = Vec::new();

        let (tokens, assists, locale) = self.execute(name, input, locale, &mut stack, &mut metrics)?;

        metrics.total = start.elapsed();
        tracing::debug!(
            target: "babble::registry",
            name,
            locale = locale.tag,
            tokens = tokens.len(),
            elapsed_us = metrics.total.as_micros() as u64,
            "run finished"
        );
        Ok(RunResult { tokens, assists, locale, metrics })
    }

    fn execute(
        &self,
        name: &str,
        input: &str,
        locale: Option<&str>,
        stack: &mut Vec<String>,
        metrics: &mut RunMetrics,
    ) -> Result<(Vec<Token>, Assists, &'static Locale), Error> {
        if stack.iter().any(|running| running == name) {
            return Err(Error::AssistantCycle(name.to_string()));
        }

        let registration = self.registration(name)?;
        let locale = Self::locale_for(name, registration, locale)?;
        let resolver = registration.instance()?;

        stack.push(name.to_string());
        let mut assists = Assists::default();
        for &assistant in resolver.assistants() {
            let started = Instant::now();
            let (tokens, _, _) = self.execute(assistant, input, Some(locale.tag), stack, metrics)?;
            tracing::debug!(target: "babble::registry", resolver = name, assistant, tokens = tokens.len(), "assistant ran");
            metrics.assistants.push(AssistantMetrics { name: assistant, elapsed: started.elapsed(), tokens: tokens.len() });
            assists.insert(assistant, tokens);
        }
        stack.pop();

        let started = Instant::now();
        let tokens = resolver.parse(input, locale, &assists)?;
        if stack.is_empty() {
            metrics.resolve = started.elapsed();
        }

        Ok((tokens, assists, locale))
    }

    fn registration(&self, name: &str) -> Result<&Registration, Error> {
        self.entries.get(name).ok_or_else(|| Error::UnregisteredResolver(name.to_string()))
    }

    fn locale_for(name: &str, registration: &Registration, locale: Option<&str>) -> Result<&'static Locale, Error> {
        let tag = locale.unwrap_or(registration.default_locale);
        if !registration.supports(tag) {
            return Err(Error::unsupported_locale(tag, name));
        }
        Locale::lookup(tag).ok_or_else(|| Error::unsupported_locale(tag, name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Kind, Range, Value};

    struct Echo;

    impl Resolver for Echo {
        fn name(&self) -> &'static str {
            "echo"
        }

        fn parse(&self, input: &str, _locale: &'static Locale, _assists: &Assists) -> Result<Vec<Token>, Error> {
            Ok(vec![Token::new(Kind::Number, input, Range::new(0, input.len()), Value::Number(input.len() as f64))])
        }
    }

    struct Counter;

    impl Resolver for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn assistants(&self) -> &'static [&'static str] {
            &["echo"]
        }

        fn parse(&self, _input: &str, _locale: &'static Locale, assists: &Assists) -> Result<Vec<Token>, Error> {
            Ok(assists.get("echo").to_vec())
        }
    }

    struct Ouroboros;

    impl Resolver for Ouroboros {
        fn name(&self) -> &'static str {
            "ouroboros"
        }

        fn assistants(&self) -> &'static [&'static str] {
            &["ouroboros"]
        }

        fn parse(&self, _input: &str, _locale: &'static Locale, _assists: &Assists) -> Result<Vec<Token>, Error> {
            Ok(Vec::new())
        }
    }

    fn echo() -> Result<Box<dyn Resolver>, Error> {
        Ok(Box::new(Echo))
    }

    fn counter() -> Result<Box<dyn Resolver>, Error> {
        Ok(Box::new(Counter))
    }

    fn ouroboros() -> Result<Box<dyn Resolver>, Error> {
        Ok(Box::new(Ouroboros))
    }

    fn test_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register("echo", echo, "en-US", &["en-US"]);
        registry.register("counter", counter, "en-US", &["en-US"]);
        registry.register("ouroboros", ouroboros, "en-US", &["en-US"]);
        registry
    }

    #[test]
    fn get_returns_the_same_instance() {
        let registry = test_registry();
        let a = registry.get("echo", None).unwrap() as *const dyn Resolver as *const ();
        let b = registry.get("echo", Some("EN-us")).unwrap() as *const dyn Resolver as *const ();
        assert_eq!(a, b);
    }

    #[test]
    fn unknown_names_and_locales_are_errors() {
        let registry = test_registry();
        assert!(matches!(registry.get("moments", None), Err(Error::UnregisteredResolver(name)) if name == "moments"));
        assert!(matches!(
            registry.get("echo", Some("de-DE")),
            Err(Error::UnsupportedLocale { locale, resolver }) if locale == "de-DE" && resolver == "echo"
        ));
    }

    #[test]
    fn assistants_run_first_and_are_recorded() {
        let registry = test_registry();
        let run = registry.run("counter", "abc", None).unwrap();

        assert_eq!(run.tokens.len(), 1);
        assert_eq!(run.assists.get("echo").len(), 1);
        assert_eq!(run.metrics.assistants.len(), 1);
        assert_eq!(run.metrics.assistants[0].name, "echo");
        assert_eq!(run.locale.tag, "en-US");
    }

    #[test]
    fn self_referencing_assistants_are_rejected() {
        let registry = test_registry();
        assert!(matches!(registry.run("ouroboros", "x", None), Err(Error::AssistantCycle(name)) if name == "ouroboros"));
    }

    #[test]
    fn defaults_register_numbers_and_durations() {
        let registry = Registry::with_defaults();
        assert_eq!(registry.names(), vec!["durations", "numbers"]);
        assert_eq!(registry.get("durations", None).unwrap().assistants(), &["numbers"]);
        assert_eq!(registry.locale("numbers", Some("de-de")).unwrap().tag, "de-DE");
        assert!(registry.is_registered("numbers"));
        assert!(!registry.is_registered("Numbers"));
    }
}
