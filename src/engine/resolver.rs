use std::collections::BTreeMap;

use crate::error::Error;
use crate::locale::Locale;
use crate::Token;

/// One extraction dimension.
///
/// Implementations are created once per [`Registry`](super::Registry) entry and
/// shared between threads, so all per-call state lives on the stack of
/// [`Resolver::parse`].
pub trait Resolver: Send + Sync {
    /// Registry name, also used as the key of this resolver's output in
    /// another resolver's [`Assists`].
    fn name(&self) -> &'static str;

    /// Resolvers whose output this one consumes. They run first, on the same
    /// input and locale.
    fn assistants(&self) -> &'static [&'static str] {
        &[]
    }

    /// Extract top-level tokens from `input`. Finding nothing is `Ok(vec![])`.
    fn parse(&self, input: &str, locale: &'static Locale, assists: &Assists) -> Result<Vec<Token>, Error>;
}

/// Assistant output keyed by assistant name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assists {
    by_name: BTreeMap<&'static str, Vec<Token>>,
}

impl Assists {
    /// Tokens produced by `name`, or nothing when it did not run.
    pub fn get(&self, name: &str) -> &[Token] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn insert(&mut self, name: &'static str, tokens: Vec<Token>) {
        self.by_name.insert(name, tokens);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[Token])> + '_ {
        self.by_name.iter().map(|(name, tokens)| (*name, tokens.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
