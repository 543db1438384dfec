use thiserror::Error;

/// Everything that can go wrong while looking up or running a resolver.
///
/// Finding nothing in the input is not an error: resolvers return an empty
/// token list instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("locale \"{locale}\" is not supported by \"{resolver}\"")]
    UnsupportedLocale { locale: String, resolver: String },

    #[error("\"{0}\" must be registered before it is used")]
    UnregisteredResolver(String),

    #[error("invalid duration name \"{0}\"")]
    InvalidDurationUnit(String),

    #[error("\"{0}\" depends on itself through its assistants")]
    AssistantCycle(String),

    #[error("unknown duration format \"{0}\" (expected one of: years, days, hours, minutes, seconds, milliseconds, :, :minutes, hm, hms)")]
    InvalidFormat(String),

    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub(crate) fn unsupported_locale(locale: &str, resolver: &str) -> Self {
        Error::UnsupportedLocale { locale: locale.to_string(), resolver: resolver.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = Error::unsupported_locale("fr-FR", "numbers");
        assert_eq!(err.to_string(), "locale \"fr-FR\" is not supported by \"numbers\"");

        let err = Error::UnregisteredResolver("moments".into());
        assert_eq!(err.to_string(), "\"moments\" must be registered before it is used");
    }
}
