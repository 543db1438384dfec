//! Static per-locale word tables.
//!
//! Everything here is plain `static` data: nothing is compiled or mutated at
//! runtime. Resolvers build their patterns from these tables once, when their
//! singleton is created. Adding a locale means adding a file under
//! `src/locale/` and listing it in [`LOCALES`].

#[path = "locale/de_de.rs"]
mod de_de;
#[path = "locale/en_us.rs"]
mod en_us;

use crate::duration::Unit;

static LOCALES: &[&Locale] = &[&en_us::EN_US, &de_de::DE_DE];

/// Tables for one language/region.
#[derive(Debug)]
pub struct Locale {
    pub tag: &'static str,
    pub numbers: NumberTable,
    pub durations: DurationTable,
}

/// Number words and the text allowed between words of the same number.
#[derive(Debug)]
pub struct NumberTable {
    pub words: &'static [(&'static str, f64)],
    /// Text that may separate two words of one number.
    pub joiners: &'static [&'static str],
    /// Joiners that turn "small before large" into addition ("ein und zwanzig").
    pub flippers: &'static [&'static str],
    /// Words may occur inside longer words; otherwise they must sit on word boundaries.
    pub compounds: bool,
}

/// Names for one duration unit.
#[derive(Debug)]
pub struct UnitNames {
    pub unit: Unit,
    pub full: &'static [&'static str],
    pub short: &'static [&'static str],
    pub symbol: &'static [&'static str],
    /// Display nouns used when formatting.
    pub singular: &'static str,
    pub plural: &'static str,
}

impl UnitNames {
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.full.iter().chain(self.short).chain(self.symbol).copied()
    }
}

#[derive(Debug)]
pub struct DurationTable {
    pub units: &'static [UnitNames],
    /// Text (trimmed) that may separate two duration segments of one duration.
    pub time_joiners: &'static [&'static str],
    /// Text (trimmed) that may separate a number from the unit it scales.
    pub modifier_joiners: &'static [&'static str],
    /// Word used for a zero count ("no hours").
    pub none: &'static str,
}

impl Locale {
    /// Find a locale by tag, ignoring ASCII case.
    pub fn lookup(tag: &str) -> Option<&'static Locale> {
        LOCALES.iter().copied().find(|l| l.tag.eq_ignore_ascii_case(tag))
    }

    pub fn default_locale() -> &'static Locale {
        &en_us::EN_US
    }

    pub fn all() -> &'static [&'static Locale] {
        LOCALES
    }

    pub fn tags() -> Vec<&'static str> {
        LOCALES.iter().map(|l| l.tag).collect()
    }
}

impl NumberTable {
    pub fn value_of(&self, word: &str) -> Option<f64> {
        table_lookup!(self.words, word)
    }

    pub fn is_joiner(&self, between: &str) -> bool {
        self.joiners.contains(&between)
    }

    pub fn is_flipper(&self, between: &str) -> bool {
        self.flippers.contains(&between)
    }
}

impl DurationTable {
    pub fn unit_of(&self, name: &str) -> Option<Unit> {
        let needle = name.to_lowercase();
        self.units.iter().find(|u| u.names().any(|n| n == needle)).map(|u| u.unit)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().flat_map(|u| u.names())
    }

    pub fn is_time_joiner(&self, between: &str) -> bool {
        self.time_joiners.contains(&between.trim())
    }

    pub fn is_modifier_joiner(&self, between: &str) -> bool {
        self.modifier_joiners.contains(&between.trim())
    }

    /// "1 hour", "2 hours", "no hours".
    pub fn noun(&self, unit: Unit, count: u64) -> String {
        let Some(names) = self.units.iter().find(|u| u.unit == unit) else {
            return unit.as_str().to_string();
        };
        match count {
            0 => format!("{} {}", self.none, names.plural),
            1 => names.singular.to_string(),
            _ => names.plural.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_rejects_unknown() {
        assert_eq!(Locale::lookup("en-us").map(|l| l.tag), Some("en-US"));
        assert_eq!(Locale::lookup("DE-de").map(|l| l.tag), Some("de-DE"));
        assert!(Locale::lookup("fr-FR").is_none());
        assert_eq!(Locale::default_locale().tag, "en-US");
    }

    #[test]
    fn tags_list_every_locale() {
        assert_eq!(Locale::tags(), vec!["en-US", "de-DE"]);
        assert!(Locale::tags().iter().all(|tag| Locale::lookup(tag).is_some()));
    }

    #[test]
    fn unit_names_resolve_to_units() {
        let en = &Locale::default_locale().durations;
        assert_eq!(en.unit_of("HRS"), Some(Unit::Hour));
        assert_eq!(en.unit_of("ms"), Some(Unit::Millisecond));
        assert_eq!(en.unit_of("m"), Some(Unit::Minute));
        assert_eq!(en.unit_of("fortnight"), None);
    }

    #[test]
    fn joiners_compare_trimmed_text() {
        let en = &Locale::default_locale().durations;
        assert!(en.is_time_joiner(" , "));
        assert!(en.is_time_joiner(" and "));
        assert!(!en.is_time_joiner(". "));
        assert!(en.is_modifier_joiner(" of a "));
    }

    #[test]
    fn tables_have_no_duplicate_words() {
        for locale in Locale::all() {
            let mut words: Vec<&str> = locale.numbers.words.iter().map(|(w, _)| *w).collect();
            let total = words.len();
            words.sort_unstable();
            words.dedup();
            assert_eq!(words.len(), total, "duplicate number word in {}", locale.tag);

            let mut names: Vec<&str> = locale.durations.names().collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate unit name in {}", locale.tag);
        }
    }
}
