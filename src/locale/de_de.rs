use super::{DurationTable, Locale, NumberTable, UnitNames};
use crate::duration::Unit;

// German writes numbers as compounds ("dreiundfünfzigtausend"), so words are
// matched inside longer words and "und" adds instead of multiplying.
pub(super) static DE_DE: Locale = Locale {
    tag: "de-DE",
    numbers: NumberTable {
        words: &[
            ("halb", 0.5),
            ("halbe", 0.5),
            ("viertel", 0.25),
            ("anderthalb", 1.5),
            ("null", 0.0),
            ("ein", 1.0),
            ("eine", 1.0),
            ("eins", 1.0),
            ("zwei", 2.0),
            ("zwo", 2.0),
            ("drei", 3.0),
            ("vier", 4.0),
            ("fünf", 5.0),
            ("sechs", 6.0),
            ("sieben", 7.0),
            ("acht", 8.0),
            ("neun", 9.0),
            ("zehn", 10.0),
            ("elf", 11.0),
            ("zwölf", 12.0),
            ("dreizehn", 13.0),
            ("vierzehn", 14.0),
            ("fünfzehn", 15.0),
            ("sechzehn", 16.0),
            ("siebzehn", 17.0),
            ("achtzehn", 18.0),
            ("neunzehn", 19.0),
            ("zwanzig", 20.0),
            ("dreißig", 30.0),
            ("vierzig", 40.0),
            ("fünfzig", 50.0),
            ("sechzig", 60.0),
            ("siebzig", 70.0),
            ("achtzig", 80.0),
            ("neunzig", 90.0),
            ("hundert", 100.0),
            ("tausend", 1_000.0),
            ("million", 1_000_000.0),
            ("milliarde", 1_000_000_000.0),
        ],
        joiners: &["", " ", "und", " und ", "-"],
        flippers: &["und", " und "],
        compounds: true,
    },
    durations: DurationTable {
        units: &[
            UnitNames {
                unit: Unit::Year,
                full: &["jahren", "jahre", "jahr"],
                short: &["jhr"],
                symbol: &["j"],
                singular: "Jahr",
                plural: "Jahre",
            },
            UnitNames {
                unit: Unit::Week,
                full: &["wochen", "woche"],
                short: &[],
                symbol: &[],
                singular: "Woche",
                plural: "Wochen",
            },
            UnitNames {
                unit: Unit::Day,
                full: &["tagen", "tage", "tag"],
                short: &[],
                symbol: &["t"],
                singular: "Tag",
                plural: "Tage",
            },
            UnitNames {
                unit: Unit::Hour,
                full: &["stunden", "stunde"],
                short: &["std"],
                symbol: &["st", "h"],
                singular: "Stunde",
                plural: "Stunden",
            },
            UnitNames {
                unit: Unit::Minute,
                full: &["minuten", "minute"],
                short: &["min"],
                symbol: &["m"],
                singular: "Minute",
                plural: "Minuten",
            },
            UnitNames {
                unit: Unit::Second,
                full: &["sekunden", "sekunde"],
                short: &["sek"],
                symbol: &["s"],
                singular: "Sekunde",
                plural: "Sekunden",
            },
            UnitNames {
                unit: Unit::Millisecond,
                full: &["millisekunden", "millisekunde"],
                short: &["millisek", "msek"],
                symbol: &["ms"],
                singular: "Millisekunde",
                plural: "Millisekunden",
            },
        ],
        time_joiners: &[",", ", und", ",und", "und", ""],
        modifier_joiners: &["", "ein", "eine", "einer"],
        none: "keine",
    },
};
