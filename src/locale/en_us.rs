use super::{DurationTable, Locale, NumberTable, UnitNames};
use crate::duration::Unit;

pub(super) static EN_US: Locale = Locale {
    tag: "en-US",
    numbers: NumberTable {
        words: &[
            ("half", 0.5),
            ("quarter", 0.25),
            ("qtr", 0.25),
            ("tenth", 0.1),
            ("hundredth", 0.01),
            ("thousandth", 0.001),
            ("zero", 0.0),
            ("one", 1.0),
            ("two", 2.0),
            ("three", 3.0),
            ("four", 4.0),
            ("five", 5.0),
            ("six", 6.0),
            ("seven", 7.0),
            ("eight", 8.0),
            ("nine", 9.0),
            ("ten", 10.0),
            ("eleven", 11.0),
            ("twelve", 12.0),
            ("thirteen", 13.0),
            ("fourteen", 14.0),
            ("fifteen", 15.0),
            ("sixteen", 16.0),
            ("seventeen", 17.0),
            ("eighteen", 18.0),
            ("nineteen", 19.0),
            ("twenty", 20.0),
            ("score", 20.0),
            ("thirty", 30.0),
            ("forty", 40.0),
            ("fifty", 50.0),
            ("sixty", 60.0),
            ("seventy", 70.0),
            ("eighty", 80.0),
            ("ninety", 90.0),
            ("hundred", 100.0),
            ("thousand", 1_000.0),
            ("half-a-mil", 500_000.0),
            ("half-a-mill", 500_000.0),
            ("million", 1_000_000.0),
            ("half-a-bil", 500_000_000.0),
            ("half-a-bill", 500_000_000.0),
            ("billion", 1_000_000_000.0),
        ],
        joiners: &["", " ", " and ", "-", " a ", " of a ", "-a-"],
        flippers: &[],
        compounds: false,
    },
    durations: DurationTable {
        units: &[
            UnitNames {
                unit: Unit::Millennium,
                full: &["millennium", "millennia", "millenniums"],
                short: &[],
                symbol: &[],
                singular: "millennium",
                plural: "millennia",
            },
            UnitNames {
                unit: Unit::Century,
                full: &["centuries", "century"],
                short: &[],
                symbol: &[],
                singular: "century",
                plural: "centuries",
            },
            UnitNames {
                unit: Unit::Decade,
                full: &["decades", "decade"],
                short: &[],
                symbol: &[],
                singular: "decade",
                plural: "decades",
            },
            UnitNames {
                unit: Unit::Year,
                full: &["years", "year"],
                short: &["yrs", "yr"],
                symbol: &["y"],
                singular: "year",
                plural: "years",
            },
            UnitNames {
                unit: Unit::Week,
                full: &["weeks", "week"],
                short: &["wks", "wk"],
                symbol: &[],
                singular: "week",
                plural: "weeks",
            },
            UnitNames {
                unit: Unit::Day,
                full: &["days", "day"],
                short: &["dys", "dy"],
                symbol: &["d"],
                singular: "day",
                plural: "days",
            },
            UnitNames {
                unit: Unit::Hour,
                full: &["hours", "hour"],
                short: &["hrs", "hr"],
                symbol: &["h"],
                singular: "hour",
                plural: "hours",
            },
            UnitNames {
                unit: Unit::Minute,
                full: &["minutes", "minute"],
                short: &["mins", "min"],
                symbol: &["m"],
                singular: "minute",
                plural: "minutes",
            },
            UnitNames {
                unit: Unit::Second,
                full: &["seconds", "second"],
                short: &["secs", "sec"],
                symbol: &["s"],
                singular: "second",
                plural: "seconds",
            },
            UnitNames {
                unit: Unit::Millisecond,
                full: &["milliseconds", "millisecond"],
                short: &["millisecs", "millisec", "msecs", "msec"],
                symbol: &["ms"],
                singular: "millisecond",
                plural: "milliseconds",
            },
        ],
        time_joiners: &[",", ", and", ",and", "and", ""],
        modifier_joiners: &["of an", "of a", "an", "a", ""],
        none: "no",
    },
};
