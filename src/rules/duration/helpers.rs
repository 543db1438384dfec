use regex::{Captures, Regex};

use crate::duration::Unit;

/// Case-insensitive alternation over unit names, longest first, in capture
/// group 1. A name has to start a word or directly follow a digit ("1hr").
pub fn unit_pattern<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    names.dedup();

    let alternation = names.iter().map(|n| regex::escape(n)).collect::<Vec<_>>().join("|");
    format!(r"(?i)(?:\b|[0-9])({alternation})")
}

/// A unit name glued to following letters is part of another word ("h" in "half").
pub fn continues_word(input: &str, end: usize) -> bool {
    input.get(end..).and_then(|rest| rest.chars().next()).is_some_and(char::is_alphabetic)
}

/// `h:m`, `h:m:s` or `d:h:m:s`, with an optional fraction of a second.
pub fn clock_regex() -> &'static Regex {
    regex!(r"([0-9]+):([0-9]+)(?::([0-9]+))?(?::([0-9]+))?(?:\.([0-9]{1,3}))?")
}

/// Milliseconds of a clock literal matched by [`clock_regex`].
///
/// Two parts read as `h:m`, three as `h:m:s`, four as `d:h:m:s`. The optional
/// fraction is a fraction of a second: `.5` is 500 ms, `.05` is 50 ms.
pub fn clock_millis(caps: &Captures<'_>) -> Option<f64> {
    let parts: Vec<f64> = (1..=4)
        .filter_map(|i| caps.get(i))
        .map(|m| m.as_str().parse::<f64>().ok())
        .collect::<Option<Vec<_>>>()?;

    let units: &[Unit] = match parts.len() {
        2 => &[Unit::Hour, Unit::Minute],
        3 => &[Unit::Hour, Unit::Minute, Unit::Second],
        4 => &[Unit::Day, Unit::Hour, Unit::Minute, Unit::Second],
        _ => return None,
    };

    let whole: f64 = parts.iter().zip(units).map(|(n, unit)| n * unit.millis() as f64).sum();
    let fraction = match caps.get(5) {
        Some(m) => {
            let digits = m.as_str();
            let scale = 10f64.powi(3 - digits.len() as i32);
            digits.parse::<f64>().ok()? * scale
        }
        None => 0.0,
    };
    Some(whole + fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock(text: &str) -> Option<f64> {
        clock_regex().captures(text).and_then(|caps| clock_millis(&caps))
    }

    #[test]
    fn clock_parts_map_to_units() {
        assert_eq!(clock("1:30"), Some(5_400_000.0));
        assert_eq!(clock("1:30:30.5"), Some(5_430_500.0));
        assert_eq!(clock("0:00:01.05"), Some(1_050.0));
        assert_eq!(clock("2:01:00:00"), Some(2.0 * 86_400_000.0 + 3_600_000.0));
    }

    #[test]
    fn unit_pattern_orders_longest_first() {
        assert_eq!(unit_pattern(["h", "hours", "hr"]), r"(?i)(?:\b|[0-9])(hours|hr|h)");
    }

    #[test]
    fn trailing_letters_continue_a_word() {
        assert!(continues_word("half", 1));
        assert!(!continues_word("1h30", 2));
        assert!(!continues_word("2h", 2));
    }
}
