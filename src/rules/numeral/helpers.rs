/// Render a number the way it is substituted back into text: whole values
/// without a decimal point, everything else with the shortest exact form.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        // `as i64` also turns -0.0 into "0".
        (value as i64).to_string()
    } else {
        value.to_string()
    }
}

/// Number of integer digits of `|value|`: `0` for fractions, `1` for zero.
pub fn digit_count(value: f64) -> u32 {
    let abs_val = value.abs();
    if abs_val == 0.0 {
        return 1;
    }
    if !abs_val.is_finite() {
        return u32::MAX;
    }

    let mut n = abs_val.trunc();
    let mut digits = 0u32;
    while n >= 1.0 {
        digits += 1;
        n = (n / 10.0).trunc();
    }
    digits
}

/// Clamp an overflowed product to the largest finite value of the same sign.
pub fn saturate(value: f64) -> f64 {
    if value.is_finite() { value } else { f64::MAX.copysign(value) }
}

/// Parse a digit literal such as `"42"`, `"-3"` or `"2.5"`.
pub fn parse_literal(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Build one case-insensitive alternation over `words`, longest first so a
/// word always wins over its own prefixes ("sixteen" before "six").
///
/// Without `compounds`, every word has to sit on word boundaries.
pub fn word_pattern<'a>(words: impl IntoIterator<Item = &'a str>, compounds: bool) -> String {
    let mut words: Vec<&str> = words.into_iter().collect();
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
    words.dedup();

    let alternation = words.iter().map(|w| regex::escape(w)).collect::<Vec<_>>().join("|");
    if compounds { format!("(?i)(?:{alternation})") } else { format!(r"(?i)\b(?:{alternation})\b") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_by_magnitude() {
        assert_eq!(digit_count(0.0), 1);
        assert_eq!(digit_count(0.5), 0);
        assert_eq!(digit_count(7.0), 1);
        assert_eq!(digit_count(-42.0), 2);
        assert_eq!(digit_count(100.0), 3);
        assert_eq!(digit_count(1_000.0), 4);
        assert_eq!(digit_count(12.75), 2);
        assert_eq!(digit_count(1e9), 10);
        assert_eq!(digit_count(f64::MAX), 309);
        assert_eq!(digit_count(f64::INFINITY), u32::MAX);
    }

    #[test]
    fn saturate_keeps_values_finite() {
        assert_eq!(saturate(12.5), 12.5);
        assert_eq!(saturate(f64::INFINITY), f64::MAX);
        assert_eq!(saturate(f64::NEG_INFINITY), -f64::MAX);
        assert!(!format_number(saturate(1e300 * 1e300)).contains("inf"));
    }

    #[test]
    fn format_number_drops_trailing_zero_fraction() {
        assert_eq!(format_number(1_653_001.0), "1653001");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn word_pattern_prefers_longer_words() {
        let pattern = word_pattern(["six", "sixteen", "sixty"], false);
        assert_eq!(pattern, r"(?i)\b(?:sixteen|sixty|six)\b");

        let pattern = word_pattern(["drei", "dreizehn"], true);
        assert_eq!(pattern, "(?i)(?:dreizehn|drei)");
    }
}
