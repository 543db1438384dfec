/// Compile a literal pattern once and hand out a `&'static Regex`.
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Look up `$word` in a static `(&str, _)` table, comparing case-insensitively.
macro_rules! table_lookup {
    ($table:expr, $word:expr) => {{
        let needle = $word.to_lowercase();
        $table.iter().find(|(name, _)| *name == needle.as_str()).map(|(_, v)| *v)
    }};
}
