use babble::{Format, Locale, ParseResultVerbose, Token, Value};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s, color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s, DIM)
        }

        fn wrap(&self, s: impl AsRef<str>, code: &str) -> String {
            if self.enabled { format!("{}{}{}", code, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// How deep the token tree is printed: durations, segments, numbers, number segments, words.
const MAX_DEPTH: usize = 5;

pub fn print_run(input: &str, res: &ParseResultVerbose, format: &Format, color: bool) {
    let palette = ansi::Palette::new(color);
    let locale = Locale::lookup(res.result.locale).unwrap_or_else(Locale::default_locale);

    println!(
        "\n{}",
        palette.bold(palette.paint(format!("⚙  {} ({}): \"{}\"", res.details.resolver, locale.tag, input.trim()), ansi::CYAN))
    );

    if !res.details.assistants.is_empty() {
        println!("\n{}", palette.paint("━━━ Assistants ━━━", ansi::GRAY));
        for assistant in &res.details.assistants {
            println!(
                "  {} {}  {}",
                palette.paint(format!("{}:", assistant.name), ansi::BLUE),
                if assistant.tokens > 0 {
                    palette.paint(format!("✓ {} tokens", assistant.tokens), ansi::GREEN)
                } else {
                    palette.dim(format!("✗ {} tokens", assistant.tokens))
                },
                palette.dim(format!("{:?}", assistant.elapsed)),
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Results ━━━", ansi::GRAY));
    if res.result.tokens.is_empty() {
        println!("{}", palette.dim("  No tokens produced"));
        println!("\n{}", palette.dim("  Tip: Set BABBLE_LOG=trace to see every match and segment decision"));
    } else {
        for (idx, token) in res.result.tokens.iter().enumerate() {
            println!(
                "  {} {} {} {}",
                palette.paint(format!("[{idx}]"), ansi::GRAY),
                palette.bold(palette.paint(render_value(&token.value, format, locale), ansi::GREEN)),
                palette.dim("│"),
                palette.paint(format!("span {}..{} \"{}\"", token.start(), token.end(), token.text), ansi::YELLOW),
            );
            for child in &token.children {
                print_tree(child, 1, &palette);
            }
        }
        println!("\n  {} {}", palette.dim("digified:"), res.result.digify());
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Assistants: {}  │  Resolve: {}",
        palette.paint(format!("{:?}", res.details.total), ansi::GREEN),
        palette.paint(format!("{:?}", res.details.total.saturating_sub(res.details.resolve)), ansi::CYAN),
        palette.dim(format!("{:?}", res.details.resolve)),
    );
    println!();
}

fn print_tree(token: &Token, depth: usize, palette: &ansi::Palette) {
    if depth > MAX_DEPTH {
        return;
    }
    println!(
        "{}{} {} {}",
        "    ".repeat(depth),
        palette.paint(token.kind.as_str(), ansi::BLUE),
        palette.paint(token.value.to_string(), ansi::GREEN),
        palette.dim(format!("\"{}\"", token.text)),
    );
    for child in &token.children {
        print_tree(child, depth + 1, palette);
    }
}

fn render_value(value: &Value, format: &Format, locale: &Locale) -> String {
    match value {
        Value::Duration(d) => format!("{} ({} ms)", d.format_in(format, locale), d.as_millis()),
        Value::Number(_) => value.to_string(),
    }
}
