mod debug_report;

use babble::{DURATIONS, Format, Locale, NUMBERS, parse_verbose, registry};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_tracing();

    let res = match parse_verbose(&config.kind, &config.input, config.locale.as_deref()) {
        Ok(res) => res,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if config.digify {
        println!("{}", res.result.digify());
    } else {
        debug_report::print_run(&config.input, &res, &config.format, config.color);
    }
}

struct CliConfig {
    input: String,
    locale: Option<String>,
    kind: String,
    format: Format,
    digify: bool,
    color: bool,
}

/// Install a stderr subscriber when `BABBLE_LOG` names a level.
fn init_tracing() {
    let Ok(value) = std::env::var("BABBLE_LOG") else {
        return;
    };
    match value.parse::<tracing::Level>() {
        Ok(level) => tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init(),
        Err(_) => eprintln!("warning: ignoring BABBLE_LOG='{value}' (expected error, warn, info, debug or trace)"),
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut locale: Option<String> = None;
    let mut kind = DURATIONS.to_string();
    let mut format = Format::default();
    let mut digify = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("babble {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--digify" => digify = true,
            "--locale" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --locale expects a value".to_string())?;
                locale = Some(value);
            }
            "--kind" | "-k" => {
                let value = args.next().ok_or_else(|| "error: --kind expects a value".to_string())?;
                kind = parse_kind(&value)?;
            }
            "--format" | "-f" => {
                let value = args.next().ok_or_else(|| "error: --format expects a value".to_string())?;
                format = parse_format(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--locale=") => {
                locale = Some(arg.trim_start_matches("--locale=").to_string());
            }
            _ if arg.starts_with("--kind=") => {
                kind = parse_kind(arg.trim_start_matches("--kind="))?;
            }
            _ if arg.starts_with("--format=") => {
                format = parse_format(arg.trim_start_matches("--format="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            // "-5 minutes" is input, not an option.
            _ if arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, locale, kind, format, digify, color })
}

fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
    if input.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *input = Some(value);
    Ok(())
}

fn parse_kind(value: &str) -> Result<String, String> {
    let registry = registry();
    if registry.is_registered(value) {
        Ok(value.to_string())
    } else {
        Err(format!("error: invalid --kind '{value}' (expected one of: {})", registry.names().join(", ")))
    }
}

fn parse_format(value: &str) -> Result<Format, String> {
    value.parse::<Format>().map_err(|err| format!("error: {err}"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "babble {version}

Find numbers and durations in free text.

Usage:
  babble [OPTIONS] [--] <input...>
  babble [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  -k, --kind <name>          Resolver to run: {NUMBERS} or {DURATIONS}.
                             Default: {DURATIONS}
  -l, --locale <tag>         Locale tag ({locales}). Default: the resolver's default.
  -f, --format <style>       Duration rendering: years, days, hours, minutes, seconds,
                             milliseconds, :, :minutes, hm, hms, hmsms.
                             Default: milliseconds
  --digify                   Print the input with every match replaced by its value.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  BABBLE_LOG=<level>         Log to stderr (error, warn, info, debug, trace).

Exit codes:
  0  Success.
  1  Parse error (for example an unsupported locale).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        locales = Locale::tags().join(", "),
    )
}
