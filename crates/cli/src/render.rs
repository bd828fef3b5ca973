//! Terminal and JSON rendering for parsed arguments.

use std::fmt::Display;
use std::io::{self, IsTerminal};

use anyhow::Result;
use ariadne::{Color, Fmt};
use argvee_core::ParsedArguments;
use serde::Serialize;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, human-readable output.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Pick the `--output` choice; without one, parsed arguments are shown
    /// coloured on a terminal and as JSON when stdout is redirected.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ if io::stdout().is_terminal() => Format::Pretty,
            // Scripts piping `argvee` get JSON they can feed to `jq`.
            _ => Format::Json,
        }
    }
}

// ── Pretty rendering ────────────────────────────────────────────────────

const LABEL_WIDTH: usize = 10;

fn label(name: &str) -> String {
    format!("{}", format!("{name:<width$}", width = LABEL_WIDTH).fg(Color::Cyan))
}

/// Print commands, modes, and params as aligned, coloured sections.
pub(crate) fn print_parsed(args: &ParsedArguments) {
    println!("{}{}", label("commands"), join_or_dash(&args.commands));
    println!("{}{}", label("modes"), join_or_dash(&args.modes));

    if args.params.is_empty() {
        println!("{}-", label("params"));
        return;
    }
    for (i, (key, values)) in args.params.iter().enumerate() {
        let head = if i == 0 {
            label("params")
        } else {
            " ".repeat(LABEL_WIDTH)
        };
        let rendered: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
        println!("{head}{} = {}", key.fg(Color::Green), rendered.join(", "));
    }
}

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

// ── Values ──────────────────────────────────────────────────────────────

/// Print selected values: a JSON array, or one value per line.
pub(crate) fn print_values<T>(values: &[T], format: Format) -> Result<()>
where
    T: Serialize + Display,
{
    match format {
        Format::Json => println!("{}", serde_json::to_string(values)?),
        Format::Pretty => {
            for value in values {
                println!("{value}");
            }
        }
    }
    Ok(())
}

/// Print the outcome of a `match` query.
pub(crate) fn print_match(matched: bool, format: Format) -> Result<()> {
    match format {
        Format::Json => println!("{}", serde_json::json!({ "matched": matched })),
        Format::Pretty => {
            let (text, color) = if matched {
                ("match", Color::Green)
            } else {
                ("no match", Color::Red)
            };
            println!("{}", text.fg(color));
        }
    }
    Ok(())
}
