//! `argvee` command-line front end.

mod render;

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use argvee_core::{
    ParseOptions, ParsedArguments, matches_any, parse_json, parse_line, parse_with_options,
    select, select_number, select_string, to_pretty_json,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;

use crate::render::{Format, print_match, print_parsed, print_values};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "argvee",
    version,
    about = "Show how an argument list splits into commands, modes, and params"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Log tokenizer decisions to stderr (same as `RUST_LOG=debug`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Parse tokens and print commands, modes, and params.
    Parse {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the values of one or more param keys, in key order.
    Select {
        /// Param key to look up. Repeat for aliases (`-k p -k port`).
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,
        /// How values are returned.
        #[arg(long = "as", value_enum, default_value_t = SelectKind::Mixed)]
        kind: SelectKind,
        #[command(flatten)]
        input: InputArgs,
    },

    /// Check whether any key is present among the commands or modes.
    /// Exits with status 1 when nothing matches.
    Match {
        /// Which list to search.
        #[arg(long, value_enum)]
        field: Field,
        /// Name to look for. Repeat for aliases (`-k v -k verbose`).
        #[arg(short, long = "key", required = true)]
        keys: Vec<String>,
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Where the tokens come from and how they are parsed.
#[derive(Args, Debug)]
struct InputArgs {
    /// Number of leading tokens to drop before parsing.
    #[arg(long, default_value_t = 0)]
    skip: usize,

    /// Store commands, long modes, and param keys exactly as given.
    #[arg(long)]
    keep_case: bool,

    /// Parse a single command line (split on whitespace) instead of TOKENS.
    #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["stdin_json", "tokens"])]
    line: Option<String>,

    /// Read the tokens from stdin as a JSON array of strings.
    #[arg(long, conflicts_with = "tokens")]
    stdin_json: bool,

    /// Tokens to parse. Place them after `--` so their flags are not taken
    /// as argvee's own.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

/// Value conversion for the `select` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectKind {
    /// Numbers where a value parses as one, text otherwise.
    Mixed,
    /// Every value as text.
    String,
    /// Numeric values only; the rest are dropped.
    Number,
}

/// List searched by the `match` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Field {
    /// Unflagged tokens.
    Commands,
    /// Boolean flags.
    Modes,
}

impl InputArgs {
    fn options(&self) -> ParseOptions {
        ParseOptions::default()
            .with_skip(self.skip)
            .with_lower_case(!self.keep_case)
    }

    fn parse(&self) -> Result<ParsedArguments> {
        let opts = self.options();
        debug!("parse options: {opts:?}");

        if let Some(line) = &self.line {
            return Ok(parse_line(line, &opts));
        }

        if self.stdin_json {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("failed to read stdin")?;
            let value: serde_json::Value =
                serde_json::from_str(&body).context("stdin is not valid JSON")?;
            return parse_json(&value, &opts).context("invalid token list on stdin");
        }

        Ok(parse_with_options(self.tokens.iter().cloned(), &opts))
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Parse { input } => cmd_parse(&input, format)?,
        Cmd::Select { keys, kind, input } => cmd_select(&input, &keys, kind, format)?,
        Cmd::Match { field, keys, input } => cmd_match(&input, field, &keys, format)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_parse(input: &InputArgs, format: Format) -> Result<()> {
    let args = input.parse()?;
    match format {
        Format::Json => println!("{}", to_pretty_json(&args)),
        Format::Pretty => print_parsed(&args),
    }
    Ok(())
}

fn cmd_select(input: &InputArgs, keys: &[String], kind: SelectKind, format: Format) -> Result<()> {
    let args = input.parse()?;
    match kind {
        SelectKind::Mixed => print_values(&select(&args.params, keys), format)?,
        SelectKind::String => print_values(&select_string(&args.params, keys), format)?,
        SelectKind::Number => print_values(&select_number(&args.params, keys), format)?,
    }
    Ok(())
}

fn cmd_match(input: &InputArgs, field: Field, keys: &[String], format: Format) -> Result<()> {
    let args = input.parse()?;
    let list = match field {
        Field::Commands => &args.commands,
        Field::Modes => &args.modes,
    };
    let matched = matches_any(list, keys);
    print_match(matched, format)?;

    if !matched {
        process::exit(1);
    }
    Ok(())
}
