//! Shared test helpers for `argvee_core` integration tests.

#![allow(unreachable_pub)]

use argvee_core::{ParseOptions, ParsedArguments, parse_with_options};

/// Split a command line on single spaces, the way a shell without quoting
/// would hand it to a process.
#[allow(dead_code)]
pub fn argv(line: &str) -> Vec<String> {
    line.split(' ').map(str::to_owned).collect()
}

/// Parse a `node script.js ...` style line with default options.
#[allow(dead_code)]
pub fn parse_argv(line: &str) -> ParsedArguments {
    argvee_core::parse(argv(line))
}

/// Parse a `node script.js ...` style line with case folding disabled.
#[allow(dead_code)]
pub fn parse_argv_keep_case(line: &str) -> ParsedArguments {
    parse_with_options(argv(line), &ParseOptions::default().with_lower_case(false))
}

/// Upper bound on classified entries: one per token after skipping and `=`
/// splitting, except that a `-abc` cluster counts once per character.
#[allow(dead_code)]
pub fn flag_units(raw: &[String], skip: usize) -> usize {
    raw.iter()
        .skip(skip)
        .flat_map(|t| t.split('='))
        .map(|part| match part.strip_prefix('-') {
            Some(rest) if !rest.starts_with('-') => rest.chars().count().max(1),
            _ => 1,
        })
        .sum()
}

/// Number of values stored across all params.
#[allow(dead_code)]
pub fn param_value_count(args: &ParsedArguments) -> usize {
    args.params.values().map(Vec::len).sum()
}
