//! argvee core library.
//!
//! Tokenizes command-line arguments into commands, modes, and params, and
//! provides selectors for querying the result. The main entry points are
//! [`parse`] for parsing a token sequence and [`select`],
//! [`select_string`], [`select_number`], and [`matches_any`] for lookups.
//!
//! ```
//! use argvee_core::{parse, select, ParamValue};
//!
//! let args = parse(["node", "app.js", "serve", "-p", "8080", "--host", "localhost"]);
//! assert_eq!(args.commands, ["serve"]);
//! assert_eq!(
//!     select(&args.params, &["p", "host"]),
//!     [ParamValue::Number(8080.0), ParamValue::Text("localhost")],
//! );
//! ```

#![warn(missing_docs)]

/// The parsed argument structure and its convenience lookups.
pub mod args;
/// JSON serialization helpers for parsed arguments.
pub mod dump;
/// Boundary errors for argument input.
pub mod error;
/// Token preprocessing and classification.
pub mod lexer;
/// Parse options (skip count, case folding).
pub mod options;
/// The single-pass tokenizer state machine and parse entry points.
pub mod parser;
/// Stateless query helpers over parsed arguments.
pub mod select;

// ── Convenience re-exports ──────────────────────────────────────────────────

// Parser
pub use parser::{
    parse, parse_env, parse_env_with_options, parse_json, parse_line, parse_os,
    parse_with_options,
};

// Data model
pub use args::{Params, ParsedArguments};

// Options
pub use options::ParseOptions;

// Errors
pub use error::{ArgsError, Result};

// Selectors
pub use select::{ParamValue, matches_any, parse_number, select, select_number, select_string};

// Serialization helpers
pub use dump::to_pretty_json;
