//! Options controlling how a token sequence is parsed.

use serde::{Deserialize, Serialize};

/// Default number of leading tokens dropped before parsing: the interpreter
/// and script path of a conventional `argv` (`node app.js ...`).
pub const DEFAULT_SKIP: usize = 2;

/// Leading tokens carried by Rust's own `std::env::args_os()`: the
/// executable path only.
pub const PROGRAM_SKIP: usize = 1;

/// Parse options.
///
/// Defaults match the conventional interpreter-plus-script argument vector:
/// - `skip`: 2
/// - `lower_case`: true
///
/// Deserializes with missing fields taking their defaults, so the options can
/// be embedded in a host application's own configuration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Number of leading tokens to drop before classification. A value larger
    /// than the input yields an empty result.
    pub skip: usize,
    /// Lower-case commands, long mode names, and param keys as they are
    /// stored. Single-character modes and param values are never changed.
    pub lower_case: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            lower_case: true,
        }
    }
}

impl ParseOptions {
    /// Options for parsing the current process's arguments as returned by
    /// `std::env::args_os()`.
    pub fn program() -> Self {
        Self::default().with_skip(PROGRAM_SKIP)
    }

    /// Set the number of leading tokens to drop.
    #[must_use]
    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }

    /// Enable or disable case folding.
    #[must_use]
    pub fn with_lower_case(mut self, lower_case: bool) -> Self {
        self.lower_case = lower_case;
        self
    }

    /// Apply case folding to a name if enabled.
    pub(crate) fn fold<'a>(&self, name: &'a str) -> std::borrow::Cow<'a, str> {
        if self.lower_case {
            std::borrow::Cow::Owned(name.to_lowercase())
        } else {
            std::borrow::Cow::Borrowed(name)
        }
    }
}
