use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::select::{self, ParamValue};

/// Param key to its values, in the order they appeared on the command line.
pub type Params = BTreeMap<String, Vec<String>>;

/// The result of parsing one argument sequence.
///
/// Built once by [`crate::parse`] and never modified by the selectors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedArguments {
    /// The original input, untouched (including any skipped prefix).
    pub raw_tokens: Vec<String>,
    /// Unflagged tokens that were not consumed as param values.
    pub commands: Vec<String>,
    /// Boolean flags, in order of appearance.
    pub modes: Vec<String>,
    /// Flags that carried one or more values.
    pub params: Params,
}

impl ParsedArguments {
    /// True if at least one of `keys` is a command.
    pub fn has_command<K: AsRef<str>>(&self, keys: &[K]) -> bool {
        select::matches_any(&self.commands, keys)
    }

    /// True if at least one of `keys` is a mode.
    pub fn has_mode<K: AsRef<str>>(&self, keys: &[K]) -> bool {
        select::matches_any(&self.modes, keys)
    }

    /// Text values of every key in `keys`, see [`select::select_string`].
    pub fn strings<K: AsRef<str>>(&self, keys: &[K]) -> Vec<&str> {
        select::select_string(&self.params, keys)
    }

    /// Values of every key in `keys` with numbers converted, see
    /// [`select::select`].
    pub fn values<K: AsRef<str>>(&self, keys: &[K]) -> Vec<ParamValue<'_>> {
        select::select(&self.params, keys)
    }

    /// Numeric values of every key in `keys`, see [`select::select_number`].
    pub fn numbers<K: AsRef<str>>(&self, keys: &[K]) -> Vec<f64> {
        select::select_number(&self.params, keys)
    }

    /// The first value of the first key in `keys` that is present.
    ///
    /// Handy for aliases: `args.first(&["p", "port"])`.
    pub fn first<K: AsRef<str>>(&self, keys: &[K]) -> Option<&str> {
        keys.iter()
            .filter_map(|k| self.params.get(k.as_ref()))
            .find_map(|values| values.first())
            .map(String::as_str)
    }

    /// True if nothing was classified (the raw tokens may still be present).
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.modes.is_empty() && self.params.is_empty()
    }
}
