//! Single-pass argument tokenizer.
//!
//! Each token is classified by [`lexer`](crate::lexer) and fed through a small
//! state machine:
//!
//! | state         | `--name` / `-x`          | `-abc`         | plain token                          |
//! |---------------|--------------------------|----------------|--------------------------------------|
//! | `Idle`        | `Pending(name)`          | modes, `Idle`  | command, `Idle`                      |
//! | `Pending(k)`  | `k` to modes, `Pending`  | `k` to modes   | value (opens a quote if `"...`)      |
//! | `Quoted(k)`   | close value, `Pending`   | close value    | append; closes on a trailing `"`     |
//!
//! At end of input a `Pending` key becomes a mode and an unterminated quote
//! keeps whatever was accumulated.

use std::ffi::OsString;

use log::{debug, trace};

use crate::args::ParsedArguments;
use crate::error::{ArgsError, Result};
use crate::lexer::{self, TokKind, Token};
use crate::options::ParseOptions;

const QUOTE: char = '"';

/// Parser state carried from one token to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    /// No flag awaiting a value.
    Idle,
    /// A flag was seen; holds its name as it would be stored as a mode.
    Pending(String),
    /// A quoted value is open; holds the param key it belongs to.
    Quoted(String),
}

/// Accumulates classified tokens into [`ParsedArguments`].
struct Builder<'o> {
    opts: &'o ParseOptions,
    out: ParsedArguments,
}

impl<'o> Builder<'o> {
    fn new(opts: &'o ParseOptions) -> Self {
        Self {
            opts,
            out: ParsedArguments::default(),
        }
    }

    /// Resolve whatever the previous state left open before a new flag.
    fn flush(&mut self, state: State) {
        match state {
            State::Pending(key) => self.out.modes.push(key),
            State::Quoted(key) => debug!("quoted value for `{key}` closed by a flag"),
            State::Idle => {}
        }
    }

    fn push_value(&mut self, key: &str, value: &str) {
        self.out
            .params
            .entry(key.to_owned())
            .or_default()
            .push(value.to_owned());
    }

    fn append_value(&mut self, key: &str, value: &str) {
        if let Some(last) = self.out.params.get_mut(key).and_then(|v| v.last_mut()) {
            last.push(' ');
            last.push_str(value);
        }
    }

    /// Feed one token and return the next state.
    fn advance(&mut self, state: State, tok: Token<'_>) -> State {
        trace!("{:?} <- {:?} {:?}", state, tok.kind, tok.text);
        match tok.kind {
            TokKind::Long => {
                self.flush(state);
                State::Pending(self.opts.fold(tok.text).into_owned())
            }
            TokKind::Short => {
                self.flush(state);
                State::Pending(tok.text.to_owned())
            }
            TokKind::Cluster => {
                self.flush(state);
                self.out.modes.extend(tok.text.chars().map(String::from));
                State::Idle
            }
            TokKind::Plain => self.plain(state, tok.text),
        }
    }

    fn plain(&mut self, state: State, text: &str) -> State {
        match state {
            State::Idle => {
                let command = self.opts.fold(text).into_owned();
                self.out.commands.push(command);
                State::Idle
            }
            State::Pending(flag) => {
                let key = self.opts.fold(&flag).into_owned();
                match text.strip_prefix(QUOTE) {
                    // Opening wins, even for a lone `"` or a token that also
                    // ends in a quote; only a later token can close.
                    Some(inner) => {
                        self.push_value(&key, inner);
                        State::Quoted(key)
                    }
                    None => {
                        self.push_value(&key, text);
                        State::Idle
                    }
                }
            }
            State::Quoted(key) => match text.strip_suffix(QUOTE) {
                Some(inner) => {
                    self.append_value(&key, inner);
                    State::Idle
                }
                None => {
                    self.append_value(&key, text);
                    State::Quoted(key)
                }
            },
        }
    }

    fn finish(mut self, state: State) -> ParsedArguments {
        match state {
            State::Pending(key) => self.out.modes.push(key),
            State::Quoted(key) => debug!("unterminated quoted value for `{key}`"),
            State::Idle => {}
        }
        debug!(
            "parsed {} commands, {} modes, {} params",
            self.out.commands.len(),
            self.out.modes.len(),
            self.out.params.len()
        );
        self.out
    }
}

/// Parse a token sequence with the default options (skip 2, lower-case).
///
/// ```
/// let args = argvee_core::parse(["node", "app.js", "-sn", "--hello=universe"]);
/// assert_eq!(args.modes, ["s", "n"]);
/// assert_eq!(args.params["hello"], ["universe"]);
/// ```
pub fn parse<I, S>(tokens: I) -> ParsedArguments
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse_with_options(tokens, &ParseOptions::default())
}

/// Parse a token sequence with explicit options.
pub fn parse_with_options<I, S>(tokens: I, opts: &ParseOptions) -> ParsedArguments
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let raw: Vec<String> = tokens.into_iter().map(Into::into).collect();
    let mut builder = Builder::new(opts);
    let state =
        lexer::tokenize(&raw, opts.skip).fold(State::Idle, |state, tok| builder.advance(state, tok));
    let mut out = builder.finish(state);
    out.raw_tokens = raw;
    out
}

/// Parse a single command line, splitting it on whitespace first.
///
/// Quotes are not interpreted by the split; `--say "hi there"` still
/// reassembles into one value through the quote state machine.
pub fn parse_line(line: &str, opts: &ParseOptions) -> ParsedArguments {
    parse_with_options(lexer::split_line(line), opts)
}

/// Parse OS-supplied arguments, rejecting any that are not valid UTF-8.
pub fn parse_os<I>(tokens: I, opts: &ParseOptions) -> Result<ParsedArguments>
where
    I: IntoIterator<Item = OsString>,
{
    let raw = tokens
        .into_iter()
        .enumerate()
        .map(|(index, tok)| {
            tok.into_string().map_err(|bad| ArgsError::NonUtf8Token {
                index,
                lossy: bad.to_string_lossy().into_owned(),
            })
        })
        .collect::<Result<Vec<String>>>()?;
    Ok(parse_with_options(raw, opts))
}

/// Parse the current process's arguments with [`ParseOptions::program`].
pub fn parse_env() -> Result<ParsedArguments> {
    parse_env_with_options(&ParseOptions::program())
}

/// Parse the current process's arguments with explicit options.
///
/// `std::env::args_os()` starts with the executable path, so `skip` should
/// usually be 1 here.
pub fn parse_env_with_options(opts: &ParseOptions) -> Result<ParsedArguments> {
    parse_os(std::env::args_os(), opts)
}

/// Parse a JSON array of strings.
///
/// Anything other than an array of strings is rejected before parsing.
pub fn parse_json(value: &serde_json::Value, opts: &ParseOptions) -> Result<ParsedArguments> {
    let items = value.as_array().ok_or(ArgsError::NotASequence {
        found: json_kind(value),
    })?;
    let raw = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(ArgsError::NonTextToken {
                    index,
                    found: json_kind(item),
                })
        })
        .collect::<Result<Vec<String>>>()?;
    Ok(parse_with_options(raw, opts))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
