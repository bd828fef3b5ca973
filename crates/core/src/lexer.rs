/// Classification of a single argument token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokKind {
    /// `--name`: a long flag. May become a mode or a param key.
    Long,
    /// `-x`: a single-character short flag. May become a mode or a param key.
    Short,
    /// `-abc`: combined short flags, each character an independent mode.
    Cluster,
    /// Anything without a leading dash: a command or a param value.
    Plain,
}

/// A classified token that borrows its text from the input.
///
/// `text` is the token with its flag prefix removed: `--name` gives `name`,
/// `-abc` gives `abc`, and plain tokens are carried verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The classification of this token.
    pub kind: TokKind,
    /// Borrowed token text, without the flag prefix.
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Classify one preprocessed token.
    ///
    /// A bare `-` is a cluster of zero flags and therefore contributes nothing.
    /// A bare `--` is a long flag with an empty name.
    pub fn classify(part: &'a str) -> Self {
        if let Some(name) = part.strip_prefix("--") {
            return Token {
                kind: TokKind::Long,
                text: name,
            };
        }
        if let Some(flags) = part.strip_prefix('-') {
            let mut chars = flags.chars();
            let kind = match (chars.next(), chars.next()) {
                (Some(_), None) => TokKind::Short,
                _ => TokKind::Cluster,
            };
            return Token { kind, text: flags };
        }
        Token {
            kind: TokKind::Plain,
            text: part,
        }
    }
}

/// Drop the first `skip` tokens and split every remaining token on `=`.
///
/// `--key=value` and `-k=value` become two tokens each, so both forms share
/// the space-separated code path. A value that itself contains `=` is split
/// as well; that is a known limitation of the format.
pub fn expand<'a, S>(raw: &'a [S], skip: usize) -> impl Iterator<Item = &'a str>
where
    S: AsRef<str>,
{
    raw.iter().skip(skip).flat_map(|t| t.as_ref().split('='))
}

/// Tokenize expanded input into classified tokens.
pub fn tokenize<'a, S>(raw: &'a [S], skip: usize) -> impl Iterator<Item = Token<'a>>
where
    S: AsRef<str>,
{
    expand(raw, skip).map(Token::classify)
}

/// Split a single command line into tokens.
///
/// Every whitespace character is a separator, so runs of whitespace produce
/// empty tokens in between. No quoting is interpreted here; quoted values are
/// reassembled later by the parser.
pub fn split_line(line: &str) -> Vec<String> {
    line.split(char::is_whitespace).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(raw: &[&str]) -> Vec<(TokKind, String)> {
        tokenize(raw, 0).map(|t| (t.kind, t.text.to_string())).collect()
    }

    #[test]
    fn classifies_flag_shapes() {
        assert_eq!(
            kinds(&["--verbose", "-v", "-abc", "serve"]),
            vec![
                (TokKind::Long, "verbose".into()),
                (TokKind::Short, "v".into()),
                (TokKind::Cluster, "abc".into()),
                (TokKind::Plain, "serve".into()),
            ]
        );
    }

    #[test]
    fn single_multibyte_char_is_short() {
        assert_eq!(Token::classify("-é").kind, TokKind::Short);
    }

    #[test]
    fn bare_dashes() {
        assert_eq!(Token::classify("-"), Token { kind: TokKind::Cluster, text: "" });
        assert_eq!(Token::classify("--"), Token { kind: TokKind::Long, text: "" });
    }

    #[test]
    fn equals_splits_before_classification() {
        let raw = ["node", "app.js", "--key=value", "-k=v", "a=b=c"];
        let parts: Vec<&str> = expand(&raw, 2).collect();
        assert_eq!(parts, ["--key", "value", "-k", "v", "a", "b", "c"]);
    }

    #[test]
    fn trailing_equals_yields_empty_value() {
        let raw = ["--key="];
        let parts: Vec<&str> = expand(&raw, 0).collect();
        assert_eq!(parts, ["--key", ""]);
    }

    #[test]
    fn skip_past_end_is_empty() {
        let raw = ["node"];
        assert_eq!(expand(&raw, 5).count(), 0);
    }

    #[test]
    fn split_line_splits_on_each_whitespace_char() {
        assert_eq!(split_line("a b\tc"), ["a", "b", "c"]);
        assert_eq!(split_line("a  b"), ["a", "", "b"]);
    }
}
