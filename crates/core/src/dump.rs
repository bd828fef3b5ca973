use crate::args::ParsedArguments;

/// Serialize parsed arguments to a pretty-printed JSON string.
pub fn to_pretty_json(args: &ParsedArguments) -> String {
    serde_json::to_string_pretty(args).expect("ParsedArguments serialization cannot fail")
}
