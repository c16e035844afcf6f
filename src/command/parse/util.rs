//! Shared helpers for the per-verb argument parsers.

use crate::error::MessageParseError;
use crate::identifier::ChannelName;

/// Split a comma-separated parameter into its owned pieces, dropping empty
/// segments (a trailing or doubled comma should not produce phantom
/// entries).
pub(super) fn split_comma(s: &str) -> Vec<String> {
    s.split(',')
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse a comma-separated parameter into validated channel names.
pub(super) fn parse_channels(s: &str) -> Result<Vec<ChannelName>, MessageParseError> {
    split_comma(s)
        .into_iter()
        .map(|name| ChannelName::new(&name).map_err(MessageParseError::from))
        .collect()
}

/// Build the `UnexpectedArguments` error for a verb/arity mismatch.
pub(super) fn arity_error(verb: &str, expected: &'static str, got: usize) -> MessageParseError {
    MessageParseError::UnexpectedArguments {
        verb: verb.to_string(),
        expected,
        got,
    }
}
