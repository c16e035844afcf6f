//! Error types for the IRC protocol library.
//!
//! This module defines error types for protocol-level errors, identifier
//! validation, mode parsing, multipart reassembly, and DCC negotiation
//! parsing. Each failure domain gets its own leaf enum; [`ProtocolError`]
//! aggregates them at the top for callers that don't need to match on the
//! specific domain.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ProtocolError {
    /// Failed to parse a raw line into a [`Message`](crate::Message).
    #[error("invalid message: {0}")]
    Message(#[from] MessageParseError),

    /// An identifier (nickname, channel, recipient, tag) failed validation.
    #[error("invalid identifier: {0}")]
    Validation(#[from] ValidationError),

    /// Multipart fragmenting or reassembly failed.
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// DCC negotiation body failed to parse.
    #[error("dcc error: {0}")]
    Dcc(#[from] DccParseError),
}

/// Errors encountered when parsing IRC messages.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line was empty.
    #[error("empty message")]
    EmptyMessage,

    /// A tag blob (`@...`) was present but not followed by a space.
    #[error("malformed tag blob")]
    InvalidTag,

    /// The verb was empty, or the line was otherwise structurally broken.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// A verb was recognized but received the wrong number of arguments.
    #[error("unexpected arguments for {verb}: expected {expected}, got {got}")]
    UnexpectedArguments {
        /// The verb that was being parsed.
        verb: String,
        /// A human-readable description of the expected arity.
        expected: &'static str,
        /// The number of arguments actually supplied.
        got: usize,
    },

    /// `CAP`'s first parameter was not one of `LS`, `LIST`, `REQ`, `ACK`, `NAK`, `END`.
    #[error("invalid CAP subcommand: {0}")]
    InvalidCapSubcommand(String),

    /// Failed to parse a `MODE` letter sequence.
    #[error("invalid mode string: {string}")]
    InvalidModeString {
        /// The raw mode string that failed to parse.
        string: String,
        /// The underlying mode-parse error.
        #[source]
        cause: ModeParseError,
    },

    /// An identifier embedded in the command failed validation.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),

    /// A CTCP body recognized as a DCC negotiation failed to parse.
    #[error("invalid DCC negotiation: {0}")]
    InvalidDcc(#[from] DccParseError),
}

/// Errors encountered when parsing `MODE` mode-letter sequences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModeParseError {
    /// A mode letter that requires a parameter was given none, and is not a
    /// list-type mode (which may be queried bare).
    #[error("mode '{letter}' requires an argument but none was provided")]
    MissingModeArg {
        /// The mode letter that needed an argument.
        letter: char,
    },

    /// More parameters were supplied than the mode letters consumed.
    #[error("unused arguments in mode string")]
    UnusedArguments,
}

/// Errors from validating identifiers (nicknames, channels, recipients, tags).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    /// A nickname failed the nickname grammar.
    #[error("invalid nickname: {0}")]
    InvalidNick(NickError),

    /// A channel name failed the channel grammar.
    #[error("invalid channel name: {0}")]
    InvalidChannel(ChannelError),

    /// A recipient token matched neither a channel prefix, `$*`, nor the
    /// nickname wire form.
    #[error("invalid recipient token")]
    InvalidRecipient,

    /// A tag key did not match the IRCv3 tag-key grammar.
    #[error("invalid tag key")]
    InvalidTag,

    /// `USER`'s four fields didn't match either the RFC 1459 or RFC 2812 form.
    #[error("invalid user details")]
    InvalidUserDetails,
}

/// Specific reasons a nickname failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NickError {
    /// The name was empty.
    Empty,
    /// The name exceeded 32 characters.
    TooLong,
    /// The first character was not an ASCII letter.
    InvalidFirstChar,
    /// A later character was whitespace, a hyphen, or an underscore.
    InvalidChar(char),
}

impl std::fmt::Display for NickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NickError::Empty => write!(f, "name is empty"),
            NickError::TooLong => write!(f, "name exceeds 32 characters"),
            NickError::InvalidFirstChar => write!(f, "first character must be a letter"),
            NickError::InvalidChar(c) => write!(f, "illegal character {c:?}"),
        }
    }
}

/// Specific reasons a channel name failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelError {
    /// Length was outside `[2, 50]`.
    BadLength(usize),
    /// The first byte was not one of `# & + !`.
    MissingPrefix,
    /// A byte was BEL (0x07), space (0x20), or comma (0x2C).
    IllegalByte(u8),
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelError::BadLength(len) => write!(f, "length {len} outside [2, 50]"),
            ChannelError::MissingPrefix => write!(f, "missing # & + ! prefix"),
            ChannelError::IllegalByte(b) => write!(f, "illegal byte 0x{b:02X}"),
        }
    }
}

/// Errors from the multipart fragmenter/reassembler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MultipartError {
    /// A packet's `total_parts` disagreed with the slot's recorded value.
    #[error("inconsistent total_parts for group {group_id}")]
    InconsistentTotal {
        /// The group id of the conflicting slot.
        group_id: String,
    },

    /// `part_number` was outside `[1, total_parts]`.
    #[error("part_number out of range for group {group_id}")]
    PartOutOfRange {
        /// The group id the part belonged to.
        group_id: String,
    },

    /// A part with this index was already stored; the first copy is kept.
    #[error("duplicate part {part_number} for group {group_id}")]
    DuplicatePart {
        /// The group id the duplicate belonged to.
        group_id: String,
        /// The repeated part number.
        part_number: u32,
    },

    /// A part arrived for a group id with no live slot, and wasn't itself a
    /// valid part 1 establishing a fresh slot.
    #[error("orphaned part for unknown group {group_id}")]
    Orphaned {
        /// The group id with no matching slot.
        group_id: String,
    },

    /// The slot expired before all parts arrived.
    #[error("reassembly timed out for group {group_id}")]
    Timeout {
        /// The group id whose slot timed out.
        group_id: String,
    },

    /// The slot was evicted to satisfy `max_in_flight_bytes`.
    #[error("slot evicted for group {group_id}")]
    Evicted {
        /// The group id whose slot was evicted.
        group_id: String,
    },

    /// The packet's binary encoding couldn't be deserialized.
    #[error("failed to deserialize multipart packet: {0}")]
    DeserializeFailure(String),
}

/// Errors from parsing a CTCP body as a DCC negotiation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DccParseError {
    /// The body started with `DCC`/`SDCC` but the sub-verb wasn't recognized.
    #[error("unknown DCC subcommand: {0}")]
    UnknownSubcommand(String),

    /// A required field was missing or failed to parse (port, address, size).
    #[error("malformed DCC field: {0}")]
    MalformedField(String),

    /// The subcommand was recognized but received the wrong number of fields.
    #[error("unexpected arity for DCC {subcommand}: expected {expected}, got {got}")]
    UnexpectedArity {
        /// The DCC subcommand (`SEND`, `CHAT`, ...).
        subcommand: &'static str,
        /// Expected field count description.
        expected: &'static str,
        /// Actual field count.
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MessageParseError::UnexpectedArguments {
            verb: "PRIVMSG".to_string(),
            expected: "2",
            got: 1,
        };
        assert_eq!(
            format!("{}", err),
            "unexpected arguments for PRIVMSG: expected 2, got 1"
        );
    }

    #[test]
    fn test_error_source_chaining() {
        let mode_err = ModeParseError::MissingModeArg { letter: 'o' };
        let parse_err = MessageParseError::InvalidModeString {
            string: "+o".to_string(),
            cause: mode_err.clone(),
        };

        let source = std::error::Error::source(&parse_err);
        assert!(source.is_some());
        assert_eq!(source.unwrap().to_string(), mode_err.to_string());
    }

    #[test]
    fn test_protocol_error_conversion() {
        let parse_err = MessageParseError::EmptyMessage;
        let protocol_err: ProtocolError = parse_err.into();
        match protocol_err {
            ProtocolError::Message(MessageParseError::EmptyMessage) => {}
            _ => panic!("expected Message(EmptyMessage) variant"),
        }
    }

    #[test]
    fn test_multipart_error_display() {
        let err = MultipartError::Timeout {
            group_id: "abc".to_string(),
        };
        assert_eq!(format!("{}", err), "reassembly timed out for group abc");
    }
}
