//! The [`Message`] envelope: tags, origin, command, and (numerics only)
//! the reply target.

use crate::command::Command;
use crate::message::tags::Tag;

/// A complete IRC message: optional IRCv3 tags, an optional origin
/// (server or `nick!user@host` prefix), a command, and — for numeric
/// replies only — the reply's target.
///
/// `target` carries the first positional parameter of a numeric reply
/// (the nickname or `*` the reply is addressed to); every other command
/// embeds its own targets in its [`Command`] fields instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    /// IRCv3 message tags, in the order they appeared (or will appear) on
    /// the wire.
    pub tags: Vec<Tag>,
    /// The message's origin, without the leading `:`.
    pub origin: Option<String>,
    /// The parsed command.
    pub command: Command,
    /// The numeric reply target, if this is a numeric reply.
    pub target: Option<String>,
}

impl Message {
    /// Build a bare message with no tags, origin, or target.
    pub fn new(command: Command) -> Self {
        Message {
            tags: Vec::new(),
            origin: None,
            command,
            target: None,
        }
    }

    /// Attach an origin.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Attach tags.
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = tags;
        self
    }

    /// Attach a numeric reply target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Parse a single CRLF-or-bare line into a `Message`.
    pub fn parse(line: &str) -> Result<Self, crate::error::MessageParseError> {
        crate::message::parse::parse(line)
    }

    /// Render this message to its wire form, without a trailing CRLF.
    ///
    /// `JOIN` with an empty channel list encodes to an empty string.
    pub fn encode(&self) -> String {
        crate::message::encode::encode(self)
    }
}
