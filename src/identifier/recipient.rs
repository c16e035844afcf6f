//! Recipient token: channel, nickname, or the `$*` wildcard.

use std::fmt;

use crate::error::ValidationError;
use crate::identifier::{ChannelName, Nickname};

/// A parsed message recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recipient {
    /// A channel target.
    Channel(ChannelName),
    /// A single nickname target (wire form `name_<uuid>`).
    Nick(Nickname),
    /// The `$*` wildcard, matching everyone.
    All,
}

impl Recipient {
    /// Parse a single recipient token.
    ///
    /// A token starting with a channel prefix (`# & + !`) is parsed as a
    /// channel; the literal `$*` is the wildcard; otherwise the token is
    /// parsed as a nickname's wire form.
    pub fn parse(token: &str) -> Result<Self, ValidationError> {
        if token == "$*" {
            return Ok(Recipient::All);
        }

        if token
            .chars()
            .next()
            .is_some_and(|c| matches!(c, '#' | '&' | '+' | '!'))
        {
            return ChannelName::new(token).map(Recipient::Channel);
        }

        Nickname::parse(token)
            .map(Recipient::Nick)
            .map_err(|_| ValidationError::InvalidRecipient)
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Channel(c) => write!(f, "{c}"),
            Recipient::Nick(n) => write!(f, "{n}"),
            Recipient::All => write!(f, "$*"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn parses_channel() {
        let r = Recipient::parse("#general").unwrap();
        assert!(matches!(r, Recipient::Channel(_)));
    }

    #[test]
    fn parses_wildcard() {
        assert_eq!(Recipient::parse("$*").unwrap(), Recipient::All);
    }

    #[test]
    fn parses_nick_wire_form() {
        let id = Uuid::new_v4();
        let token = format!("alice_{id}");
        let r = Recipient::parse(&token).unwrap();
        assert!(matches!(r, Recipient::Nick(_)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Recipient::parse("not a valid token").is_err());
    }

    #[test]
    fn renders_identically() {
        let id = Uuid::new_v4();
        let token = format!("alice_{id}");
        let r = Recipient::parse(&token).unwrap();
        assert_eq!(r.to_string(), token);
    }
}
