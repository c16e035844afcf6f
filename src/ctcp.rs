//! CTCP (Client-To-Client Protocol) body framing: the `\x01...\x01`
//! wrapper carried inside `PRIVMSG`/`NOTICE` text, and the [`CtcpPayload`]
//! that further recognizes a DCC negotiation inside it.

use crate::dcc::DccRequest;
use crate::error::DccParseError;

/// The byte that opens and closes a CTCP-quoted body.
pub const DELIMITER: char = '\x01';

/// Wrap `body` in CTCP delimiters.
pub fn wrap(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 2);
    out.push(DELIMITER);
    out.push_str(body);
    out.push(DELIMITER);
    out
}

/// Strip the CTCP delimiters from `text`, returning `None` if it isn't
/// CTCP-quoted (doesn't start and end with `\x01`).
pub fn unwrap(text: &str) -> Option<&str> {
    let stripped = text.strip_prefix(DELIMITER)?;
    stripped.strip_suffix(DELIMITER)
}

/// The body of a CTCP-quoted message: either free-form CTCP text (`VERSION`,
/// `ACTION ...`, `PING <token>`, ...) or a recognized DCC negotiation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CtcpPayload {
    /// Plain CTCP text, not a DCC negotiation.
    Text(String),
    /// A parsed DCC negotiation request.
    Dcc(DccRequest),
}

impl CtcpPayload {
    /// Parse a CTCP body (already stripped of its `\x01` delimiters).
    ///
    /// A body starting with the literal token `DCC`/`SDCC` is parsed as a
    /// DCC negotiation; a malformed one yields the underlying
    /// [`DccParseError`] rather than silently degrading to plain text. A
    /// caller that wants tolerant fallback behavior can catch the error and
    /// construct [`CtcpPayload::Text`] itself.
    pub fn parse(body: &str) -> Result<Self, DccParseError> {
        if is_dcc_candidate(body) {
            return DccRequest::parse(body).map(CtcpPayload::Dcc);
        }
        Ok(CtcpPayload::Text(body.to_string()))
    }

    /// Render this payload back to its CTCP body form.
    pub fn encode(&self) -> String {
        match self {
            CtcpPayload::Text(s) => s.clone(),
            CtcpPayload::Dcc(req) => req.encode(),
        }
    }
}

fn is_dcc_candidate(body: &str) -> bool {
    body.starts_with("DCC") || body.starts_with("SDCC")
}
