//! DCC negotiation framing: the `DCC`/`SDCC_*` sub-grammar carried inside a
//! CTCP-wrapped `PRIVMSG`/`NOTICE` body.
//!
//! This module has no notion of an IRC line; it only knows how to turn the
//! text between the `\x01` CTCP delimiters into a [`DccRequest`] and back.
//! Socket establishment, file I/O, and passive-DCC rendezvous are the
//! caller's problem.

mod parse;
mod tokenize;

use std::net::IpAddr;

use crate::error::DccParseError;

pub use parse::{encode, parse};

/// A parsed DCC negotiation request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DccRequest {
    /// `DCC CHAT chat <address> <port>`.
    Chat {
        /// The address the chat listener is bound to.
        address: IpAddr,
        /// The port the chat listener is bound to.
        port: u16,
    },
    /// `DCC SEND <filename> <address> <port> [<size>] [<token>]`.
    Send {
        /// The offered file's name.
        filename: String,
        /// The address the sender is listening on (or, for passive DCC,
        /// the requester's address).
        address: IpAddr,
        /// The port the sender is listening on.
        port: u16,
        /// The file's size in bytes, if advertised.
        size: Option<u64>,
        /// A passive-DCC rendezvous token, if present.
        token: Option<String>,
    },
    /// `DCC RESUME <filename> <port> <position>`.
    Resume {
        /// The file being resumed.
        filename: String,
        /// The port of the original `SEND` offer.
        port: u16,
        /// The byte offset to resume from.
        position: u64,
    },
    /// `DCC ACCEPT <filename> <port> <position>`.
    Accept {
        /// The file being resumed.
        filename: String,
        /// The port of the original `SEND` offer.
        port: u16,
        /// The byte offset the sender should resume from.
        position: u64,
    },
    /// `SDCC_*` wraps any of the above with no change to the inner grammar;
    /// only the verb token distinguishes secure negotiation.
    Secure(Box<DccRequest>),
}

impl DccRequest {
    /// Parse a CTCP body (already unwrapped from its `\x01` delimiters) as
    /// a DCC negotiation.
    pub fn parse(body: &str) -> Result<Self, DccParseError> {
        parse::parse(body)
    }

    /// Render this request back to its CTCP body form.
    pub fn encode(&self) -> String {
        parse::encode(self)
    }
}
