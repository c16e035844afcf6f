//! # ircwire
//!
//! An IRC wire protocol codec for RFC 1459/2812 plus the IRCv3
//! message-tag extension, augmented with two custom protocol layers:
//! DCC negotiation framing and a multipart chunking scheme for
//! payloads larger than one 512-byte IRC line.
//!
//! The crate is organized leaves-first:
//!
//! - [`identifier`] — validated value types for nicknames, channel
//!   names, recipients, and `USER` details. Pure, no I/O.
//! - [`message`] and [`command`] — the [`Message`] envelope and the
//!   [`Command`] algebraic type enumerating every verb this crate
//!   understands.
//! - [`mode`] — the `MODE` mode-letter grammar shared by channel and
//!   user modes.
//! - [`ctcp`] and [`dcc`] — CTCP body framing and the DCC negotiation
//!   sub-grammar carried inside it.
//! - [`multipart`] — the fragmenter/reassembler pair that carries
//!   oversized payloads across many IRC lines.
//!
//! ## Quick start
//!
//! ```
//! use ircwire::Message;
//!
//! let raw = "@time=2023-01-01T12:00:00Z :alice!alice@host PRIVMSG #general :Hello, world!";
//! let message = Message::parse(raw).expect("valid IRC message");
//! assert_eq!(message.encode(), raw);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod casemap;
pub mod command;
pub mod ctcp;
pub mod dcc;
pub mod error;
pub mod identifier;
pub mod message;
pub mod mode;
pub mod multipart;
pub mod validation;

pub use self::casemap::{irc_eq, irc_to_lower};
pub use self::command::{CapSubCommand, Command};
pub use self::ctcp::CtcpPayload;
pub use self::dcc::DccRequest;
pub use self::error::{
    ChannelError, DccParseError, MessageParseError, ModeParseError, MultipartError, NickError,
    ProtocolError, ValidationError,
};
pub use self::identifier::{ChannelName, Nickname, Recipient, UserDetails};
pub use self::message::{Message, Tag};
pub use self::mode::{ChannelMode, Mode, UserMode};
pub use self::multipart::{Buffering, Fragmenter, FragmenterConfig, MultipartPacket, Outcome, Payload, Reassembler, ReassemblyConfig};
