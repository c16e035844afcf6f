//! Validated value types for the wire identifiers this crate parses and
//! encodes: nicknames, channel names, message recipients, and the `USER`
//! command's two historical field layouts.
//!
//! Every type in this module is constructed through a fallible
//! constructor that enforces the identifier model's grammar once, up
//! front, so the rest of the crate can treat a `ChannelName` or
//! `Nickname` as already-valid.

mod channel;
mod nickname;
mod recipient;
mod user_details;

pub use channel::ChannelName;
pub use nickname::Nickname;
pub use recipient::Recipient;
pub use user_details::UserDetails;
