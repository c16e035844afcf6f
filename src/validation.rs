//! IRC identifier grammar checks.
//!
//! This module provides the byte/char-level predicates that back the
//! validating constructors in [`crate::identifier`]. It mirrors the
//! transport-layer control-character pattern used throughout this crate:
//! ```text
//! ch == '\0' || (ch.is_control() && ch != '\r' && ch != '\n')
//! ```
//!
//! # Protocol Element Validation
//!
//! - Nicknames: first char a letter, remaining chars letters/digits, no
//!   spaces, hyphens, or underscores (the underscore is reserved as the
//!   `name_<uuid>` wire separator).
//! - Channel names: length 2-50, must start with `# & + !`, no BEL/space/comma.

use crate::error::{ChannelError, NickError};

/// Maximum nickname length in characters.
pub const NICK_MAX_LEN: usize = 32;

/// Minimum channel name length in characters.
pub const CHANNEL_MIN_LEN: usize = 2;

/// Maximum channel name length in characters.
pub const CHANNEL_MAX_LEN: usize = 50;

/// Bytes that are never valid inside a channel name (after the prefix byte).
const INVALID_CHAN_CHARS: &[char] = &[' ', ',', '\x07'];

/// Valid channel prefix characters.
pub const CHANNEL_PREFIXES: &[char] = &['#', '&', '+', '!'];

/// Check if a character is illegal according to the transport-layer rules.
///
/// Rejects NUL and all C0 control characters except CR/LF.
#[inline]
pub fn is_illegal_control_char(ch: char) -> bool {
    ch == '\0' || (ch.is_control() && ch != '\r' && ch != '\n')
}

/// Check whether `c` is a legal first character of a `Nickname::name`.
///
/// Per the identifier model, the first character must be an ASCII letter.
#[inline]
pub fn is_valid_nick_first_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check whether `c` is legal in a `Nickname::name` after the first
/// character: letters and digits only (no underscore - reserved as the
/// wire separator - and no hyphen).
#[inline]
pub fn is_valid_nick_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Validate a `Nickname::name` against the grammar in the identifier model.
pub fn validate_nickname(name: &str) -> Result<(), NickError> {
    if name.is_empty() {
        return Err(NickError::Empty);
    }

    let len = name.chars().count();
    if len > NICK_MAX_LEN {
        return Err(NickError::TooLong);
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap();
    if !is_valid_nick_first_char(first) {
        return Err(NickError::InvalidFirstChar);
    }

    for c in chars {
        if !is_valid_nick_char(c) {
            return Err(NickError::InvalidChar(c));
        }
    }

    Ok(())
}

/// Validate a channel name against the grammar in the identifier model.
pub fn validate_channel_name(name: &str) -> Result<(), ChannelError> {
    let len = name.chars().count();
    if !(CHANNEL_MIN_LEN..=CHANNEL_MAX_LEN).contains(&len) {
        return Err(ChannelError::BadLength(len));
    }

    let mut chars = name.chars();
    let first = chars.next().unwrap();
    if !CHANNEL_PREFIXES.contains(&first) {
        return Err(ChannelError::MissingPrefix);
    }

    for c in chars {
        if INVALID_CHAN_CHARS.contains(&c) {
            return Err(ChannelError::IllegalByte(c as u8));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_nicknames() {
        assert!(validate_nickname("alice").is_ok());
        assert!(validate_nickname("a").is_ok());
        assert!(validate_nickname("Nick123").is_ok());
    }

    #[test]
    fn rejects_empty_and_too_long() {
        assert_eq!(validate_nickname(""), Err(NickError::Empty));
        let long = "a".repeat(33);
        assert_eq!(validate_nickname(&long), Err(NickError::TooLong));
        assert!(validate_nickname(&"a".repeat(32)).is_ok());
    }

    #[test]
    fn rejects_non_letter_first_char() {
        assert_eq!(
            validate_nickname("1nick"),
            Err(NickError::InvalidFirstChar)
        );
        assert_eq!(
            validate_nickname("_nick"),
            Err(NickError::InvalidFirstChar)
        );
    }

    #[test]
    fn rejects_underscore_and_hyphen_and_space() {
        assert_eq!(
            validate_nickname("nick_name"),
            Err(NickError::InvalidChar('_'))
        );
        assert_eq!(
            validate_nickname("nick-name"),
            Err(NickError::InvalidChar('-'))
        );
        assert_eq!(
            validate_nickname("nick name"),
            Err(NickError::InvalidChar(' '))
        );
    }

    #[test]
    fn valid_channels() {
        assert!(validate_channel_name("#general").is_ok());
        assert!(validate_channel_name("&local").is_ok());
        assert!(validate_channel_name("+c").is_ok());
        assert!(validate_channel_name("!1234overflow").is_ok());
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(
            validate_channel_name("#"),
            Err(ChannelError::BadLength(1))
        );
        let long = format!("#{}", "a".repeat(50));
        assert_eq!(
            validate_channel_name(&long),
            Err(ChannelError::BadLength(51))
        );
    }

    #[test]
    fn rejects_missing_prefix() {
        assert_eq!(
            validate_channel_name("general"),
            Err(ChannelError::MissingPrefix)
        );
    }

    #[test]
    fn rejects_illegal_bytes() {
        assert_eq!(
            validate_channel_name("#chan nel"),
            Err(ChannelError::IllegalByte(b' '))
        );
        assert_eq!(
            validate_channel_name("#chan,nel"),
            Err(ChannelError::IllegalByte(b','))
        );
        assert_eq!(
            validate_channel_name("#chan\x07nel"),
            Err(ChannelError::IllegalByte(0x07))
        );
    }
}
