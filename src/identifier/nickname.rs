//! Validated nickname identifier.

use std::fmt;

use uuid::Uuid;

use crate::error::{NickError, ValidationError};
use crate::validation;

/// A validated IRC nickname paired with a device id.
///
/// The wire form is `name_<uuid-canonical-hyphenated>`; `name` itself never
/// contains an underscore, so splitting on the first `_` is unambiguous.
///
/// # Examples
///
/// ```
/// use ircwire::identifier::Nickname;
///
/// let nick = Nickname::parse("alice_550e8400-e29b-41d4-a716-446655440000").unwrap();
/// assert_eq!(nick.name(), "alice");
/// assert_eq!(
///     nick.to_wire_string(),
///     "alice_550e8400-e29b-41d4-a716-446655440000"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nickname {
    name: NicknameName,
    device_id: Uuid,
}

/// An owned, validated nickname string, stored fixed-size inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NicknameName {
    buf: [u8; validation::NICK_MAX_LEN],
    len: u8,
}

impl NicknameName {
    fn as_str(&self) -> &str {
        // SAFETY: constructed only from validated ASCII-alphanumeric input.
        std::str::from_utf8(&self.buf[..self.len as usize]).unwrap()
    }
}

impl Nickname {
    /// Construct a `Nickname` from an already-split name and device id.
    ///
    /// Fails with [`ValidationError::InvalidNick`] under the rules documented
    /// on the type.
    pub fn new(name: &str, device_id: Uuid) -> Result<Self, ValidationError> {
        validation::validate_nickname(name).map_err(ValidationError::InvalidNick)?;

        let mut buf = [0u8; validation::NICK_MAX_LEN];
        buf[..name.len()].copy_from_slice(name.as_bytes());

        Ok(Nickname {
            name: NicknameName {
                buf,
                len: name.len() as u8,
            },
            device_id,
        })
    }

    /// Parse the wire form `name_<uuid>`, splitting on the first underscore.
    pub fn parse(wire: &str) -> Result<Self, ValidationError> {
        let (name, uuid_str) = wire
            .split_once('_')
            .ok_or(ValidationError::InvalidNick(NickError::Empty))?;
        let device_id = Uuid::parse_str(uuid_str)
            .map_err(|_| ValidationError::InvalidNick(NickError::InvalidFirstChar))?;
        Nickname::new(name, device_id)
    }

    /// The validated name, excluding the device id.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The device id.
    pub fn device_id(&self) -> Uuid {
        self.device_id
    }

    /// Render the `name_<uuid>` wire form.
    pub fn to_wire_string(&self) -> String {
        format!("{}_{}", self.name(), self.device_id.hyphenated())
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wire_string())
    }
}
