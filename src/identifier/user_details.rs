//! `USER` command field model: RFC 1459 vs RFC 2812 forms.

use crate::error::ValidationError;

/// The four-field body of a `USER` command, discriminated by whether its
/// second field parses as an unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserDetails {
    /// RFC 2812 form: `USER username mode_bits unused realname`.
    Modern {
        /// The username/ident field.
        username: String,
        /// The numeric mode-bits field.
        mode_bits: u32,
        /// The real name / GECOS field.
        realname: String,
    },
    /// RFC 1459 form: `USER username hostname servername realname`.
    Legacy {
        /// The username/ident field.
        username: String,
        /// The claimed client hostname.
        hostname: String,
        /// The claimed server name.
        servername: String,
        /// The real name / GECOS field.
        realname: String,
    },
}

impl UserDetails {
    /// Parse the four positional parameters of a `USER` command.
    ///
    /// The discriminant is whether `field2` parses as an unsigned integer.
    pub fn parse(
        username: &str,
        field2: &str,
        field3: &str,
        realname: &str,
    ) -> Result<Self, ValidationError> {
        if username.is_empty() || realname.is_empty() {
            return Err(ValidationError::InvalidUserDetails);
        }

        if let Ok(mode_bits) = field2.parse::<u32>() {
            Ok(UserDetails::Modern {
                username: username.to_string(),
                mode_bits,
                realname: realname.to_string(),
            })
        } else {
            Ok(UserDetails::Legacy {
                username: username.to_string(),
                hostname: field2.to_string(),
                servername: field3.to_string(),
                realname: realname.to_string(),
            })
        }
    }

    /// Render back the four positional `USER` parameters.
    pub fn to_fields(&self) -> (String, String, String, String) {
        match self {
            UserDetails::Modern {
                username,
                mode_bits,
                realname,
            } => (
                username.clone(),
                mode_bits.to_string(),
                "*".to_string(),
                realname.clone(),
            ),
            UserDetails::Legacy {
                username,
                hostname,
                servername,
                realname,
            } => (
                username.clone(),
                hostname.clone(),
                servername.clone(),
                realname.clone(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminates_modern_form() {
        let d = UserDetails::parse("alice", "8", "*", "Alice A").unwrap();
        assert_eq!(
            d,
            UserDetails::Modern {
                username: "alice".to_string(),
                mode_bits: 8,
                realname: "Alice A".to_string(),
            }
        );
    }

    #[test]
    fn discriminates_legacy_form() {
        let d = UserDetails::parse("alice", "localhost", "irc.example", "Alice A").unwrap();
        assert_eq!(
            d,
            UserDetails::Legacy {
                username: "alice".to_string(),
                hostname: "localhost".to_string(),
                servername: "irc.example".to_string(),
                realname: "Alice A".to_string(),
            }
        );
    }

    #[test]
    fn round_trips_fields() {
        let d = UserDetails::parse("alice", "8", "*", "Alice A").unwrap();
        assert_eq!(
            d.to_fields(),
            (
                "alice".to_string(),
                "8".to_string(),
                "*".to_string(),
                "Alice A".to_string()
            )
        );
    }
}
