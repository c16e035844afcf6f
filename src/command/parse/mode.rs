//! `MODE` — dispatches to channel or user mode parsing based on the shape
//! of its first parameter.

use crate::command::types::Command;
use crate::error::MessageParseError;
use crate::identifier::ChannelName;
use crate::mode::{ChannelMode, Mode, UserMode};
use crate::validation;

use super::util::arity_error;

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    let Some((&target, rest)) = params.split_first() else {
        return Err(arity_error(verb, "1+ (target, [modes...])", 0));
    };

    if is_channel_target(target) {
        let channel = ChannelName::new(target)?;
        let modes = Mode::<ChannelMode>::as_channel_modes(rest).map_err(|cause| {
            MessageParseError::InvalidModeString {
                string: rest.join(" "),
                cause,
            }
        })?;
        Ok(Command::ChannelMode { channel, modes })
    } else {
        let modes = Mode::<UserMode>::as_user_modes(rest).map_err(|cause| {
            MessageParseError::InvalidModeString {
                string: rest.join(" "),
                cause,
            }
        })?;
        Ok(Command::UserMode {
            nick: target.to_string(),
            modes,
        })
    }
}

fn is_channel_target(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| validation::CHANNEL_PREFIXES.contains(&c))
}
