//! Channel moderation meta-commands: `BAN`, `UNBAN`, `KICKBAN`,
//! `CLEARMODE`, `EXCEPT`/`UNEXCEPT`, `INVEX`/`UNINVEX`, `QUIET`/`UNQUIET`,
//! `VOICE`/`DEVOICE`, `HALFOP`/`DEHALFOP`, `PROTECT`/`DEPROTECT`,
//! `OWNER`/`DEOWNER`, `AWAY`, `KNOCK`, `SILENCE`.

use crate::command::types::Command;
use crate::error::MessageParseError;
use crate::identifier::ChannelName;

use super::util::arity_error;

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    match verb {
        "BAN" => channel_mask(verb, params, |channel, mask| Command::Ban { channel, mask }),
        "UNBAN" => channel_mask(verb, params, |channel, mask| Command::Unban { channel, mask }),
        "EXCEPT" => channel_mask(verb, params, |channel, mask| Command::Except { channel, mask }),
        "UNEXCEPT" => {
            channel_mask(verb, params, |channel, mask| Command::UnExcept { channel, mask })
        }
        "INVEX" => channel_mask(verb, params, |channel, mask| Command::InviteExcept {
            channel,
            mask,
        }),
        "UNINVEX" => channel_mask(verb, params, |channel, mask| Command::UnInviteExcept {
            channel,
            mask,
        }),
        "QUIET" => channel_mask(verb, params, |channel, mask| Command::Quiet { channel, mask }),
        "UNQUIET" => {
            channel_mask(verb, params, |channel, mask| Command::Unquiet { channel, mask })
        }
        "VOICE" => channel_nick(verb, params, |channel, nick| Command::Voice { channel, nick }),
        "DEVOICE" => channel_nick(verb, params, |channel, nick| Command::Devoice { channel, nick }),
        "HALFOP" => channel_nick(verb, params, |channel, nick| Command::Halfop { channel, nick }),
        "DEHALFOP" => {
            channel_nick(verb, params, |channel, nick| Command::Dehalfop { channel, nick })
        }
        "PROTECT" => {
            channel_nick(verb, params, |channel, nick| Command::Protect { channel, nick })
        }
        "DEPROTECT" => {
            channel_nick(verb, params, |channel, nick| Command::Deprotect { channel, nick })
        }
        "OWNER" => channel_nick(verb, params, |channel, nick| Command::Owner { channel, nick }),
        "DEOWNER" => {
            channel_nick(verb, params, |channel, nick| Command::Deowner { channel, nick })
        }
        "KICKBAN" => match params {
            [channel, user, mask] => Ok(Command::KickBan {
                channel: ChannelName::new(channel)?,
                user: user.to_string(),
                mask: mask.to_string(),
                comment: None,
            }),
            [channel, user, mask, comment] => Ok(Command::KickBan {
                channel: ChannelName::new(channel)?,
                user: user.to_string(),
                mask: mask.to_string(),
                comment: Some(comment.to_string()),
            }),
            _ => Err(arity_error(
                verb,
                "3-4 (channel, user, mask, [comment])",
                params.len(),
            )),
        },
        "CLEARMODE" => match params {
            [channel, modes] => Ok(Command::ClearMode {
                channel: ChannelName::new(channel)?,
                modes: modes.to_string(),
            }),
            _ => Err(arity_error(verb, "2 (channel, modes)", params.len())),
        },
        "AWAY" => match params {
            [] => Ok(Command::Away(None)),
            [message] => Ok(Command::Away(Some(message.to_string()))),
            _ => Err(arity_error(verb, "0-1 ([message])", params.len())),
        },
        "KNOCK" => match params {
            [channel] => Ok(Command::Knock {
                channel: ChannelName::new(channel)?,
                message: None,
            }),
            [channel, message] => Ok(Command::Knock {
                channel: ChannelName::new(channel)?,
                message: Some(message.to_string()),
            }),
            _ => Err(arity_error(verb, "1-2 (channel, [message])", params.len())),
        },
        "SILENCE" => match params {
            [mask] => Ok(Command::Silence(mask.to_string())),
            _ => Err(arity_error(verb, "1 (mask)", params.len())),
        },
        _ => unreachable!("moderation::parse called with unrouted verb {verb}"),
    }
}

fn channel_mask(
    verb: &str,
    params: &[&str],
    build: impl FnOnce(ChannelName, String) -> Command,
) -> Result<Command, MessageParseError> {
    match params {
        [channel, mask] => Ok(build(ChannelName::new(channel)?, mask.to_string())),
        _ => Err(arity_error(verb, "2 (channel, mask)", params.len())),
    }
}

fn channel_nick(
    verb: &str,
    params: &[&str],
    build: impl FnOnce(ChannelName, String) -> Command,
) -> Result<Command, MessageParseError> {
    match params {
        [channel, nick] => Ok(build(ChannelName::new(channel)?, nick.to_string())),
        _ => Err(arity_error(verb, "2 (channel, nick)", params.len())),
    }
}
