//! `JOIN`, `PART`, `TOPIC`, `NAMES`, `LIST`, `INVITE`, `KICK`.

use crate::command::types::Command;
use crate::error::MessageParseError;
use crate::identifier::ChannelName;

use super::util::{arity_error, parse_channels, split_comma};

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    match verb {
        "JOIN" => match params {
            ["0"] => Ok(Command::Join0),
            [channels] => Ok(Command::Join {
                channels: parse_channels(channels)?,
                keys: Vec::new(),
            }),
            [channels, keys] => Ok(Command::Join {
                channels: parse_channels(channels)?,
                keys: split_comma(keys),
            }),
            _ => Err(arity_error(verb, "1-2 (channels, [keys])", params.len())),
        },
        "PART" => match params {
            [channels] => Ok(Command::Part {
                channels: parse_channels(channels)?,
                reason: None,
            }),
            [channels, reason] => Ok(Command::Part {
                channels: parse_channels(channels)?,
                reason: Some(reason.to_string()),
            }),
            _ => Err(arity_error(verb, "1-2 (channels, [reason])", params.len())),
        },
        "TOPIC" => match params {
            [channel] => Ok(Command::Topic {
                channel: ChannelName::new(channel)?,
                topic: None,
            }),
            [channel, topic] => Ok(Command::Topic {
                channel: ChannelName::new(channel)?,
                topic: Some(topic.to_string()),
            }),
            _ => Err(arity_error(verb, "1-2 (channel, [topic])", params.len())),
        },
        "NAMES" => match params {
            [] => Ok(Command::Names {
                channels: Vec::new(),
            }),
            [channels] => Ok(Command::Names {
                channels: parse_channels(channels)?,
            }),
            _ => Err(arity_error(verb, "0-1 ([channels])", params.len())),
        },
        "LIST" => match params {
            [] => Ok(Command::List {
                channels: Vec::new(),
                server: None,
            }),
            [channels] => Ok(Command::List {
                channels: parse_channels(channels)?,
                server: None,
            }),
            [channels, server] => Ok(Command::List {
                channels: parse_channels(channels)?,
                server: Some(server.to_string()),
            }),
            _ => Err(arity_error(verb, "0-2 ([channels], [server])", params.len())),
        },
        "INVITE" => match params {
            [nick, channel] => Ok(Command::Invite {
                nick: nick.to_string(),
                channel: ChannelName::new(channel)?,
            }),
            _ => Err(arity_error(verb, "2 (nick, channel)", params.len())),
        },
        "KICK" => match params {
            [channels, users] => Ok(Command::Kick {
                channels: parse_channels(channels)?,
                users: split_comma(users),
                comment: None,
            }),
            [channels, users, comment] => Ok(Command::Kick {
                channels: parse_channels(channels)?,
                users: split_comma(users),
                comment: Some(comment.to_string()),
            }),
            _ => Err(arity_error(
                verb,
                "2-3 (channels, users, [comment])",
                params.len(),
            )),
        },
        _ => unreachable!("channel::parse called with unrouted verb {verb}"),
    }
}
