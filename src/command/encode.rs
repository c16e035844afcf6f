//! Rendering a [`Command`] to its wire parameter list.
//!
//! This module only answers "what are this command's positional
//! parameters, and must the last one carry a forced `:` prefix" — joining
//! those with the verb, origin, tags, and numeric target into a full line
//! is [`crate::message::encode`]'s job.

use crate::command::types::Command;
use crate::ctcp;
use crate::mode::encode_modes;

/// A command's wire parameter list, plus whether the last parameter must
/// be colon-prefixed even if it contains no space (commands whose final
/// argument is free text by convention: `QUIT`, `KICK`'s comment, ...).
pub(crate) struct Wire {
    pub params: Vec<String>,
    pub force_trailing: bool,
}

impl Wire {
    fn new(params: Vec<String>) -> Self {
        Wire {
            params,
            force_trailing: false,
        }
    }

    fn forced(params: Vec<String>) -> Self {
        Wire {
            params,
            force_trailing: true,
        }
    }
}

/// Build the wire parameter list for a command.
pub(crate) fn encode(cmd: &Command) -> Wire {
    match cmd {
        Command::Pass(password) => Wire::new(vec![password.clone()]),
        Command::Nick(nick) => Wire::new(vec![nick.to_wire_string()]),
        Command::User(details) => {
            let (username, f2, f3, realname) = details.to_fields();
            Wire::forced(vec![username, f2, f3, realname])
        }
        Command::Oper { name, password } => Wire::new(vec![name.clone(), password.clone()]),
        Command::Quit(message) => match message {
            Some(m) => Wire::forced(vec![m.clone()]),
            None => Wire::new(vec![]),
        },
        Command::Squit { server, comment } => {
            Wire::forced(vec![server.clone(), comment.clone()])
        }
        Command::Ping { server1, server2 } => Wire::new(opt_tail(server1.clone(), server2)),
        Command::Pong { server1, server2 } => Wire::new(opt_tail(server1.clone(), server2)),
        Command::Cap {
            subcommand,
            capabilities,
        } => {
            let mut params = vec![subcommand.as_str().to_string()];
            if !capabilities.is_empty() {
                params.push(capabilities.join(" "));
            }
            Wire::new(params)
        }

        Command::Join { channels, keys } => {
            let mut params = vec![join_display(channels)];
            if !keys.is_empty() {
                params.push(keys.join(","));
            }
            Wire::new(params)
        }
        Command::Join0 => Wire::new(vec!["0".to_string()]),
        Command::Part { channels, reason } => {
            let mut wire = Wire::new(vec![join_display(channels)]);
            if let Some(reason) = reason {
                wire.params.push(reason.clone());
                wire.force_trailing = true;
            }
            wire
        }
        Command::Topic { channel, topic } => {
            let mut wire = Wire::new(vec![channel.to_string()]);
            if let Some(topic) = topic {
                wire.params.push(topic.clone());
                wire.force_trailing = true;
            }
            wire
        }
        Command::Names { channels } => {
            if channels.is_empty() {
                Wire::new(vec![])
            } else {
                Wire::new(vec![join_display(channels)])
            }
        }
        Command::List { channels, server } => {
            let mut params = Vec::new();
            if !channels.is_empty() {
                params.push(join_display(channels));
            }
            if let Some(server) = server {
                params.push(server.clone());
            }
            Wire::new(params)
        }
        Command::Invite { nick, channel } => Wire::new(vec![nick.clone(), channel.to_string()]),
        Command::Kick {
            channels,
            users,
            comment,
        } => {
            let mut wire = Wire::new(vec![join_display(channels), users.join(",")]);
            if let Some(comment) = comment {
                wire.params.push(comment.clone());
                wire.force_trailing = true;
            }
            wire
        }

        Command::PrivMsg { targets, text } => {
            Wire::forced(vec![join_display(targets), text.clone()])
        }
        Command::Notice { targets, text } => {
            Wire::forced(vec![join_display(targets), text.clone()])
        }
        Command::Ctcp { targets, payload } => {
            Wire::forced(vec![join_display(targets), ctcp::wrap(&payload.encode())])
        }
        Command::CtcpReply { targets, payload } => {
            Wire::forced(vec![join_display(targets), ctcp::wrap(&payload.encode())])
        }

        Command::Whois { server, masks } => {
            let mut params = Vec::new();
            if let Some(server) = server {
                params.push(server.clone());
            }
            params.push(masks.join(","));
            Wire::new(params)
        }
        Command::Who {
            mask,
            operators_only,
        } => {
            let mut params = Vec::new();
            if let Some(mask) = mask {
                params.push(mask.clone());
            }
            if *operators_only {
                params.push("o".to_string());
            }
            Wire::new(params)
        }
        Command::IsOn { nicks } => Wire::new(nicks.clone()),

        Command::ChannelMode { channel, modes } => Wire::new(mode_params(channel.to_string(), modes)),
        Command::UserMode { nick, modes } => Wire::new(mode_params(nick.clone(), modes)),

        Command::Kill { nick, comment } => Wire::forced(vec![nick.clone(), comment.clone()]),
        Command::Rehash | Command::Restart | Command::Die | Command::Map => Wire::new(vec![]),
        Command::Connect {
            target_server,
            port,
            remote_server,
        } => {
            let mut params = vec![target_server.clone()];
            if let Some(port) = port {
                params.push(port.to_string());
            }
            if let Some(remote) = remote_server {
                params.push(remote.clone());
            }
            Wire::new(params)
        }
        Command::Trace { target } => Wire::new(opt_one(target)),
        Command::Stats { query, server } => {
            let mut params = Vec::new();
            if let Some(query) = query {
                params.push(query.to_string());
            }
            if let Some(server) = server {
                params.push(server.clone());
            }
            Wire::new(params)
        }
        Command::Admin { server } => Wire::new(opt_one(server)),
        Command::Info { server } => Wire::new(opt_one(server)),
        Command::Version { server } => Wire::new(opt_one(server)),
        Command::Time { server } => Wire::new(opt_one(server)),
        Command::Motd { server } => Wire::new(opt_one(server)),
        Command::Rules { server } => Wire::new(opt_one(server)),
        Command::Users { server } => Wire::new(opt_one(server)),
        Command::Lusers { mask, server } => {
            let mut params = Vec::new();
            if let Some(mask) = mask {
                params.push(mask.clone());
            }
            if let Some(server) = server {
                params.push(server.clone());
            }
            Wire::new(params)
        }
        Command::Wallops(text) => Wire::forced(vec![text.clone()]),
        Command::GlobOps(text) => Wire::forced(vec![text.clone()]),
        Command::LocOps(text) => Wire::forced(vec![text.clone()]),

        Command::Ban { channel, mask } => Wire::new(vec![channel.to_string(), mask.clone()]),
        Command::Unban { channel, mask } => Wire::new(vec![channel.to_string(), mask.clone()]),
        Command::Except { channel, mask } => Wire::new(vec![channel.to_string(), mask.clone()]),
        Command::UnExcept { channel, mask } => Wire::new(vec![channel.to_string(), mask.clone()]),
        Command::InviteExcept { channel, mask } => {
            Wire::new(vec![channel.to_string(), mask.clone()])
        }
        Command::UnInviteExcept { channel, mask } => {
            Wire::new(vec![channel.to_string(), mask.clone()])
        }
        Command::Quiet { channel, mask } => Wire::new(vec![channel.to_string(), mask.clone()]),
        Command::Unquiet { channel, mask } => Wire::new(vec![channel.to_string(), mask.clone()]),
        Command::KickBan {
            channel,
            user,
            mask,
            comment,
        } => {
            let mut wire = Wire::new(vec![channel.to_string(), user.clone(), mask.clone()]);
            if let Some(comment) = comment {
                wire.params.push(comment.clone());
                wire.force_trailing = true;
            }
            wire
        }
        Command::ClearMode { channel, modes } => {
            Wire::new(vec![channel.to_string(), modes.clone()])
        }
        Command::Voice { channel, nick } => Wire::new(vec![channel.to_string(), nick.clone()]),
        Command::Devoice { channel, nick } => Wire::new(vec![channel.to_string(), nick.clone()]),
        Command::Halfop { channel, nick } => Wire::new(vec![channel.to_string(), nick.clone()]),
        Command::Dehalfop { channel, nick } => {
            Wire::new(vec![channel.to_string(), nick.clone()])
        }
        Command::Protect { channel, nick } => Wire::new(vec![channel.to_string(), nick.clone()]),
        Command::Deprotect { channel, nick } => {
            Wire::new(vec![channel.to_string(), nick.clone()])
        }
        Command::Owner { channel, nick } => Wire::new(vec![channel.to_string(), nick.clone()]),
        Command::Deowner { channel, nick } => {
            Wire::new(vec![channel.to_string(), nick.clone()])
        }
        Command::Away(message) => match message {
            Some(m) => Wire::forced(vec![m.clone()]),
            None => Wire::new(vec![]),
        },
        Command::Knock { channel, message } => {
            let mut wire = Wire::new(vec![channel.to_string()]);
            if let Some(message) = message {
                wire.params.push(message.clone());
                wire.force_trailing = true;
            }
            wire
        }
        Command::Silence(mask) => Wire::new(vec![mask.clone()]),

        Command::Numeric(_, args) | Command::OtherNumeric(_, args) => Wire::new(args.clone()),
        Command::OtherCommand(_, args) => Wire::new(args.clone()),
    }
}

/// Just the flattened parameter list, used by [`Command::is_equivalent`].
pub(crate) fn command_params(cmd: &Command) -> Vec<String> {
    encode(cmd).params
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn opt_tail(head: String, tail: &Option<String>) -> Vec<String> {
    let mut params = vec![head];
    if let Some(tail) = tail {
        params.push(tail.clone());
    }
    params
}

fn opt_one(value: &Option<String>) -> Vec<String> {
    value.iter().cloned().collect()
}

fn mode_params<T: crate::mode::ModeType>(target: String, modes: &[crate::mode::Mode<T>]) -> Vec<String> {
    if modes.is_empty() {
        return vec![target];
    }
    let (flags, args) = encode_modes(modes);
    let mut params = vec![target, flags];
    params.extend(args);
    params
}
