//! Operator and server-query commands: `KILL`, `REHASH`, `RESTART`, `DIE`,
//! `CONNECT`, `TRACE`, `STATS`, `ADMIN`, `INFO`, `VERSION`, `TIME`,
//! `LUSERS`, `MOTD`, `RULES`, `MAP`, `USERS`, `WALLOPS`, `GLOBOPS`,
//! `LOCOPS`.

use crate::command::types::Command;
use crate::error::MessageParseError;

use super::util::arity_error;

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    match verb {
        "KILL" => match params {
            [nick, comment] => Ok(Command::Kill {
                nick: nick.to_string(),
                comment: comment.to_string(),
            }),
            _ => Err(arity_error(verb, "2 (nick, comment)", params.len())),
        },
        "REHASH" => zero_arity(verb, params, Command::Rehash),
        "RESTART" => zero_arity(verb, params, Command::Restart),
        "DIE" => zero_arity(verb, params, Command::Die),
        "MAP" => zero_arity(verb, params, Command::Map),
        "CONNECT" => match params {
            [target] => Ok(Command::Connect {
                target_server: target.to_string(),
                port: None,
                remote_server: None,
            }),
            [target, port] => Ok(Command::Connect {
                target_server: target.to_string(),
                port: port.parse().ok(),
                remote_server: None,
            }),
            [target, port, remote] => Ok(Command::Connect {
                target_server: target.to_string(),
                port: port.parse().ok(),
                remote_server: Some(remote.to_string()),
            }),
            _ => Err(arity_error(
                verb,
                "1-3 (target_server, [port], [remote_server])",
                params.len(),
            )),
        },
        "TRACE" => optional_target(verb, params, |target| Command::Trace { target }),
        "STATS" => match params {
            [] => Ok(Command::Stats {
                query: None,
                server: None,
            }),
            [query] => Ok(Command::Stats {
                query: query.chars().next(),
                server: None,
            }),
            [query, server] => Ok(Command::Stats {
                query: query.chars().next(),
                server: Some(server.to_string()),
            }),
            _ => Err(arity_error(verb, "0-2 ([query], [server])", params.len())),
        },
        "ADMIN" => optional_target(verb, params, |server| Command::Admin { server }),
        "INFO" => optional_target(verb, params, |server| Command::Info { server }),
        "VERSION" => optional_target(verb, params, |server| Command::Version { server }),
        "TIME" => optional_target(verb, params, |server| Command::Time { server }),
        "MOTD" => optional_target(verb, params, |server| Command::Motd { server }),
        "RULES" => optional_target(verb, params, |server| Command::Rules { server }),
        "USERS" => optional_target(verb, params, |server| Command::Users { server }),
        "LUSERS" => match params {
            [] => Ok(Command::Lusers {
                mask: None,
                server: None,
            }),
            [mask] => Ok(Command::Lusers {
                mask: Some(mask.to_string()),
                server: None,
            }),
            [mask, server] => Ok(Command::Lusers {
                mask: Some(mask.to_string()),
                server: Some(server.to_string()),
            }),
            _ => Err(arity_error(verb, "0-2 ([mask], [server])", params.len())),
        },
        "WALLOPS" => match params {
            [text] => Ok(Command::Wallops(text.to_string())),
            _ => Err(arity_error(verb, "1 (text)", params.len())),
        },
        "GLOBOPS" => match params {
            [text] => Ok(Command::GlobOps(text.to_string())),
            _ => Err(arity_error(verb, "1 (text)", params.len())),
        },
        "LOCOPS" => match params {
            [text] => Ok(Command::LocOps(text.to_string())),
            _ => Err(arity_error(verb, "1 (text)", params.len())),
        },
        _ => unreachable!("operator::parse called with unrouted verb {verb}"),
    }
}

fn zero_arity(
    verb: &str,
    params: &[&str],
    command: Command,
) -> Result<Command, MessageParseError> {
    if params.is_empty() {
        Ok(command)
    } else {
        Err(arity_error(verb, "0", params.len()))
    }
}

fn optional_target(
    verb: &str,
    params: &[&str],
    build: impl FnOnce(Option<String>) -> Command,
) -> Result<Command, MessageParseError> {
    match params {
        [] => Ok(build(None)),
        [server] => Ok(build(Some(server.to_string()))),
        _ => Err(arity_error(verb, "0-1 ([server])", params.len())),
    }
}
