//! `PASS`, `NICK`, `USER`, `OPER`, `QUIT`, `SQUIT`, `PING`, `PONG`.

use crate::command::types::Command;
use crate::error::MessageParseError;
use crate::identifier::{Nickname, UserDetails};

use super::util::arity_error;

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    match verb {
        "PASS" => match params {
            [password] => Ok(Command::Pass(password.to_string())),
            _ => Err(arity_error(verb, "1 (password)", params.len())),
        },
        "NICK" => match params {
            [wire] => Ok(Command::Nick(Nickname::parse(wire)?)),
            _ => Err(arity_error(verb, "1 (name_uuid)", params.len())),
        },
        "USER" => match params {
            [username, field2, field3, realname] => Ok(Command::User(UserDetails::parse(
                username, field2, field3, realname,
            )?)),
            _ => Err(arity_error(
                verb,
                "4 (username, mode-or-hostname, unused-or-servername, realname)",
                params.len(),
            )),
        },
        "OPER" => match params {
            [name, password] => Ok(Command::Oper {
                name: name.to_string(),
                password: password.to_string(),
            }),
            _ => Err(arity_error(verb, "2 (name, password)", params.len())),
        },
        "QUIT" => match params {
            [] => Ok(Command::Quit(None)),
            [message] => Ok(Command::Quit(Some(message.to_string()))),
            _ => Err(arity_error(verb, "0-1 ([message])", params.len())),
        },
        "SQUIT" => match params {
            [server, comment] => Ok(Command::Squit {
                server: server.to_string(),
                comment: comment.to_string(),
            }),
            _ => Err(arity_error(verb, "2 (server, comment)", params.len())),
        },
        "PING" => match params {
            [server1] => Ok(Command::Ping {
                server1: server1.to_string(),
                server2: None,
            }),
            [server1, server2] => Ok(Command::Ping {
                server1: server1.to_string(),
                server2: Some(server2.to_string()),
            }),
            _ => Err(arity_error(verb, "1-2 (server1, [server2])", params.len())),
        },
        "PONG" => match params {
            [server1] => Ok(Command::Pong {
                server1: server1.to_string(),
                server2: None,
            }),
            [server1, server2] => Ok(Command::Pong {
                server1: server1.to_string(),
                server2: Some(server2.to_string()),
            }),
            _ => Err(arity_error(verb, "1-2 (server1, [server2])", params.len())),
        },
        _ => unreachable!("connection::parse called with unrouted verb {verb}"),
    }
}
