//! Per-verb command parsing, grouped by the same categories as the data
//! model in §3: connection, channel, messaging, information, modes,
//! operator, and channel moderation.

mod channel;
mod connection;
mod info;
mod ircv3;
mod messaging;
mod mode;
mod moderation;
mod operator;
mod util;

use crate::command::types::Command;
use crate::error::MessageParseError;

/// Parse a textual (non-numeric) verb and its parameters into a [`Command`].
///
/// Unrecognized verbs fall back to [`Command::OtherCommand`] rather than
/// failing; recognized verbs that receive the wrong number of parameters
/// fail with [`MessageParseError::UnexpectedArguments`].
pub(crate) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    let verb_upper = verb.to_ascii_uppercase();

    match verb_upper.as_str() {
        "PASS" | "NICK" | "USER" | "OPER" | "QUIT" | "SQUIT" | "PING" | "PONG" => {
            connection::parse(&verb_upper, params)
        }
        "JOIN" | "PART" | "TOPIC" | "NAMES" | "LIST" | "INVITE" | "KICK" => {
            channel::parse(&verb_upper, params)
        }
        "PRIVMSG" | "NOTICE" => messaging::parse(&verb_upper, params),
        "WHOIS" | "WHO" | "ISON" => info::parse(&verb_upper, params),
        "MODE" => mode::parse(&verb_upper, params),
        "KILL" | "REHASH" | "RESTART" | "DIE" | "CONNECT" | "TRACE" | "STATS" | "ADMIN"
        | "INFO" | "VERSION" | "TIME" | "LUSERS" | "MOTD" | "RULES" | "MAP" | "USERS"
        | "WALLOPS" | "GLOBOPS" | "LOCOPS" => operator::parse(&verb_upper, params),
        "BAN" | "UNBAN" | "KICKBAN" | "CLEARMODE" | "EXCEPT" | "UNEXCEPT" | "INVEX"
        | "UNINVEX" | "QUIET" | "UNQUIET" | "VOICE" | "DEVOICE" | "HALFOP" | "DEHALFOP"
        | "PROTECT" | "DEPROTECT" | "OWNER" | "DEOWNER" | "AWAY" | "KNOCK" | "SILENCE" => {
            moderation::parse(&verb_upper, params)
        }
        "CAP" => ircv3::parse(&verb_upper, params),
        _ => Ok(Command::OtherCommand(
            verb.to_string(),
            params.iter().map(|s| s.to_string()).collect(),
        )),
    }
}
