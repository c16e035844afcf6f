//! `PRIVMSG`/`NOTICE`, including CTCP-quoted bodies.

use crate::command::types::Command;
use crate::ctcp::{self, CtcpPayload};
use crate::error::MessageParseError;
use crate::identifier::Recipient;

use super::util::arity_error;

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    let [raw_targets, text] = params else {
        return Err(arity_error(verb, "2 (targets, text)", params.len()));
    };

    let targets = raw_targets
        .split(',')
        .filter(|t| !t.is_empty())
        .map(Recipient::parse)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(ctcp_body) = ctcp::unwrap(text) {
        let payload = CtcpPayload::parse(ctcp_body)?;
        return Ok(if verb == "PRIVMSG" {
            Command::Ctcp { targets, payload }
        } else {
            Command::CtcpReply { targets, payload }
        });
    }

    Ok(if verb == "PRIVMSG" {
        Command::PrivMsg {
            targets,
            text: text.to_string(),
        }
    } else {
        Command::Notice {
            targets,
            text: text.to_string(),
        }
    })
}
