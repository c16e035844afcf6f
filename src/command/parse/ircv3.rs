//! `CAP` capability negotiation.

use crate::command::types::{CapSubCommand, Command};
use crate::error::MessageParseError;

use super::util::arity_error;

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    let (sub, capability_list) = match params {
        [sub] => (*sub, None),
        [sub, capabilities] => (*sub, Some(*capabilities)),
        _ => return Err(arity_error(verb, "1-2 (subcommand, [capabilities])", params.len())),
    };

    let subcommand = CapSubCommand::from_str_ci(sub)
        .ok_or_else(|| MessageParseError::InvalidCapSubcommand(sub.to_string()))?;

    let capabilities = capability_list
        .map(|list| {
            list.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    Ok(Command::Cap {
        subcommand,
        capabilities,
    })
}
