//! `WHOIS`, `WHO`, `ISON`.

use crate::command::types::Command;
use crate::error::MessageParseError;

use super::util::{arity_error, split_comma};

pub(super) fn parse(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
    match verb {
        "WHOIS" => match params {
            [masks] => Ok(Command::Whois {
                server: None,
                masks: split_comma(masks),
            }),
            [server, masks] => Ok(Command::Whois {
                server: Some(server.to_string()),
                masks: split_comma(masks),
            }),
            _ => Err(arity_error(verb, "1-2 ([server], masks)", params.len())),
        },
        "WHO" => match params {
            [] => Ok(Command::Who {
                mask: None,
                operators_only: false,
            }),
            [mask] => Ok(Command::Who {
                mask: Some(mask.to_string()),
                operators_only: false,
            }),
            [mask, flag] => Ok(Command::Who {
                mask: Some(mask.to_string()),
                operators_only: *flag == "o",
            }),
            _ => Err(arity_error(verb, "0-2 ([mask], [o])", params.len())),
        },
        "ISON" => {
            if params.is_empty() {
                return Err(arity_error(verb, "1+ (nicks)", 0));
            }
            Ok(Command::IsOn {
                nicks: params.iter().map(|s| s.to_string()).collect(),
            })
        }
        _ => unreachable!("info::parse called with unrouted verb {verb}"),
    }
}
