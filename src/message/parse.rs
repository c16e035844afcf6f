//! Top-level message parsing: lexical split, tag blob, numeric-vs-verb
//! dispatch.

use crate::command;
use crate::command::Command;
use crate::error::MessageParseError;
use crate::message::nom_parser::ParsedMessage;
use crate::message::tags;
use crate::message::types::Message;

pub(crate) fn parse(line: &str) -> Result<Message, MessageParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Err(MessageParseError::EmptyMessage);
    }

    let parsed = ParsedMessage::parse(line).map_err(|_| {
        if line.starts_with('@') && !line.contains(' ') {
            MessageParseError::InvalidTag
        } else {
            MessageParseError::MalformedMessage(line.to_string())
        }
    })?;

    if parsed.command.is_empty() {
        return Err(MessageParseError::MalformedMessage(line.to_string()));
    }

    let tags = match parsed.tags {
        Some(blob) => tags::parse_tag_blob(blob)?,
        None => Vec::new(),
    };
    let origin = parsed.prefix.map(str::to_string);

    if !parsed.command.is_empty() && parsed.command.bytes().all(|b| b.is_ascii_digit()) {
        let code: u16 = parsed
            .command
            .parse()
            .map_err(|_| MessageParseError::MalformedMessage(line.to_string()))?;

        let (target, args) = match parsed.params.split_first() {
            Some((first, rest)) => (
                Some(first.to_string()),
                rest.iter().map(|s| s.to_string()).collect(),
            ),
            None => (None, Vec::new()),
        };

        return Ok(Message {
            tags,
            origin,
            command: Command::Numeric(code, args),
            target,
        });
    }

    let command = command::parse::parse(parsed.command, &parsed.params)?;
    Ok(Message {
        tags,
        origin,
        command,
        target: None,
    })
}
