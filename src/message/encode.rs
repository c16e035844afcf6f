//! Rendering a [`Message`] back to its wire form.

use crate::command::{self, Command};
use crate::message::tags;
use crate::message::types::Message;

pub(crate) fn encode(message: &Message) -> String {
    if let Command::Join { channels, .. } = &message.command {
        if channels.is_empty() {
            return String::new();
        }
    }

    let mut out = String::new();

    if !message.tags.is_empty() {
        out.push('@');
        out.push_str(&tags::encode_tag_blob(&message.tags));
        out.push(' ');
    }

    if let Some(origin) = message.origin.as_deref().filter(|o| !o.is_empty()) {
        out.push(':');
        out.push_str(origin);
        out.push(' ');
    }

    out.push_str(&message.command.verb());

    let wire = command::encode::encode(&message.command);
    let mut params = wire.params;
    if let Some(target) = &message.target {
        params.insert(0, target.clone());
    }

    let last_index = params.len().checked_sub(1);
    for (i, param) in params.iter().enumerate() {
        out.push(' ');
        if Some(i) == last_index && (wire.force_trailing || needs_colon_prefix(param)) {
            out.push(':');
        }
        out.push_str(param);
    }

    out
}

/// A parameter needs a `:` prefix if it's empty, starts with `:`, or
/// contains a space — any of which would otherwise be ambiguous or
/// truncate early when re-parsed.
fn needs_colon_prefix(param: &str) -> bool {
    param.is_empty() || param.starts_with(':') || param.contains(' ')
}
