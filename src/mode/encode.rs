//! Rendering `Vec<Mode<T>>` back to its collapsed wire form.

use super::types::{Mode, ModeType};

/// Render a mode-change sequence as `(flags, positional_args)`, where
/// `flags` is the collapsed `+xy-z` token and `positional_args` are the
/// arguments that follow it in wire order.
pub fn encode_modes<T: ModeType>(modes: &[Mode<T>]) -> (String, Vec<String>) {
    let mut flags = String::new();
    let mut args = Vec::new();
    let mut last_sign = None;

    for mode in modes {
        let (sign, letter, arg) = match mode {
            Mode::Plus(m, a) => (Some('+'), m.to_char(), a.as_deref()),
            Mode::Minus(m, a) => (Some('-'), m.to_char(), a.as_deref()),
            Mode::NoPrefix(m) => (None, m.to_char(), None),
        };

        if sign != last_sign {
            if let Some(s) = sign {
                flags.push(s);
            }
            last_sign = sign;
        }
        flags.push(letter);

        if let Some(a) = arg {
            args.push(a.to_owned());
        }
    }

    (flags, args)
}

#[cfg(test)]
mod tests {
    use super::super::types::ChannelMode;
    use super::*;

    #[test]
    fn collapses_same_sign_runs() {
        let modes = vec![
            Mode::Plus(ChannelMode::InviteOnly, None),
            Mode::Plus(ChannelMode::Op, Some("alice".to_string())),
            Mode::Minus(ChannelMode::Moderated, None),
        ];
        let (flags, args) = encode_modes(&modes);
        assert_eq!(flags, "+io-m");
        assert_eq!(args, vec!["alice".to_string()]);
    }
}
