//! Parsing `+`/`-`-prefixed mode-letter sequences into `Vec<Mode<T>>`.

use crate::error::ModeParseError;

use super::types::{ArgRequirement, Mode, ModeType};

enum Polarity {
    Plus,
    Minus,
    NoPrefix,
}

impl Mode<super::types::UserMode> {
    /// Parse user mode strings like `["+iw"]` into a vector of mode changes.
    pub fn as_user_modes(pieces: &[&str]) -> Result<Vec<Self>, ModeParseError> {
        parse_modes(pieces)
    }
}

impl Mode<super::types::ChannelMode> {
    /// Parse channel mode strings like `["+o", "nick"]` into a vector of
    /// mode changes.
    pub fn as_channel_modes(pieces: &[&str]) -> Result<Vec<Self>, ModeParseError> {
        parse_modes(pieces)
    }
}

fn parse_modes<T>(pieces: &[&str]) -> Result<Vec<Mode<T>>, ModeParseError>
where
    T: ModeType,
{
    use Polarity::*;

    let mut out = Vec::new();

    let Some((first, rest)) = pieces.split_first() else {
        return Ok(out);
    };

    let mut letters = first.chars();
    let mut args = rest.iter().copied().peekable();

    let mut polarity = match letters.clone().next() {
        Some('+') => {
            letters.next();
            Plus
        }
        Some('-') => {
            letters.next();
            Minus
        }
        Some(_) => NoPrefix,
        None => return Ok(out),
    };

    for c in letters {
        match c {
            '+' => polarity = Plus,
            '-' => polarity = Minus,
            _ => {
                let Some(mode) = T::from_char(c) else {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(letter = %c, "unknown mode letter, skipping");
                    continue;
                };

                let is_plus = !matches!(polarity, Minus);
                let arg = match mode.kind().arg_requirement(is_plus) {
                    ArgRequirement::None => None,
                    ArgRequirement::Optional => args.next().map(str::to_owned),
                    ArgRequirement::Required => match args.next() {
                        Some(a) => Some(a.to_owned()),
                        None => return Err(ModeParseError::MissingModeArg { letter: c }),
                    },
                };

                out.push(match polarity {
                    Plus => Mode::Plus(mode, arg),
                    Minus => Mode::Minus(mode, arg),
                    NoPrefix => Mode::NoPrefix(mode),
                });
            }
        }
    }

    if args.peek().is_some() {
        return Err(ModeParseError::UnusedArguments);
    }

    Ok(out)
}
