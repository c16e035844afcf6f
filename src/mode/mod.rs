//! Channel and user mode letters and the `MODE` mode-string grammar.
//!
//! `MODE`'s parameters are a `+`/`-`-prefixed run of mode letters followed
//! by the positional arguments those letters consume, in order. This
//! module splits that into [`parse`] (mode-string -> `Vec<Mode<T>>`) and
//! [`encode`] (the inverse), parameterized over the mode-letter domain via
//! [`ModeType`] so the same grammar serves both [`ChannelMode`] and
//! [`UserMode`].

mod encode;
mod parse;
mod types;

pub use encode::encode_modes;
pub use types::{ArgRequirement, ChannelMode, Mode, ModeKind, ModeType, UserMode};
