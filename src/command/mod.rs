//! The [`Command`] type and its parsing/encoding.

pub(crate) mod encode;
pub(crate) mod parse;
mod types;

pub use types::{CapSubCommand, Command};
