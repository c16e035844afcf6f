//! Channel and user mode letters, and the `+`/`-` mode-change value type.

use std::fmt;

/// How a mode letter's argument behaves across `+`/`-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    /// List-type mode (ban, exception, invite-exception, quiet): an
    /// argument is accepted if present but never required, since the
    /// bare form queries the list.
    List,
    /// An argument is required regardless of polarity (op, voice, ...).
    AlwaysArg,
    /// An argument is required when setting (`+`), absent when unsetting
    /// (`-`): key, limit.
    ArgOnSet,
    /// Never takes an argument.
    NoArg,
}

/// Whether an argument must be present, may be present, or is never taken,
/// for a given mode letter and polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRequirement {
    /// No argument is consumed.
    None,
    /// An argument is consumed if one remains, but its absence is not an
    /// error (list-mode query form).
    Optional,
    /// An argument must be consumed; its absence is a parse error.
    Required,
}

impl ModeKind {
    /// Resolve the argument requirement for this mode kind under the given
    /// polarity (`is_plus`).
    pub fn arg_requirement(self, is_plus: bool) -> ArgRequirement {
        match self {
            ModeKind::List => ArgRequirement::Optional,
            ModeKind::AlwaysArg => ArgRequirement::Required,
            ModeKind::ArgOnSet => {
                if is_plus {
                    ArgRequirement::Required
                } else {
                    ArgRequirement::None
                }
            }
            ModeKind::NoArg => ArgRequirement::None,
        }
    }
}

/// A mode letter domain (channel modes or user modes), mapping wire
/// characters to typed variants.
pub trait ModeType: Copy + Eq + fmt::Debug {
    /// Resolve a wire character to a typed mode, or `None` if the letter
    /// is not recognized. Unrecognized letters are tolerated by the
    /// parser, not rejected.
    fn from_char(c: char) -> Option<Self>;

    /// The wire character for this mode.
    fn to_char(self) -> char;

    /// This mode's argument behavior.
    fn kind(self) -> ModeKind;
}

/// Channel mode letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelMode {
    /// `b` - ban mask (list).
    Ban,
    /// `e` - ban exception mask (list).
    Exception,
    /// `I` - invite exception mask (list).
    InviteException,
    /// `q` - quiet mask (list).
    Quiet,
    /// `v` - voice (always takes a nick argument).
    Voice,
    /// `h` - half-operator (always takes a nick argument).
    HalfOp,
    /// `o` - operator (always takes a nick argument).
    Op,
    /// `a` - protected/admin (always takes a nick argument).
    Protect,
    /// `Y` - owner (always takes a nick argument).
    Owner,
    /// `k` - channel key (argument required on set, absent on unset).
    Key,
    /// `l` - user limit (argument required on set, absent on unset).
    Limit,
    /// `i` - invite-only.
    InviteOnly,
    /// `m` - moderated.
    Moderated,
    /// `s` - secret.
    Secret,
    /// `p` - private.
    Private,
    /// `n` - no external messages.
    NoExternalMessages,
    /// `t` - topic settable by operators only.
    TopicProtect,
}

impl ModeType for ChannelMode {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'b' => ChannelMode::Ban,
            'e' => ChannelMode::Exception,
            'I' => ChannelMode::InviteException,
            'q' => ChannelMode::Quiet,
            'v' => ChannelMode::Voice,
            'h' => ChannelMode::HalfOp,
            'o' => ChannelMode::Op,
            'a' => ChannelMode::Protect,
            'Y' => ChannelMode::Owner,
            'k' => ChannelMode::Key,
            'l' => ChannelMode::Limit,
            'i' => ChannelMode::InviteOnly,
            'm' => ChannelMode::Moderated,
            's' => ChannelMode::Secret,
            'p' => ChannelMode::Private,
            'n' => ChannelMode::NoExternalMessages,
            't' => ChannelMode::TopicProtect,
            _ => return None,
        })
    }

    fn to_char(self) -> char {
        match self {
            ChannelMode::Ban => 'b',
            ChannelMode::Exception => 'e',
            ChannelMode::InviteException => 'I',
            ChannelMode::Quiet => 'q',
            ChannelMode::Voice => 'v',
            ChannelMode::HalfOp => 'h',
            ChannelMode::Op => 'o',
            ChannelMode::Protect => 'a',
            ChannelMode::Owner => 'Y',
            ChannelMode::Key => 'k',
            ChannelMode::Limit => 'l',
            ChannelMode::InviteOnly => 'i',
            ChannelMode::Moderated => 'm',
            ChannelMode::Secret => 's',
            ChannelMode::Private => 'p',
            ChannelMode::NoExternalMessages => 'n',
            ChannelMode::TopicProtect => 't',
        }
    }

    fn kind(self) -> ModeKind {
        match self {
            ChannelMode::Ban
            | ChannelMode::Exception
            | ChannelMode::InviteException
            | ChannelMode::Quiet => ModeKind::List,
            ChannelMode::Voice
            | ChannelMode::HalfOp
            | ChannelMode::Op
            | ChannelMode::Protect
            | ChannelMode::Owner => ModeKind::AlwaysArg,
            ChannelMode::Key | ChannelMode::Limit => ModeKind::ArgOnSet,
            ChannelMode::InviteOnly
            | ChannelMode::Moderated
            | ChannelMode::Secret
            | ChannelMode::Private
            | ChannelMode::NoExternalMessages
            | ChannelMode::TopicProtect => ModeKind::NoArg,
        }
    }
}

/// User mode letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserMode {
    /// `i` - invisible.
    Invisible,
    /// `w` - receives wallops.
    Wallops,
    /// `o` - global operator.
    Oper,
    /// `O` - local operator.
    LocalOper,
    /// `s` - receives server notices.
    ServerNotices,
    /// `r` - restricted connection.
    Restricted,
}

impl ModeType for UserMode {
    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'i' => UserMode::Invisible,
            'w' => UserMode::Wallops,
            'o' => UserMode::Oper,
            'O' => UserMode::LocalOper,
            's' => UserMode::ServerNotices,
            'r' => UserMode::Restricted,
            _ => return None,
        })
    }

    fn to_char(self) -> char {
        match self {
            UserMode::Invisible => 'i',
            UserMode::Wallops => 'w',
            UserMode::Oper => 'o',
            UserMode::LocalOper => 'O',
            UserMode::ServerNotices => 's',
            UserMode::Restricted => 'r',
        }
    }

    fn kind(self) -> ModeKind {
        ModeKind::NoArg
    }
}

/// A single mode change: a mode letter, its polarity, and its argument (if
/// any).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode<T: ModeType> {
    /// The mode was set (`+`).
    Plus(T, Option<String>),
    /// The mode was unset (`-`).
    Minus(T, Option<String>),
    /// The mode letter appeared with no leading `+`/`-` (tolerated on
    /// parse, never produced by the encoder).
    NoPrefix(T),
}

impl<T: ModeType> Mode<T> {
    /// The mode letter itself.
    pub fn letter(&self) -> T {
        match self {
            Mode::Plus(m, _) | Mode::Minus(m, _) | Mode::NoPrefix(m) => *m,
        }
    }

    /// This mode change's argument, if it carries one.
    pub fn arg(&self) -> Option<&str> {
        match self {
            Mode::Plus(_, a) | Mode::Minus(_, a) => a.as_deref(),
            Mode::NoPrefix(_) => None,
        }
    }
}
