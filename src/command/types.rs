//! The [`Command`] algebraic type: one case per IRC verb this crate
//! understands, plus the `OtherCommand`/`OtherNumeric` escape hatches for
//! everything else.

use crate::ctcp::CtcpPayload;
use crate::identifier::{ChannelName, Nickname, Recipient, UserDetails};
use crate::mode::{ChannelMode, Mode, UserMode};

/// `CAP`'s sub-command, per IRCv3 capability negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapSubCommand {
    /// `CAP LS` — list capabilities the server supports.
    Ls,
    /// `CAP LIST` — list capabilities currently enabled on this connection.
    List,
    /// `CAP REQ` — request a set of capabilities.
    Req,
    /// `CAP ACK` — acknowledge a capability request.
    Ack,
    /// `CAP NAK` — reject a capability request.
    Nak,
    /// `CAP END` — end capability negotiation.
    End,
}

impl CapSubCommand {
    /// The wire token for this sub-command.
    pub fn as_str(self) -> &'static str {
        match self {
            CapSubCommand::Ls => "LS",
            CapSubCommand::List => "LIST",
            CapSubCommand::Req => "REQ",
            CapSubCommand::Ack => "ACK",
            CapSubCommand::Nak => "NAK",
            CapSubCommand::End => "END",
        }
    }

    /// Parse a sub-command token, case-insensitively.
    pub fn from_str_ci(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "LS" => CapSubCommand::Ls,
            "LIST" => CapSubCommand::List,
            "REQ" => CapSubCommand::Req,
            "ACK" => CapSubCommand::Ack,
            "NAK" => CapSubCommand::Nak,
            "END" => CapSubCommand::End,
            _ => return None,
        })
    }
}

/// The closed set of IRC commands this crate parses and encodes.
///
/// `OtherCommand`/`OtherNumeric` carry any verb or numeric code this crate
/// doesn't otherwise model; see [`Command::is_equivalent`] for the
/// equivalence relation used to compare a typed variant against its
/// `OtherCommand` rendering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Command {
    // --- connection ---
    /// `PASS <password>`.
    Pass(String),
    /// `NICK <name_uuid>`.
    Nick(Nickname),
    /// `USER <...>`.
    User(UserDetails),
    /// `OPER <name> <password>`.
    Oper {
        /// Operator account name.
        name: String,
        /// Operator password.
        password: String,
    },
    /// `QUIT [:message]`.
    Quit(Option<String>),
    /// `SQUIT <server> :<comment>`.
    Squit {
        /// The server being disconnected.
        server: String,
        /// The reason given.
        comment: String,
    },
    /// `PING <server1> [server2]`.
    Ping {
        /// The origin server.
        server1: String,
        /// The forwarding server, if relayed.
        server2: Option<String>,
    },
    /// `PONG <server1> [server2]`.
    Pong {
        /// The origin server.
        server1: String,
        /// The forwarding server, if relayed.
        server2: Option<String>,
    },
    /// `CAP <subcommand> [capabilities...]`.
    Cap {
        /// The negotiation sub-command.
        subcommand: CapSubCommand,
        /// The space-separated capability list, if any.
        capabilities: Vec<String>,
    },

    // --- channel ---
    /// `JOIN <channels> [keys]`.
    Join {
        /// Channels to join.
        channels: Vec<ChannelName>,
        /// Positional keys, one per channel that needs one.
        keys: Vec<String>,
    },
    /// `JOIN 0` — part every channel the client is in.
    Join0,
    /// `PART <channels> [:reason]`.
    Part {
        /// Channels to leave.
        channels: Vec<ChannelName>,
        /// An optional parting message.
        reason: Option<String>,
    },
    /// `TOPIC <channel> [:topic]`.
    Topic {
        /// The channel whose topic is being read or set.
        channel: ChannelName,
        /// The new topic; absent when this is a query.
        topic: Option<String>,
    },
    /// `NAMES [channels]`.
    Names {
        /// Channels to list members of; empty means all.
        channels: Vec<ChannelName>,
    },
    /// `LIST [channels] [server]`.
    List {
        /// Channels to restrict the listing to; empty means all.
        channels: Vec<ChannelName>,
        /// The server to query, if relayed.
        server: Option<String>,
    },
    /// `INVITE <nick> <channel>`.
    Invite {
        /// The nickname being invited.
        nick: String,
        /// The channel the invite is for.
        channel: ChannelName,
    },
    /// `KICK <channels> <users> [:comment]`.
    Kick {
        /// Channels to kick from, one per `users` entry or one shared.
        channels: Vec<ChannelName>,
        /// Nicknames being removed.
        users: Vec<String>,
        /// An optional kick reason.
        comment: Option<String>,
    },

    // --- messaging ---
    /// `PRIVMSG <targets> :<text>`.
    PrivMsg {
        /// The message's recipients.
        targets: Vec<Recipient>,
        /// The message body.
        text: String,
    },
    /// `NOTICE <targets> :<text>`.
    Notice {
        /// The notice's recipients.
        targets: Vec<Recipient>,
        /// The notice body.
        text: String,
    },
    /// A `PRIVMSG` whose body was CTCP-quoted.
    Ctcp {
        /// The message's recipients.
        targets: Vec<Recipient>,
        /// The decoded CTCP payload.
        payload: CtcpPayload,
    },
    /// A `NOTICE` whose body was CTCP-quoted (a CTCP reply).
    CtcpReply {
        /// The notice's recipients.
        targets: Vec<Recipient>,
        /// The decoded CTCP payload.
        payload: CtcpPayload,
    },

    // --- information ---
    /// `WHOIS [server] <masks>`.
    Whois {
        /// The server to query, if given explicitly.
        server: Option<String>,
        /// Comma-separated nickname/mask list.
        masks: Vec<String>,
    },
    /// `WHO [mask] [o]`.
    Who {
        /// The mask to filter by, if any.
        mask: Option<String>,
        /// Whether the `o` (operators-only) flag was present.
        operators_only: bool,
    },
    /// `ISON <nicks>`.
    IsOn {
        /// Nicknames to check for presence.
        nicks: Vec<String>,
    },

    // --- modes ---
    /// `MODE <channel> [modes...]`. An empty `modes` is the getter form.
    ChannelMode {
        /// The channel whose modes are being read or changed.
        channel: ChannelName,
        /// The requested mode changes, if any.
        modes: Vec<Mode<ChannelMode>>,
    },
    /// `MODE <nick> [modes...]`. An empty `modes` is the getter form.
    UserMode {
        /// The user whose modes are being read or changed.
        nick: String,
        /// The requested mode changes, if any.
        modes: Vec<Mode<UserMode>>,
    },

    // --- operator ---
    /// `KILL <nick> :<comment>`.
    Kill {
        /// The nickname being disconnected.
        nick: String,
        /// The reason given.
        comment: String,
    },
    /// `REHASH`.
    Rehash,
    /// `RESTART`.
    Restart,
    /// `DIE`.
    Die,
    /// `CONNECT <target_server> [port] [remote_server]`.
    Connect {
        /// The server to establish a link to.
        target_server: String,
        /// The port to connect on, if given.
        port: Option<u16>,
        /// The server that should initiate the connection, if relayed.
        remote_server: Option<String>,
    },
    /// `TRACE [target]`.
    Trace {
        /// The server or nickname to trace, if given.
        target: Option<String>,
    },
    /// `STATS [query] [server]`.
    Stats {
        /// The single-letter statistics query, if given.
        query: Option<char>,
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `ADMIN [server]`.
    Admin {
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `INFO [server]`.
    Info {
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `VERSION [server]`.
    Version {
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `TIME [server]`.
    Time {
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `LUSERS [mask] [server]`.
    Lusers {
        /// The mask to restrict the count to, if given.
        mask: Option<String>,
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `MOTD [server]`.
    Motd {
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `RULES [server]`.
    Rules {
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `MAP`.
    Map,
    /// `USERS [server]`.
    Users {
        /// The server to query, if given explicitly.
        server: Option<String>,
    },
    /// `WALLOPS :<text>`.
    Wallops(String),
    /// `GLOBOPS :<text>`.
    GlobOps(String),
    /// `LOCOPS :<text>`.
    LocOps(String),

    // --- channel moderation (services-style meta-commands) ---
    /// `BAN <channel> <mask>`.
    Ban {
        /// The channel to ban on.
        channel: ChannelName,
        /// The ban mask.
        mask: String,
    },
    /// `UNBAN <channel> <mask>`.
    Unban {
        /// The channel to remove the ban from.
        channel: ChannelName,
        /// The ban mask being removed.
        mask: String,
    },
    /// `KICKBAN <channel> <user> <mask> [:comment]`.
    KickBan {
        /// The channel to kick-ban on.
        channel: ChannelName,
        /// The nickname being removed.
        user: String,
        /// The ban mask to apply.
        mask: String,
        /// An optional kick reason.
        comment: Option<String>,
    },
    /// `CLEARMODE <channel> <modes>`.
    ClearMode {
        /// The channel being cleared.
        channel: ChannelName,
        /// The raw mode-letter set being cleared.
        modes: String,
    },
    /// `EXCEPT <channel> <mask>`.
    Except {
        /// The channel to except on.
        channel: ChannelName,
        /// The exception mask.
        mask: String,
    },
    /// `UNEXCEPT <channel> <mask>`.
    UnExcept {
        /// The channel to remove the exception from.
        channel: ChannelName,
        /// The exception mask being removed.
        mask: String,
    },
    /// `INVEX <channel> <mask>`.
    InviteExcept {
        /// The channel to except on.
        channel: ChannelName,
        /// The invite-exception mask.
        mask: String,
    },
    /// `UNINVEX <channel> <mask>`.
    UnInviteExcept {
        /// The channel to remove the invite exception from.
        channel: ChannelName,
        /// The invite-exception mask being removed.
        mask: String,
    },
    /// `QUIET <channel> <mask>`.
    Quiet {
        /// The channel to quiet on.
        channel: ChannelName,
        /// The quiet mask.
        mask: String,
    },
    /// `UNQUIET <channel> <mask>`.
    Unquiet {
        /// The channel to remove the quiet from.
        channel: ChannelName,
        /// The quiet mask being removed.
        mask: String,
    },
    /// `VOICE <channel> <nick>`.
    Voice {
        /// The channel to voice on.
        channel: ChannelName,
        /// The nickname being voiced.
        nick: String,
    },
    /// `DEVOICE <channel> <nick>`.
    Devoice {
        /// The channel to devoice on.
        channel: ChannelName,
        /// The nickname being devoiced.
        nick: String,
    },
    /// `HALFOP <channel> <nick>`.
    Halfop {
        /// The channel to half-op on.
        channel: ChannelName,
        /// The nickname being half-opped.
        nick: String,
    },
    /// `DEHALFOP <channel> <nick>`.
    Dehalfop {
        /// The channel to de-half-op on.
        channel: ChannelName,
        /// The nickname losing half-op.
        nick: String,
    },
    /// `PROTECT <channel> <nick>`.
    Protect {
        /// The channel to protect on.
        channel: ChannelName,
        /// The nickname being protected.
        nick: String,
    },
    /// `DEPROTECT <channel> <nick>`.
    Deprotect {
        /// The channel to deprotect on.
        channel: ChannelName,
        /// The nickname losing protected status.
        nick: String,
    },
    /// `OWNER <channel> <nick>`.
    Owner {
        /// The channel to grant ownership on.
        channel: ChannelName,
        /// The nickname being made owner.
        nick: String,
    },
    /// `DEOWNER <channel> <nick>`.
    Deowner {
        /// The channel to revoke ownership on.
        channel: ChannelName,
        /// The nickname losing owner status.
        nick: String,
    },
    /// `AWAY [:message]`.
    Away(Option<String>),
    /// `KNOCK <channel> [:message]`.
    Knock {
        /// The invite-only channel being knocked on.
        channel: ChannelName,
        /// An optional message to the channel.
        message: Option<String>,
    },
    /// `SILENCE <mask>`.
    Silence(String),

    // --- numeric replies ---
    /// A three-digit numeric reply, e.g. `001` (`RPL_WELCOME`).
    Numeric(u16, Vec<String>),

    // --- escape hatches ---
    /// An unrecognized textual verb, preserved verbatim.
    OtherCommand(String, Vec<String>),
    /// An unrecognized numeric code, preserved verbatim.
    OtherNumeric(u16, Vec<String>),
}

impl Command {
    /// The wire verb for this command (a numeric renders as its three-digit
    /// code via [`Command::numeric_code`] instead).
    pub fn verb(&self) -> String {
        match self {
            Command::Pass(_) => "PASS".to_string(),
            Command::Nick(_) => "NICK".to_string(),
            Command::User(_) => "USER".to_string(),
            Command::Oper { .. } => "OPER".to_string(),
            Command::Quit(_) => "QUIT".to_string(),
            Command::Squit { .. } => "SQUIT".to_string(),
            Command::Ping { .. } => "PING".to_string(),
            Command::Pong { .. } => "PONG".to_string(),
            Command::Cap { .. } => "CAP".to_string(),
            Command::Join { .. } | Command::Join0 => "JOIN".to_string(),
            Command::Part { .. } => "PART".to_string(),
            Command::Topic { .. } => "TOPIC".to_string(),
            Command::Names { .. } => "NAMES".to_string(),
            Command::List { .. } => "LIST".to_string(),
            Command::Invite { .. } => "INVITE".to_string(),
            Command::Kick { .. } => "KICK".to_string(),
            Command::PrivMsg { .. } | Command::Ctcp { .. } => "PRIVMSG".to_string(),
            Command::Notice { .. } | Command::CtcpReply { .. } => "NOTICE".to_string(),
            Command::Whois { .. } => "WHOIS".to_string(),
            Command::Who { .. } => "WHO".to_string(),
            Command::IsOn { .. } => "ISON".to_string(),
            Command::ChannelMode { .. } | Command::UserMode { .. } => "MODE".to_string(),
            Command::Kill { .. } => "KILL".to_string(),
            Command::Rehash => "REHASH".to_string(),
            Command::Restart => "RESTART".to_string(),
            Command::Die => "DIE".to_string(),
            Command::Connect { .. } => "CONNECT".to_string(),
            Command::Trace { .. } => "TRACE".to_string(),
            Command::Stats { .. } => "STATS".to_string(),
            Command::Admin { .. } => "ADMIN".to_string(),
            Command::Info { .. } => "INFO".to_string(),
            Command::Version { .. } => "VERSION".to_string(),
            Command::Time { .. } => "TIME".to_string(),
            Command::Lusers { .. } => "LUSERS".to_string(),
            Command::Motd { .. } => "MOTD".to_string(),
            Command::Rules { .. } => "RULES".to_string(),
            Command::Map => "MAP".to_string(),
            Command::Users { .. } => "USERS".to_string(),
            Command::Wallops(_) => "WALLOPS".to_string(),
            Command::GlobOps(_) => "GLOBOPS".to_string(),
            Command::LocOps(_) => "LOCOPS".to_string(),
            Command::Ban { .. } => "BAN".to_string(),
            Command::Unban { .. } => "UNBAN".to_string(),
            Command::KickBan { .. } => "KICKBAN".to_string(),
            Command::ClearMode { .. } => "CLEARMODE".to_string(),
            Command::Except { .. } => "EXCEPT".to_string(),
            Command::UnExcept { .. } => "UNEXCEPT".to_string(),
            Command::InviteExcept { .. } => "INVEX".to_string(),
            Command::UnInviteExcept { .. } => "UNINVEX".to_string(),
            Command::Quiet { .. } => "QUIET".to_string(),
            Command::Unquiet { .. } => "UNQUIET".to_string(),
            Command::Voice { .. } => "VOICE".to_string(),
            Command::Devoice { .. } => "DEVOICE".to_string(),
            Command::Halfop { .. } => "HALFOP".to_string(),
            Command::Dehalfop { .. } => "DEHALFOP".to_string(),
            Command::Protect { .. } => "PROTECT".to_string(),
            Command::Deprotect { .. } => "DEPROTECT".to_string(),
            Command::Owner { .. } => "OWNER".to_string(),
            Command::Deowner { .. } => "DEOWNER".to_string(),
            Command::Away(_) => "AWAY".to_string(),
            Command::Knock { .. } => "KNOCK".to_string(),
            Command::Silence(_) => "SILENCE".to_string(),
            Command::Numeric(code, _) | Command::OtherNumeric(code, _) => format!("{code:03}"),
            Command::OtherCommand(verb, _) => verb.to_ascii_uppercase(),
        }
    }

    /// Compare this command to `other` under the `OtherCommand`/
    /// `OtherNumeric` equivalence relation: a typed variant is equivalent
    /// to an `OtherCommand`/`OtherNumeric` whose verb/code and rendered
    /// argument sequence match, independent of structural representation.
    pub fn is_equivalent(&self, other: &Command) -> bool {
        if self == other {
            return true;
        }

        match (self, other) {
            (Command::OtherCommand(verb, args), typed)
            | (typed, Command::OtherCommand(verb, args)) => {
                !matches!(typed, Command::OtherCommand(..))
                    && typed.verb().eq_ignore_ascii_case(verb)
                    && &typed.equivalence_args() == args
            }
            (Command::OtherNumeric(code, args), typed)
            | (typed, Command::OtherNumeric(code, args)) => match typed {
                Command::Numeric(typed_code, typed_args) => {
                    typed_code == code && typed_args == args
                }
                _ => false,
            },
            _ => false,
        }
    }

    /// The argument sequence this command would encode to, used by
    /// [`Command::is_equivalent`] to compare against an `OtherCommand`.
    fn equivalence_args(&self) -> Vec<String> {
        crate::command::encode::command_params(self)
    }
}
