//! Property-based tests for the quantified invariants in the codec spec:
//! nickname/channel round-trips, encode/parse symmetry, and multipart
//! chunk reconstruction.

use ircwire::identifier::{ChannelName, Nickname};
use ircwire::multipart::{Buffering, Fragmenter, FragmenterConfig, Payload};
use proptest::prelude::*;
use uuid::Uuid;

fn nick_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,31}".prop_filter("within max length", |s| s.len() <= 32)
}

fn channel_name_strategy() -> impl Strategy<Value = String> {
    "[#&+!][A-Za-z0-9_-]{1,49}".prop_filter("within max length", |s| s.len() <= 50)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn nickname_wire_round_trip(name in nick_name_strategy()) {
        let id = Uuid::new_v4();
        let nick = Nickname::new(&name, id).unwrap();
        let wire = nick.to_wire_string();
        let parsed = Nickname::parse(&wire).unwrap();
        prop_assert_eq!(parsed, nick);
        prop_assert_eq!(parsed.to_wire_string(), wire);
    }

    #[test]
    fn channel_equality_matches_irc_lowercase(name in channel_name_strategy()) {
        let a = ChannelName::new(&name).unwrap();
        let lowered = ircwire::irc_to_lower(&name);
        let b = ChannelName::new(&lowered).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn privmsg_parse_encode_round_trip(
        channel in channel_name_strategy(),
        text in "[ -~]{1,100}",
    ) {
        let message = ircwire::Message::new(ircwire::Command::PrivMsg {
            targets: vec![ircwire::identifier::Recipient::Channel(
                ChannelName::new(&channel).unwrap(),
            )],
            text: text.clone(),
        });
        let encoded = message.encode();
        let reparsed = ircwire::Message::parse(&encoded).unwrap();
        prop_assert_eq!(reparsed, message);
    }

    #[test]
    fn fragmenting_then_concatenating_reconstructs_payload(
        text in ".{0,1500}",
        max_bytes in 16usize..512,
    ) {
        let original = text.clone();
        let config = FragmenterConfig {
            buffering: Buffering::Bounded { max_bytes },
            max_line_bytes: 510,
        };
        let fragmenter = Fragmenter::new(Payload::Text(text), config);
        let total = fragmenter.total_parts();
        let parts: Vec<_> = fragmenter.collect();
        prop_assert_eq!(parts.len(), total as usize);

        let mut reconstructed = String::new();
        for part in &parts {
            match &part.payload {
                Payload::Text(s) => reconstructed.push_str(s),
                Payload::Binary(_) => prop_assert!(false, "expected text chunks"),
            }
        }
        prop_assert_eq!(reconstructed, original);
    }
}
