//! Integration tests for the multipart fragmenter/reassembler pair:
//! fragmenting a payload larger than one wire-sized message, feeding the
//! parts back through a reassembler out of order, and checking the
//! timeout/eviction edge cases from the codec spec.

use std::time::Duration;

use ircwire::multipart::{
    Buffering, Fragmenter, FragmenterConfig, Outcome, Payload, Reassembler, ReassemblyConfig,
};
use ircwire::MultipartError;

#[test]
fn large_text_payload_fragments_and_reassembles_out_of_order() {
    let payload = Payload::Text("x".repeat(5 * 1024));
    let config = FragmenterConfig {
        buffering: Buffering::Bounded { max_bytes: 1024 },
        max_line_bytes: 510,
    };
    let fragmenter = Fragmenter::new(payload.clone(), config);
    let group_id = fragmenter.group_id().to_string();
    let total = fragmenter.total_parts();

    let mut parts: Vec<_> = fragmenter.collect();
    assert!(total >= 5);
    assert_eq!(parts.len(), total as usize);
    for part in &parts {
        assert_eq!(part.group_id, group_id);
    }

    // Feed them to the reassembler in reverse order.
    parts.reverse();
    let mut reassembler = Reassembler::new(ReassemblyConfig::default());
    let mut completed = None;
    for (i, part) in parts.into_iter().enumerate() {
        let outcome = reassembler.accept(part);
        if i + 1 < total as usize {
            assert_eq!(outcome, Outcome::Incomplete);
        } else {
            completed = Some(outcome);
        }
    }

    assert_eq!(completed, Some(Outcome::Complete(payload)));
}

#[test]
fn multiple_groups_interleave_and_each_completes_once() {
    let mut reassembler = Reassembler::new(ReassemblyConfig::default());

    let a1 = packet("group-a", 1, 2, "a1");
    let b1 = packet("group-b", 1, 2, "b1");
    let a2 = packet("group-a", 2, 2, "a2");
    let b2 = packet("group-b", 2, 2, "b2");

    assert_eq!(reassembler.accept(a1), Outcome::Incomplete);
    assert_eq!(reassembler.accept(b1), Outcome::Incomplete);
    assert_eq!(
        reassembler.accept(a2),
        Outcome::Complete(Payload::Text("a1a2".to_string()))
    );
    assert_eq!(
        reassembler.accept(b2),
        Outcome::Complete(Payload::Text("b1b2".to_string()))
    );
}

#[test]
fn reassembler_times_out_and_orphans_the_late_part() {
    let mut reassembler = Reassembler::new(ReassemblyConfig {
        timeout: Duration::from_millis(0),
        ..ReassemblyConfig::default()
    });

    reassembler.accept(packet("late-group", 1, 3, "a"));
    reassembler.accept(packet("late-group", 2, 3, "b"));
    std::thread::sleep(Duration::from_millis(5));

    let outcome = reassembler.accept(packet("late-group", 3, 3, "c"));
    assert_eq!(
        outcome,
        Outcome::Rejected(MultipartError::Orphaned {
            group_id: "late-group".to_string(),
        })
    );
}

#[test]
fn binary_payload_round_trips() {
    let payload = Payload::Binary((0u8..=255).cycle().take(2000).collect());
    let config = FragmenterConfig {
        buffering: Buffering::Unbounded,
        max_line_bytes: 200,
    };
    let fragmenter = Fragmenter::new(payload.clone(), config);
    let mut reassembler = Reassembler::new(ReassemblyConfig::default());

    let mut last = Outcome::Incomplete;
    for part in fragmenter {
        last = reassembler.accept(part);
    }
    assert_eq!(last, Outcome::Complete(payload));
}

fn packet(group: &str, part: u32, total: u32, text: &str) -> ircwire::MultipartPacket {
    ircwire::MultipartPacket {
        group_id: group.to_string(),
        created_at: chrono::Utc::now(),
        part_number: part,
        total_parts: total,
        payload: Payload::Text(text.to_string()),
    }
}
