//! Reassembling arbitrary-order, possibly-duplicated [`MultipartPacket`]s
//! back into a complete payload.

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::error::MultipartError;
use crate::multipart::packet::{MultipartPacket, Payload};

/// Reassembler tuning.
#[derive(Debug, Clone, Copy)]
pub struct ReassemblyConfig {
    /// How long a slot may sit incomplete before it's dropped.
    pub timeout: Duration,
    /// The maximum combined size, across every live slot, of buffered
    /// payload bytes before the oldest slot is evicted.
    pub max_in_flight_bytes: usize,
}

impl Default for ReassemblyConfig {
    fn default() -> Self {
        ReassemblyConfig {
            timeout: Duration::from_secs(30),
            max_in_flight_bytes: 64 * 1024 * 1024,
        }
    }
}

struct Slot {
    total_parts: u32,
    parts: HashMap<u32, Payload>,
    first_seen_at: Instant,
    bytes: usize,
}

/// The result of feeding one packet to the reassembler.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The group isn't complete yet.
    Incomplete,
    /// Every part arrived; here's the concatenated payload.
    Complete(Payload),
    /// The packet (or its group) was rejected.
    Rejected(MultipartError),
}

/// Single-owner reassembly state for one receiver.
///
/// Not `Sync`; a host that wants concurrent reassembly runs one
/// `Reassembler` per receiver rather than sharing one across tasks.
pub struct Reassembler {
    config: ReassemblyConfig,
    slots: HashMap<String, Slot>,
    timed_out: HashSet<String>,
}

impl Reassembler {
    /// Build a reassembler with the given configuration.
    pub fn new(config: ReassemblyConfig) -> Self {
        Reassembler {
            config,
            slots: HashMap::new(),
            timed_out: HashSet::new(),
        }
    }

    /// Feed one packet, checking timeouts lazily before processing it.
    pub fn accept(&mut self, packet: MultipartPacket) -> Outcome {
        self.expire_stale();

        let group_id = packet.group_id;

        if packet.total_parts == 0 || packet.part_number < 1 || packet.part_number > packet.total_parts {
            return Outcome::Rejected(MultipartError::PartOutOfRange { group_id });
        }

        if self.timed_out.contains(&group_id) {
            if packet.part_number == 1 {
                self.timed_out.remove(&group_id);
            } else {
                return Outcome::Rejected(MultipartError::Orphaned { group_id });
            }
        }

        let is_new_slot = !self.slots.contains_key(&group_id);
        if is_new_slot {
            self.slots.insert(
                group_id.clone(),
                Slot {
                    total_parts: packet.total_parts,
                    parts: HashMap::new(),
                    first_seen_at: Instant::now(),
                    bytes: 0,
                },
            );
        }

        let slot = self.slots.get_mut(&group_id).expect("just inserted or present");

        if slot.total_parts != packet.total_parts {
            return Outcome::Rejected(MultipartError::InconsistentTotal { group_id });
        }

        if slot.parts.contains_key(&packet.part_number) {
            return Outcome::Rejected(MultipartError::DuplicatePart {
                group_id,
                part_number: packet.part_number,
            });
        }

        slot.bytes += packet.payload.len();
        slot.parts.insert(packet.part_number, packet.payload);

        if slot.parts.len() as u32 == slot.total_parts {
            let slot = self.slots.remove(&group_id).expect("present");
            return Outcome::Complete(concatenate(slot));
        }

        if !self.enforce_memory_budget(&group_id) {
            return Outcome::Rejected(MultipartError::Evicted { group_id });
        }

        Outcome::Incomplete
    }

    /// Drop a group's slot without emitting a completion, e.g. when a
    /// caller gives up waiting on it.
    pub fn cancel(&mut self, group_id: &str) {
        self.slots.remove(group_id);
        self.timed_out.remove(group_id);
    }

    fn expire_stale(&mut self) {
        let timeout = self.config.timeout;
        let now = Instant::now();
        let expired: Vec<String> = self
            .slots
            .iter()
            .filter(|(_, slot)| now.duration_since(slot.first_seen_at) > timeout)
            .map(|(id, _)| id.clone())
            .collect();
        for id in expired {
            self.slots.remove(&id);
            self.timed_out.insert(id);
        }
    }

    /// Evict slots, oldest first, until total buffered bytes fit the
    /// budget. Returns `false` if `survivor`'s own slot was evicted.
    fn enforce_memory_budget(&mut self, survivor: &str) -> bool {
        loop {
            let total: usize = self.slots.values().map(|s| s.bytes).sum();
            if total <= self.config.max_in_flight_bytes {
                return true;
            }
            let oldest = self
                .slots
                .iter()
                .min_by_key(|(_, slot)| slot.first_seen_at)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    self.slots.remove(&id);
                    if id == survivor {
                        return false;
                    }
                }
                None => return true,
            }
        }
    }
}

fn concatenate(slot: Slot) -> Payload {
    let mut ordered: Vec<_> = slot.parts.into_iter().collect();
    ordered.sort_by_key(|(index, _)| *index);

    let all_text = ordered.iter().all(|(_, p)| matches!(p, Payload::Text(_)));
    if all_text {
        let mut text = String::new();
        for (_, part) in ordered {
            if let Payload::Text(s) = part {
                text.push_str(&s);
            }
        }
        Payload::Text(text)
    } else {
        let mut bytes = Vec::new();
        for (_, part) in ordered {
            match part {
                Payload::Text(s) => bytes.extend(s.into_bytes()),
                Payload::Binary(b) => bytes.extend(b),
            }
        }
        Payload::Binary(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn packet(group: &str, part: u32, total: u32, text: &str) -> MultipartPacket {
        MultipartPacket {
            group_id: group.to_string(),
            created_at: Utc::now(),
            part_number: part,
            total_parts: total,
            payload: Payload::Text(text.to_string()),
        }
    }

    #[test]
    fn completes_on_last_missing_part() {
        let mut r = Reassembler::new(ReassemblyConfig::default());
        assert_eq!(r.accept(packet("g1", 1, 2, "hello ")), Outcome::Incomplete);
        assert_eq!(
            r.accept(packet("g1", 2, 2, "world")),
            Outcome::Complete(Payload::Text("hello world".to_string()))
        );
    }

    #[test]
    fn completes_out_of_order() {
        let mut r = Reassembler::new(ReassemblyConfig::default());
        assert_eq!(r.accept(packet("g1", 3, 3, "c")), Outcome::Incomplete);
        assert_eq!(r.accept(packet("g1", 1, 3, "a")), Outcome::Incomplete);
        assert_eq!(
            r.accept(packet("g1", 2, 3, "b")),
            Outcome::Complete(Payload::Text("abc".to_string()))
        );
    }

    #[test]
    fn duplicate_part_is_rejected_and_first_copy_kept() {
        let mut r = Reassembler::new(ReassemblyConfig::default());
        r.accept(packet("g1", 1, 2, "first"));
        let outcome = r.accept(packet("g1", 1, 2, "second"));
        assert_eq!(
            outcome,
            Outcome::Rejected(MultipartError::DuplicatePart {
                group_id: "g1".to_string(),
                part_number: 1,
            })
        );
        assert_eq!(
            r.accept(packet("g1", 2, 2, "!")),
            Outcome::Complete(Payload::Text("first!".to_string()))
        );
    }

    #[test]
    fn inconsistent_total_is_rejected() {
        let mut r = Reassembler::new(ReassemblyConfig::default());
        r.accept(packet("g1", 1, 3, "a"));
        let outcome = r.accept(packet("g1", 2, 4, "b"));
        assert_eq!(
            outcome,
            Outcome::Rejected(MultipartError::InconsistentTotal {
                group_id: "g1".to_string(),
            })
        );
    }

    #[test]
    fn part_out_of_range_is_rejected() {
        let mut r = Reassembler::new(ReassemblyConfig::default());
        let outcome = r.accept(packet("g1", 5, 2, "x"));
        assert_eq!(
            outcome,
            Outcome::Rejected(MultipartError::PartOutOfRange {
                group_id: "g1".to_string(),
            })
        );
    }

    #[test]
    fn timeout_then_orphaned_non_restart_part() {
        let mut r = Reassembler::new(ReassemblyConfig {
            timeout: Duration::from_millis(0),
            ..ReassemblyConfig::default()
        });
        r.accept(packet("g1", 1, 2, "a"));
        std::thread::sleep(Duration::from_millis(5));
        let outcome = r.accept(packet("g1", 2, 2, "b"));
        assert_eq!(
            outcome,
            Outcome::Rejected(MultipartError::Orphaned {
                group_id: "g1".to_string(),
            })
        );
    }

    #[test]
    fn timeout_then_fresh_part_one_restarts_the_group() {
        let mut r = Reassembler::new(ReassemblyConfig {
            timeout: Duration::from_millis(0),
            ..ReassemblyConfig::default()
        });
        r.accept(packet("g1", 1, 2, "stale"));
        std::thread::sleep(Duration::from_millis(5));
        let outcome = r.accept(packet("g1", 1, 2, "fresh"));
        assert_eq!(outcome, Outcome::Incomplete);
    }

    #[test]
    fn cancel_drops_the_slot_without_completing() {
        let mut r = Reassembler::new(ReassemblyConfig::default());
        r.accept(packet("g1", 1, 2, "a"));
        r.cancel("g1");
        let outcome = r.accept(packet("g1", 2, 2, "b"));
        assert_eq!(outcome, Outcome::Incomplete);
    }

    #[test]
    fn memory_pressure_evicts_oldest_slot() {
        let mut r = Reassembler::new(ReassemblyConfig {
            timeout: Duration::from_secs(30),
            max_in_flight_bytes: 5,
        });
        r.accept(packet("old", 1, 2, "abc"));
        let outcome = r.accept(packet("new", 1, 2, "xyz"));
        assert!(matches!(outcome, Outcome::Incomplete));

        // "old"'s slot was evicted to make room; its part 2 now starts a
        // fresh, still-incomplete slot rather than completing anything.
        let old_outcome = r.accept(packet("old", 2, 2, "def"));
        assert_eq!(old_outcome, Outcome::Incomplete);
    }
}
