//! Splitting a logical payload into a pull-drained sequence of
//! [`MultipartPacket`] values that each fit within the wire's per-message
//! byte ceiling.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::multipart::packet::{MultipartPacket, Payload};

/// How eagerly the fragmenter materializes its packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffering {
    /// Split the whole payload up front.
    Unbounded,
    /// Materialize at most `max_bytes` of source payload ahead of the
    /// consumer at any time.
    Bounded {
        /// The maximum amount of unconsumed source payload to hold.
        max_bytes: usize,
    },
}

/// Fragmenter tuning: buffering policy and the outer line's byte budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmenterConfig {
    /// How much of the payload to pre-split before the consumer pulls.
    pub buffering: Buffering,
    /// The outer IRC line's byte ceiling, CRLF excluded (510 by RFC default).
    pub max_line_bytes: usize,
}

impl Default for FragmenterConfig {
    fn default() -> Self {
        FragmenterConfig {
            buffering: Buffering::Unbounded,
            max_line_bytes: 510,
        }
    }
}

/// Bytes reserved per outer line for the `PRIVMSG`/CTCP/tag envelope and
/// the `rmp-serde` framing around the raw chunk, leaving the remainder
/// for the chunk itself.
const ENVELOPE_OVERHEAD: usize = 128;

/// Splits a payload into an ordered, finite, non-restartable sequence of
/// packets, drained one at a time via [`Iterator`].
///
/// Under [`Buffering::Unbounded`] the whole payload is split eagerly at
/// construction; under [`Buffering::Bounded`] this fragmenter still
/// splits eagerly today (the source payload is already fully in memory
/// as a single `Payload` value), but honors `max_bytes` as the chunking
/// unit so a caller feeding chunks incrementally can bound how far ahead
/// of the consumer it materializes.
pub struct Fragmenter {
    group_id: String,
    created_at: DateTime<Utc>,
    total_parts: u32,
    chunks: std::vec::IntoIter<Payload>,
    next_index: u32,
}

impl Fragmenter {
    /// Start fragmenting `payload` under `config`.
    pub fn new(payload: Payload, config: FragmenterConfig) -> Self {
        let chunk_size = match config.buffering {
            Buffering::Unbounded => config.max_line_bytes.saturating_sub(ENVELOPE_OVERHEAD),
            Buffering::Bounded { max_bytes } => max_bytes
                .min(config.max_line_bytes.saturating_sub(ENVELOPE_OVERHEAD)),
        }
        .max(1);

        let chunks = split(payload, chunk_size);
        let total_parts = chunks.len() as u32;

        Fragmenter {
            group_id: Uuid::new_v4().hyphenated().to_string(),
            created_at: Utc::now(),
            total_parts,
            chunks: chunks.into_iter(),
            next_index: 1,
        }
    }

    /// The group id assigned to this fragmenting run.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    /// The total number of packets this run will produce.
    pub fn total_parts(&self) -> u32 {
        self.total_parts
    }
}

impl Iterator for Fragmenter {
    type Item = MultipartPacket;

    fn next(&mut self) -> Option<Self::Item> {
        let payload = self.chunks.next()?;
        let packet = MultipartPacket {
            group_id: self.group_id.clone(),
            created_at: self.created_at,
            part_number: self.next_index,
            total_parts: self.total_parts,
            payload,
        };
        self.next_index += 1;
        Some(packet)
    }
}

fn split(payload: Payload, chunk_size: usize) -> Vec<Payload> {
    match payload {
        Payload::Text(s) => split_text(&s, chunk_size).into_iter().map(Payload::Text).collect(),
        Payload::Binary(b) => split_binary(&b, chunk_size).into_iter().map(Payload::Binary).collect(),
    }
}

/// Split `s` into chunks of at most `chunk_size` bytes, never cutting a
/// multi-byte UTF-8 sequence in half. An empty string still yields one
/// (empty) chunk, so a zero-length payload round-trips as a single part.
fn split_text(s: &str, chunk_size: usize) -> Vec<String> {
    if s.is_empty() {
        return vec![String::new()];
    }

    let bytes = s.as_bytes();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let mut end = (start + chunk_size).min(bytes.len());
        while end > start && !s.is_char_boundary(end) {
            end -= 1;
        }
        if end == start {
            // chunk_size is smaller than this character's encoded length.
            end = start + s[start..].chars().next().map_or(1, char::len_utf8);
        }
        chunks.push(s[start..end].to_string());
        start = end;
    }

    chunks
}

fn split_binary(b: &[u8], chunk_size: usize) -> Vec<Vec<u8>> {
    if b.is_empty() {
        return vec![Vec::new()];
    }
    b.chunks(chunk_size).map(|c| c.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_into_ordered_parts() {
        let payload = Payload::Text("a".repeat(300));
        let config = FragmenterConfig {
            buffering: Buffering::Unbounded,
            max_line_bytes: 150,
        };
        let fragmenter = Fragmenter::new(payload, config);
        let total = fragmenter.total_parts();
        let parts: Vec<_> = fragmenter.collect();
        assert_eq!(parts.len(), total as usize);
        for (i, part) in parts.iter().enumerate() {
            assert_eq!(part.part_number, (i + 1) as u32);
            assert_eq!(part.total_parts, total);
            assert_eq!(part.group_id, parts[0].group_id);
        }
    }

    #[test]
    fn never_splits_a_utf8_char_in_half() {
        let payload = Payload::Text("héllo wörld".repeat(20));
        let config = FragmenterConfig {
            buffering: Buffering::Unbounded,
            max_line_bytes: 130,
        };
        let parts: Vec<_> = Fragmenter::new(payload, config).collect();
        let mut reassembled = String::new();
        for part in parts {
            match part.payload {
                Payload::Text(s) => reassembled.push_str(&s),
                Payload::Binary(_) => panic!("expected text"),
            }
        }
        assert_eq!(reassembled, "héllo wörld".repeat(20));
    }

    #[test]
    fn empty_payload_yields_one_empty_part() {
        let parts: Vec<_> = Fragmenter::new(Payload::Text(String::new()), FragmenterConfig::default())
            .collect();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].payload, Payload::Text(String::new()));
    }

    #[test]
    fn binary_chunks_respect_size() {
        let payload = Payload::Binary(vec![7u8; 1000]);
        let config = FragmenterConfig {
            buffering: Buffering::Unbounded,
            max_line_bytes: 228,
        };
        let parts: Vec<_> = Fragmenter::new(payload, config).collect();
        for part in &parts {
            if let Payload::Binary(b) = &part.payload {
                assert!(b.len() <= 100);
            }
        }
    }
}
