//! The self-describing packet envelope carried inside each outer IRC
//! message of a fragmented payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MultipartError;

/// One chunk of a fragmented logical payload.
///
/// Packets are self-describing: the group id, index, and total travel
/// with every chunk, so the transport is free to reorder or duplicate
/// them and the reassembler can still make sense of what arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipartPacket {
    /// Groups every packet belonging to the same logical payload.
    pub group_id: String,
    /// When the fragmenter produced this packet (shared across a group).
    pub created_at: DateTime<Utc>,
    /// This packet's 1-based position in the sequence.
    pub part_number: u32,
    /// The total number of packets in this group.
    pub total_parts: u32,
    /// The chunk itself.
    pub payload: Payload,
}

/// A fragment's payload kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Payload {
    /// A UTF-8 text chunk.
    Text(String),
    /// An arbitrary binary chunk.
    Binary(Vec<u8>),
}

impl Payload {
    /// The chunk's length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Payload::Text(s) => s.len(),
            Payload::Binary(b) => b.len(),
        }
    }

    /// Whether the chunk carries zero bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MultipartPacket {
    /// Encode this packet to its `rmp-serde` MessagePack form.
    pub fn to_msgpack(&self) -> Vec<u8> {
        rmp_serde::to_vec(self).expect("MultipartPacket fields are always serializable")
    }

    /// Decode a packet from its `rmp-serde` MessagePack form.
    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, MultipartError> {
        rmp_serde::from_slice(bytes)
            .map_err(|e| MultipartError::DeserializeFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msgpack_round_trips() {
        let packet = MultipartPacket {
            group_id: "abc".to_string(),
            created_at: Utc::now(),
            part_number: 1,
            total_parts: 3,
            payload: Payload::Text("hello".to_string()),
        };
        let bytes = packet.to_msgpack();
        let decoded = MultipartPacket::from_msgpack(&bytes).unwrap();
        assert_eq!(decoded, packet);
    }

    #[test]
    fn rejects_garbage_bytes() {
        assert!(MultipartPacket::from_msgpack(&[0xff, 0x00, 0x01]).is_err());
    }
}
