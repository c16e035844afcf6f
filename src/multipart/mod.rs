//! Multipart fragmenting and reassembly: carrying a payload larger than
//! one IRC line's byte ceiling across many self-describing packets.

mod fragment;
mod packet;
mod reassemble;

pub use fragment::{Buffering, Fragmenter, FragmenterConfig};
pub use packet::{MultipartPacket, Payload};
pub use reassemble::{Outcome, Reassembler, ReassemblyConfig};
