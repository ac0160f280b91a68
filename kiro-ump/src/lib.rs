//! Universal MIDI Packet codec.
//!
//! Decodes and encodes the 32-bit and 64-bit packets used by MIDI 2.0 transports:
//! MIDI 1.0 Channel Voice, MIDI 2.0 Channel Voice and System Common / Real Time messages.
//! Every field is read and written with explicit shifts over `u32` words, so results do not
//! depend on the host byte order.
//!
//! ```
//! use kiro_ump::{decode_midi1, encode_midi1, messages::midi1::Midi1Message};
//!
//! let message = decode_midi1(0x20903c7f).unwrap();
//! assert_eq!(message, Midi1Message::NoteOn { note: 60, velocity: 127 });
//! assert_eq!(encode_midi1(0, 0, &message).unwrap(), 0x20903c7f);
//! ```

pub mod codec;
pub mod decoder;
pub mod error;
pub mod filter;
pub mod header;
pub mod messages;

pub use codec::{
  decode, decode_midi1, decode_midi2, decode_system, encode, encode_midi1, encode_midi2,
  encode_system, encode_system_message,
};
pub use decoder::Decoder;
pub use error::{Error, Result};
pub use filter::Filter;
pub use header::{channel_of, group_of, packet_len, status_of, type_of, MessageType, PacketHeader};
pub use messages::payload::{Packet, Params};
pub use messages::Message;
