mod midi1;
mod midi2;
mod system;

pub use midi1::{decode_midi1, encode_midi1};
pub use midi2::{decode_midi2, encode_midi2};
pub use system::{decode_system, encode_system, encode_system_message};

use crate::error::{Error, Result};
use crate::header::{channel_of, group_of, packet_len, type_of, MessageType};
use crate::messages::payload::Packet;
use crate::messages::Message;

/// Decodes the packet starting at `ump[0]`.
///
/// Words after the packet length are ignored.
pub fn decode(ump: &[u32]) -> Result<Message> {
  let word = *ump.first().ok_or(Error::Truncated {
    expected: 1,
    found: 0,
  })?;

  let mtype = type_of(word);
  let len = packet_len(mtype);
  if ump.len() < len {
    return Err(Error::Truncated {
      expected: len,
      found: ump.len(),
    });
  }

  let group = group_of(word);
  let channel = channel_of(word);
  match MessageType::try_from(mtype)? {
    MessageType::System => {
      decode_system(word).map(|message| Message::System { group, message })
    }
    MessageType::Midi1ChannelVoice => decode_midi1(word).map(|message| Message::Midi1 {
      group,
      channel,
      message,
    }),
    MessageType::Midi2ChannelVoice => decode_midi2(word, ump[1]).map(|message| Message::Midi2 {
      group,
      channel,
      message,
    }),
    MessageType::Data => Ok(Message::Data { group }),
    MessageType::ExtendedData => Ok(Message::ExtendedData { group }),
  }
}

pub fn encode(message: &Message) -> Result<Packet> {
  match *message {
    Message::System { group, message } => {
      encode_system_message(group, &message).map(Packet::single)
    }
    Message::Midi1 {
      group,
      channel,
      message,
    } => encode_midi1(group, channel, &message).map(Packet::single),
    Message::Midi2 {
      group,
      channel,
      message,
    } => encode_midi2(group, channel, &message).map(|(word0, word1)| Packet::from([word0, word1])),
    Message::Data { .. } | Message::ExtendedData { .. } => {
      Err(Error::Unsupported(message.mtype()))
    }
  }
}

impl Message {
  pub fn decode(ump: &[u32]) -> Result<Self> {
    decode(ump)
  }

  pub fn encode(&self) -> Result<Packet> {
    encode(self)
  }
}

impl TryFrom<&[u32]> for Message {
  type Error = Error;

  fn try_from(ump: &[u32]) -> Result<Self> {
    decode(ump)
  }
}

/// Fails with `WrongType` unless the type nibble of `word` is `expected`
pub(crate) fn expect_type(word: u32, expected: MessageType) -> Result<()> {
  let found = type_of(word);
  if found == expected as u8 {
    Ok(())
  } else {
    Err(Error::WrongType { expected, found })
  }
}

/// Checks that `value` fits in `bits` bits
pub(crate) fn check_bits(field: &'static str, value: u8, bits: u32) -> Result<u32> {
  let max = (1u32 << bits) - 1;
  let value = value as u32;
  if value <= max {
    Ok(value)
  } else {
    Err(Error::FieldOverflow { field, value, max })
  }
}

#[inline]
pub(crate) fn check_nibble(field: &'static str, value: u8) -> Result<u32> {
  check_bits(field, value, 4)
}

#[inline]
pub(crate) fn check_data7(field: &'static str, value: u8) -> Result<u32> {
  check_bits(field, value, 7)
}
