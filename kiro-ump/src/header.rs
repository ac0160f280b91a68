//! Fields shared by the first word of every Universal MIDI Packet.
//!
//! Positions are logical bit positions inside a `u32`, so the same shifts work on any host:
//!
//! ```text
//!  31..28  27..24  23..20  19..16  15..8  7..0
//!   type   group   status  channel byte1  byte2
//! ```

use crate::error::Error;

/// UMP message type nibble (bits 31..28 of the first word)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
  /// System Common and Real Time
  System = 0x1,
  /// MIDI 1.0 Channel Voice
  Midi1ChannelVoice = 0x2,
  /// 7-bit Data (SysEx)
  Data = 0x3,
  /// MIDI 2.0 Channel Voice
  Midi2ChannelVoice = 0x4,
  /// 8-bit Extended Data
  ExtendedData = 0x5,
}

impl MessageType {
  /// Number of 32-bit words in a packet of this type
  pub fn word_count(self) -> usize {
    packet_len(self as u8)
  }
}

impl TryFrom<u8> for MessageType {
  type Error = Error;

  fn try_from(mtype: u8) -> Result<Self, Self::Error> {
    match mtype {
      0x1 => Ok(Self::System),
      0x2 => Ok(Self::Midi1ChannelVoice),
      0x3 => Ok(Self::Data),
      0x4 => Ok(Self::Midi2ChannelVoice),
      0x5 => Ok(Self::ExtendedData),
      _ => Err(Error::UnknownType(mtype)),
    }
  }
}

impl From<MessageType> for u8 {
  fn from(mtype: MessageType) -> Self {
    mtype as u8
  }
}

#[inline]
pub fn type_of(word: u32) -> u8 {
  ((word >> 28) & 0x0f) as u8
}

#[inline]
pub fn group_of(word: u32) -> u8 {
  ((word >> 24) & 0x0f) as u8
}

#[inline]
pub fn status_of(word: u32) -> u8 {
  ((word >> 20) & 0x0f) as u8
}

#[inline]
pub fn channel_of(word: u32) -> u8 {
  ((word >> 16) & 0x0f) as u8
}

/// Number of 32-bit words of a packet given its type nibble.
///
/// Covers every nibble, including types this crate does not decode, so a stream can be framed
/// without understanding all of its contents.
pub fn packet_len(mtype: u8) -> usize {
  match mtype & 0x0f {
    0x0 | 0x1 | 0x2 | 0x6 | 0x7 => 1,
    0x3 | 0x4 | 0x8 | 0x9 | 0xa => 2,
    0xb | 0xc => 3,
    _ => 4,
  }
}

/// Canonical view of the first word of a channel voice or data packet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PacketHeader {
  pub mtype: u8,
  pub group: u8,
  pub status: u8,
  pub channel: u8,
  pub byte1: u8,
  pub byte2: u8,
}

impl PacketHeader {
  pub fn from_word(word: u32) -> Self {
    Self {
      mtype: type_of(word),
      group: group_of(word),
      status: status_of(word),
      channel: channel_of(word),
      byte1: ((word >> 8) & 0xff) as u8,
      byte2: (word & 0xff) as u8,
    }
  }

  /// Packs the header back into a word. Nibble fields are truncated to 4 bits.
  pub fn to_word(&self) -> u32 {
    (self.mtype as u32 & 0x0f) << 28
      | (self.group as u32 & 0x0f) << 24
      | (self.status as u32 & 0x0f) << 20
      | (self.channel as u32 & 0x0f) << 16
      | (self.byte1 as u32) << 8
      | self.byte2 as u32
  }
}

impl From<u32> for PacketHeader {
  fn from(word: u32) -> Self {
    Self::from_word(word)
  }
}
