pub mod midi1;
pub mod midi2;
pub mod payload;
pub mod system;

use crate::header::MessageType;
use crate::messages::midi1::Midi1Message;
use crate::messages::midi2::Midi2Message;
use crate::messages::system::SystemMessage;

/// A decoded Universal MIDI Packet.
///
/// Groups and channels are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
  System {
    group: u8,
    message: SystemMessage,
  },
  Midi1 {
    group: u8,
    channel: u8,
    message: Midi1Message,
  },
  Midi2 {
    group: u8,
    channel: u8,
    message: Midi2Message,
  },
  /// 7-bit data packet, recognized but not decoded
  Data { group: u8 },
  /// 8-bit data packet, recognized but not decoded
  ExtendedData { group: u8 },
}

impl Message {
  pub fn mtype(&self) -> MessageType {
    match self {
      Self::System { .. } => MessageType::System,
      Self::Midi1 { .. } => MessageType::Midi1ChannelVoice,
      Self::Midi2 { .. } => MessageType::Midi2ChannelVoice,
      Self::Data { .. } => MessageType::Data,
      Self::ExtendedData { .. } => MessageType::ExtendedData,
    }
  }

  pub fn group(&self) -> u8 {
    match *self {
      Self::System { group, .. }
      | Self::Midi1 { group, .. }
      | Self::Midi2 { group, .. }
      | Self::Data { group }
      | Self::ExtendedData { group } => group,
    }
  }

  /// Channel of channel voice messages
  pub fn channel(&self) -> Option<u8> {
    match *self {
      Self::Midi1 { channel, .. } | Self::Midi2 { channel, .. } => Some(channel),
      _ => None,
    }
  }
}
