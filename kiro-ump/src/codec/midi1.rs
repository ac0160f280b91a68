use crate::codec::{check_data7, check_nibble, expect_type};
use crate::error::Result;
use crate::header::{status_of, MessageType, PacketHeader};
use crate::messages::midi1::{Midi1Message, Midi1Status};

pub fn decode_midi1(word: u32) -> Result<Midi1Message> {
  expect_type(word, MessageType::Midi1ChannelVoice)?;
  let byte1 = ((word >> 8) & 0xff) as u8;
  let byte2 = (word & 0xff) as u8;
  let message = match Midi1Status::try_from(status_of(word))? {
    Midi1Status::NoteOff => Midi1Message::NoteOff {
      note: byte1,
      velocity: byte2,
    },
    Midi1Status::NoteOn => Midi1Message::NoteOn {
      note: byte1,
      velocity: byte2,
    },
    Midi1Status::PolyPressure => Midi1Message::PolyPressure {
      note: byte1,
      data: byte2,
    },
    Midi1Status::ControlChange => Midi1Message::ControlChange {
      index: byte1,
      data: byte2,
    },
    Midi1Status::ProgramChange => Midi1Message::ProgramChange { program: byte1 },
    Midi1Status::ChannelPressure => Midi1Message::ChannelPressure { data: byte1 },
    Midi1Status::PitchBend => Midi1Message::PitchBend {
      lsb: byte1,
      msb: byte2,
    },
  };
  Ok(message)
}

pub fn encode_midi1(group: u8, channel: u8, message: &Midi1Message) -> Result<u32> {
  check_nibble("group", group)?;
  check_nibble("channel", channel)?;
  let (byte1, byte2) = match *message {
    Midi1Message::NoteOff { note, velocity } | Midi1Message::NoteOn { note, velocity } => {
      (check_data7("note", note)?, check_data7("velocity", velocity)?)
    }
    Midi1Message::PolyPressure { note, data } => {
      (check_data7("note", note)?, check_data7("data", data)?)
    }
    Midi1Message::ControlChange { index, data } => {
      (check_data7("index", index)?, check_data7("data", data)?)
    }
    Midi1Message::ProgramChange { program } => (check_data7("program", program)?, 0),
    Midi1Message::ChannelPressure { data } => (check_data7("data", data)?, 0),
    Midi1Message::PitchBend { lsb, msb } => (check_data7("lsb", lsb)?, check_data7("msb", msb)?),
  };
  let header = PacketHeader {
    mtype: MessageType::Midi1ChannelVoice.into(),
    group,
    status: message.status().into(),
    channel,
    byte1: byte1 as u8,
    byte2: byte2 as u8,
  };
  Ok(header.to_word())
}
