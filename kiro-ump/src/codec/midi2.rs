use crate::codec::{check_data7, check_nibble, expect_type};
use crate::error::Result;
use crate::header::{status_of, MessageType, PacketHeader};
use crate::messages::midi2::{
  ControllerKind, Midi2Message, Midi2Status, PerNoteControllerKind, PerNoteFlags,
};

const BANK_VALID: u32 = 0x01;

pub fn decode_midi2(word0: u32, word1: u32) -> Result<Midi2Message> {
  expect_type(word0, MessageType::Midi2ChannelVoice)?;
  let byte1 = ((word0 >> 8) & 0x7f) as u8;
  let byte2 = (word0 & 0xff) as u8;
  let message = match Midi2Status::try_from(status_of(word0))? {
    Midi2Status::NoteOff => Midi2Message::NoteOff {
      note: byte1,
      attr_type: byte2,
      velocity: (word1 >> 16) as u16,
      attr_data: (word1 & 0xffff) as u16,
    },
    Midi2Status::NoteOn => Midi2Message::NoteOn {
      note: byte1,
      attr_type: byte2,
      velocity: (word1 >> 16) as u16,
      attr_data: (word1 & 0xffff) as u16,
    },
    Midi2Status::PolyPressure => Midi2Message::PolyPressure {
      note: byte1,
      data: word1,
    },
    Midi2Status::RegisteredPerNoteController => Midi2Message::PerNoteController {
      kind: PerNoteControllerKind::Registered,
      note: byte1,
      index: byte2,
      data: word1,
    },
    Midi2Status::AssignablePerNoteController => Midi2Message::PerNoteController {
      kind: PerNoteControllerKind::Assignable,
      note: byte1,
      index: byte2,
      data: word1,
    },
    Midi2Status::PerNoteManagement => Midi2Message::PerNoteManagement {
      note: byte1,
      flags: PerNoteFlags(byte2),
    },
    Midi2Status::ControlChange => Midi2Message::ControlChange {
      index: byte1,
      data: word1,
    },
    Midi2Status::RegisteredController => controller(ControllerKind::Registered, word0, word1),
    Midi2Status::AssignableController => controller(ControllerKind::Assignable, word0, word1),
    Midi2Status::RelativeRegisteredController => {
      controller(ControllerKind::RelativeRegistered, word0, word1)
    }
    Midi2Status::RelativeAssignableController => {
      controller(ControllerKind::RelativeAssignable, word0, word1)
    }
    Midi2Status::ProgramChange => Midi2Message::ProgramChange {
      bank_valid: word0 & BANK_VALID != 0,
      program: ((word1 >> 24) & 0x7f) as u8,
      bank_msb: ((word1 >> 8) & 0xff) as u8,
      bank_lsb: (word1 & 0x7f) as u8,
    },
    Midi2Status::ChannelPressure => Midi2Message::ChannelPressure { data: word1 },
    Midi2Status::PitchBend => Midi2Message::PitchBend { data: word1 },
    Midi2Status::PerNotePitchBend => Midi2Message::PerNotePitchBend {
      note: byte1,
      data: word1,
    },
  };
  Ok(message)
}

fn controller(kind: ControllerKind, word0: u32, word1: u32) -> Midi2Message {
  Midi2Message::Controller {
    kind,
    bank: ((word0 >> 8) & 0x7f) as u8,
    index: (word0 & 0x7f) as u8,
    data: word1,
  }
}

pub fn encode_midi2(group: u8, channel: u8, message: &Midi2Message) -> Result<(u32, u32)> {
  check_nibble("group", group)?;
  check_nibble("channel", channel)?;
  let (byte1, byte2, word1) = match *message {
    Midi2Message::NoteOff {
      note,
      attr_type,
      velocity,
      attr_data,
    }
    | Midi2Message::NoteOn {
      note,
      attr_type,
      velocity,
      attr_data,
    } => (
      check_data7("note", note)?,
      attr_type as u32,
      (velocity as u32) << 16 | attr_data as u32,
    ),
    Midi2Message::PolyPressure { note, data } => (check_data7("note", note)?, 0, data),
    Midi2Message::PerNoteController {
      note, index, data, ..
    } => (check_data7("note", note)?, index as u32, data),
    Midi2Message::PerNoteManagement { note, flags } => {
      (check_data7("note", note)?, flags.0 as u32, 0)
    }
    Midi2Message::ControlChange { index, data } => (check_data7("index", index)?, 0, data),
    Midi2Message::Controller {
      bank, index, data, ..
    } => (check_data7("bank", bank)?, check_data7("index", index)?, data),
    Midi2Message::ProgramChange {
      bank_valid,
      program,
      bank_msb,
      bank_lsb,
    } => {
      let program = check_data7("program", program)?;
      let bank_lsb = check_data7("bank_lsb", bank_lsb)?;
      let flags = if bank_valid { BANK_VALID } else { 0 };
      (0, flags, program << 24 | (bank_msb as u32) << 8 | bank_lsb)
    }
    Midi2Message::ChannelPressure { data } | Midi2Message::PitchBend { data } => (0, 0, data),
    Midi2Message::PerNotePitchBend { note, data } => (check_data7("note", note)?, 0, data),
  };
  let header = PacketHeader {
    mtype: MessageType::Midi2ChannelVoice.into(),
    group,
    status: message.status().into(),
    channel,
    byte1: byte1 as u8,
    byte2: byte2 as u8,
  };
  Ok((header.to_word(), word1))
}
