use crate::error::Error;

/// MIDI 1.0 Channel Voice status nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Midi1Status {
  NoteOff = 0x8,
  NoteOn = 0x9,
  PolyPressure = 0xa,
  ControlChange = 0xb,
  ProgramChange = 0xc,
  ChannelPressure = 0xd,
  PitchBend = 0xe,
}

impl TryFrom<u8> for Midi1Status {
  type Error = Error;

  fn try_from(status: u8) -> Result<Self, Self::Error> {
    match status {
      0x8 => Ok(Self::NoteOff),
      0x9 => Ok(Self::NoteOn),
      0xa => Ok(Self::PolyPressure),
      0xb => Ok(Self::ControlChange),
      0xc => Ok(Self::ProgramChange),
      0xd => Ok(Self::ChannelPressure),
      0xe => Ok(Self::PitchBend),
      _ => Err(Error::UnknownStatus(status)),
    }
  }
}

impl From<Midi1Status> for u8 {
  fn from(status: Midi1Status) -> Self {
    status as u8
  }
}

/// MIDI 1.0 Channel Voice message carried in a single 32-bit packet.
///
/// Data fields are 7 bits wide on the wire. Decoding keeps whatever byte was received,
/// encoding rejects anything above 0x7f.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Midi1Message {
  NoteOff { note: u8, velocity: u8 },
  NoteOn { note: u8, velocity: u8 },
  PolyPressure { note: u8, data: u8 },
  ControlChange { index: u8, data: u8 },
  ProgramChange { program: u8 },
  ChannelPressure { data: u8 },
  PitchBend { lsb: u8, msb: u8 },
}

impl Midi1Message {
  pub fn status(&self) -> Midi1Status {
    match self {
      Self::NoteOff { .. } => Midi1Status::NoteOff,
      Self::NoteOn { .. } => Midi1Status::NoteOn,
      Self::PolyPressure { .. } => Midi1Status::PolyPressure,
      Self::ControlChange { .. } => Midi1Status::ControlChange,
      Self::ProgramChange { .. } => Midi1Status::ProgramChange,
      Self::ChannelPressure { .. } => Midi1Status::ChannelPressure,
      Self::PitchBend { .. } => Midi1Status::PitchBend,
    }
  }

  /// 14 bits pitch bend value, centered at 0x2000
  pub fn pitch_bend_value(&self) -> Option<u16> {
    match *self {
      Self::PitchBend { lsb, msb } => Some(((msb as u16 & 0x7f) << 7) | (lsb as u16 & 0x7f)),
      _ => None,
    }
  }
}
