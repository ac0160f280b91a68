use crate::error::Error;

/// MIDI 2.0 Channel Voice status nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Midi2Status {
  RegisteredPerNoteController = 0x0,
  AssignablePerNoteController = 0x1,
  RegisteredController = 0x2,
  AssignableController = 0x3,
  RelativeRegisteredController = 0x4,
  RelativeAssignableController = 0x5,
  PerNotePitchBend = 0x6,
  NoteOff = 0x8,
  NoteOn = 0x9,
  PolyPressure = 0xa,
  ControlChange = 0xb,
  ProgramChange = 0xc,
  ChannelPressure = 0xd,
  PitchBend = 0xe,
  PerNoteManagement = 0xf,
}

impl TryFrom<u8> for Midi2Status {
  type Error = Error;

  fn try_from(status: u8) -> Result<Self, Self::Error> {
    match status {
      0x0 => Ok(Self::RegisteredPerNoteController),
      0x1 => Ok(Self::AssignablePerNoteController),
      0x2 => Ok(Self::RegisteredController),
      0x3 => Ok(Self::AssignableController),
      0x4 => Ok(Self::RelativeRegisteredController),
      0x5 => Ok(Self::RelativeAssignableController),
      0x6 => Ok(Self::PerNotePitchBend),
      0x8 => Ok(Self::NoteOff),
      0x9 => Ok(Self::NoteOn),
      0xa => Ok(Self::PolyPressure),
      0xb => Ok(Self::ControlChange),
      0xc => Ok(Self::ProgramChange),
      0xd => Ok(Self::ChannelPressure),
      0xe => Ok(Self::PitchBend),
      0xf => Ok(Self::PerNoteManagement),
      _ => Err(Error::UnknownStatus(status)),
    }
  }
}

impl From<Midi2Status> for u8 {
  fn from(status: Midi2Status) -> Self {
    status as u8
  }
}

/// Per-note controllers come in a registered and an assignable flavour sharing one layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerNoteControllerKind {
  Registered,
  Assignable,
}

/// RPN, NRPN and their relative forms share one layout and differ only by status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerKind {
  /// RPN
  Registered,
  /// NRPN
  Assignable,
  /// Relative RPN
  RelativeRegistered,
  /// Relative NRPN
  RelativeAssignable,
}

impl ControllerKind {
  /// Relative kinds carry a two's complement increment in their data field
  pub fn is_relative(self) -> bool {
    matches!(self, Self::RelativeRegistered | Self::RelativeAssignable)
  }
}

/// Option flags of a Per-Note Management message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PerNoteFlags(pub u8);

impl PerNoteFlags {
  pub const RESET_CONTROLLERS: u8 = 0x01;
  pub const DETACH_CONTROLLERS: u8 = 0x02;

  pub fn new(detach: bool, reset: bool) -> Self {
    let mut flags = 0;
    if detach {
      flags |= Self::DETACH_CONTROLLERS;
    }
    if reset {
      flags |= Self::RESET_CONTROLLERS;
    }
    Self(flags)
  }

  pub fn reset(self) -> bool {
    self.0 & Self::RESET_CONTROLLERS != 0
  }

  pub fn detach(self) -> bool {
    self.0 & Self::DETACH_CONTROLLERS != 0
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
  NoData,
  ManufacturerSpecific,
  ProfileSpecific,
  Pitch7_9,
  Reserved(u8),
}

impl From<u8> for AttributeType {
  fn from(data: u8) -> Self {
    match data {
      0x00 => Self::NoData,
      0x01 => Self::ManufacturerSpecific,
      0x02 => Self::ProfileSpecific,
      0x03 => Self::Pitch7_9,
      _ => Self::Reserved(data),
    }
  }
}

impl From<AttributeType> for u8 {
  fn from(attr: AttributeType) -> Self {
    match attr {
      AttributeType::NoData => 0x00,
      AttributeType::ManufacturerSpecific => 0x01,
      AttributeType::ProfileSpecific => 0x02,
      AttributeType::Pitch7_9 => 0x03,
      AttributeType::Reserved(data) => data,
    }
  }
}

/// MIDI 2.0 Channel Voice message carried in a 64-bit packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Midi2Message {
  NoteOff {
    note: u8,
    attr_type: u8,
    velocity: u16,
    attr_data: u16,
  },
  NoteOn {
    note: u8,
    attr_type: u8,
    velocity: u16,
    attr_data: u16,
  },
  PolyPressure {
    note: u8,
    data: u32,
  },
  PerNoteController {
    kind: PerNoteControllerKind,
    note: u8,
    index: u8,
    data: u32,
  },
  PerNoteManagement {
    note: u8,
    flags: PerNoteFlags,
  },
  ControlChange {
    index: u8,
    data: u32,
  },
  Controller {
    kind: ControllerKind,
    bank: u8,
    index: u8,
    data: u32,
  },
  /// `bank_msb` and `bank_lsb` are only meaningful when `bank_valid` is set
  ProgramChange {
    bank_valid: bool,
    program: u8,
    bank_msb: u8,
    bank_lsb: u8,
  },
  ChannelPressure {
    data: u32,
  },
  PitchBend {
    /// unsigned bipolar value centered at 0x80000000
    data: u32,
  },
  PerNotePitchBend {
    note: u8,
    /// unsigned bipolar value centered at 0x80000000
    data: u32,
  },
}

impl Midi2Message {
  pub fn status(&self) -> Midi2Status {
    match self {
      Self::NoteOff { .. } => Midi2Status::NoteOff,
      Self::NoteOn { .. } => Midi2Status::NoteOn,
      Self::PolyPressure { .. } => Midi2Status::PolyPressure,
      Self::PerNoteController { kind, .. } => match kind {
        PerNoteControllerKind::Registered => Midi2Status::RegisteredPerNoteController,
        PerNoteControllerKind::Assignable => Midi2Status::AssignablePerNoteController,
      },
      Self::PerNoteManagement { .. } => Midi2Status::PerNoteManagement,
      Self::ControlChange { .. } => Midi2Status::ControlChange,
      Self::Controller { kind, .. } => match kind {
        ControllerKind::Registered => Midi2Status::RegisteredController,
        ControllerKind::Assignable => Midi2Status::AssignableController,
        ControllerKind::RelativeRegistered => Midi2Status::RelativeRegisteredController,
        ControllerKind::RelativeAssignable => Midi2Status::RelativeAssignableController,
      },
      Self::ProgramChange { .. } => Midi2Status::ProgramChange,
      Self::ChannelPressure { .. } => Midi2Status::ChannelPressure,
      Self::PitchBend { .. } => Midi2Status::PitchBend,
      Self::PerNotePitchBend { .. } => Midi2Status::PerNotePitchBend,
    }
  }

  pub fn attribute(&self) -> Option<AttributeType> {
    match *self {
      Self::NoteOff { attr_type, .. } | Self::NoteOn { attr_type, .. } => {
        Some(AttributeType::from(attr_type))
      }
      _ => None,
    }
  }

  /// 14 bits bank number of a Program Change, if the bank is valid
  pub fn bank(&self) -> Option<u16> {
    match *self {
      Self::ProgramChange {
        bank_valid: true,
        bank_msb,
        bank_lsb,
        ..
      } => Some(((bank_msb as u16 & 0x7f) << 7) | (bank_lsb as u16 & 0x7f)),
      _ => None,
    }
  }
}
