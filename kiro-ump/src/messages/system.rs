use crate::error::Error;
use crate::messages::payload::Params;

/// System Common and Real Time status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemStatus {
  SysExStart = 0xf0,
  MidiTimeCode = 0xf1,
  SongPositionPointer = 0xf2,
  SongSelect = 0xf3,
  TuneRequest = 0xf6,
  SysExEnd = 0xf7,
  TimingClock = 0xf8,
  Start = 0xfa,
  Continue = 0xfb,
  Stop = 0xfc,
  ActiveSensing = 0xfe,
  Reset = 0xff,
}

impl SystemStatus {
  /// Number of parameter bytes that follow the status
  pub fn arity(self) -> usize {
    match self {
      Self::SongPositionPointer => 2,
      Self::MidiTimeCode | Self::SongSelect => 1,
      Self::SysExStart
      | Self::TuneRequest
      | Self::SysExEnd
      | Self::TimingClock
      | Self::Start
      | Self::Continue
      | Self::Stop
      | Self::ActiveSensing
      | Self::Reset => 0,
    }
  }

  pub fn is_real_time(self) -> bool {
    self as u8 >= 0xf8
  }
}

impl TryFrom<u8> for SystemStatus {
  type Error = Error;

  fn try_from(status: u8) -> Result<Self, Self::Error> {
    match status {
      0xf0 => Ok(Self::SysExStart),
      0xf1 => Ok(Self::MidiTimeCode),
      0xf2 => Ok(Self::SongPositionPointer),
      0xf3 => Ok(Self::SongSelect),
      0xf6 => Ok(Self::TuneRequest),
      0xf7 => Ok(Self::SysExEnd),
      0xf8 => Ok(Self::TimingClock),
      0xfa => Ok(Self::Start),
      0xfb => Ok(Self::Continue),
      0xfc => Ok(Self::Stop),
      0xfe => Ok(Self::ActiveSensing),
      0xff => Ok(Self::Reset),
      _ => Err(Error::UnknownStatus(status)),
    }
  }
}

impl From<SystemStatus> for u8 {
  fn from(status: SystemStatus) -> Self {
    status as u8
  }
}

/// System Common and Real Time message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemMessage {
  // System Common
  SysExStart,
  /// MIDI Time Code Quarter Frame
  MidiTimeCode { data: u8 },
  SongPositionPointer { lsb: u8, msb: u8 },
  SongSelect { song: u8 },
  TuneRequest,
  SysExEnd,

  // System Real Time
  TimingClock,
  Start,
  Continue,
  Stop,
  ActiveSensing,
  Reset,
}

impl SystemMessage {
  pub fn status(&self) -> SystemStatus {
    match self {
      Self::SysExStart => SystemStatus::SysExStart,
      Self::MidiTimeCode { .. } => SystemStatus::MidiTimeCode,
      Self::SongPositionPointer { .. } => SystemStatus::SongPositionPointer,
      Self::SongSelect { .. } => SystemStatus::SongSelect,
      Self::TuneRequest => SystemStatus::TuneRequest,
      Self::SysExEnd => SystemStatus::SysExEnd,
      Self::TimingClock => SystemStatus::TimingClock,
      Self::Start => SystemStatus::Start,
      Self::Continue => SystemStatus::Continue,
      Self::Stop => SystemStatus::Stop,
      Self::ActiveSensing => SystemStatus::ActiveSensing,
      Self::Reset => SystemStatus::Reset,
    }
  }

  /// Parameter bytes in wire order; the length always matches `status().arity()`
  pub fn params(&self) -> Params {
    match *self {
      Self::MidiTimeCode { data } => Params::from([data]),
      Self::SongPositionPointer { lsb, msb } => Params::from([lsb, msb]),
      Self::SongSelect { song } => Params::from([song]),
      _ => Params::default(),
    }
  }

  /// 14 bits song position, in MIDI beats
  pub fn position(&self) -> Option<u16> {
    match *self {
      Self::SongPositionPointer { lsb, msb } => {
        Some(((msb as u16 & 0x7f) << 7) | (lsb as u16 & 0x7f))
      }
      _ => None,
    }
  }

  pub fn time_code(&self) -> Option<TimeCode> {
    match *self {
      Self::MidiTimeCode { data } => Some(TimeCode::from(data)),
      _ => None,
    }
  }
}

/// One piece of a MIDI Time Code Quarter Frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeCode {
  FrameLessSignificantNibble(u8),
  FrameMostSignificantNibble(u8),
  SecondsLessSignificantNibble(u8),
  SecondsMostSignificantNibble(u8),
  MinutesLessSignificantNibble(u8),
  MinutesMostSignificantNibble(u8),
  HoursLessSignificantNibble(u8),
  HoursMostSignificantNibble(u8),
}

impl From<u8> for TimeCode {
  fn from(data: u8) -> Self {
    let value = data & 0x0f;
    match (data >> 4) & 0x07 {
      0 => Self::FrameLessSignificantNibble(value),
      1 => Self::FrameMostSignificantNibble(value),
      2 => Self::SecondsLessSignificantNibble(value),
      3 => Self::SecondsMostSignificantNibble(value),
      4 => Self::MinutesLessSignificantNibble(value),
      5 => Self::MinutesMostSignificantNibble(value),
      6 => Self::HoursLessSignificantNibble(value),
      _ => Self::HoursMostSignificantNibble(value),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn status_from_byte() {
    let known = [
      0xf0, 0xf1, 0xf2, 0xf3, 0xf6, 0xf7, 0xf8, 0xfa, 0xfb, 0xfc, 0xfe, 0xff,
    ];
    for status in 0x00..=0xffu8 {
      let result = SystemStatus::try_from(status);
      if known.contains(&status) {
        assert_eq!(result.map(u8::from), Ok(status));
      } else {
        assert_eq!(result, Err(Error::UnknownStatus(status)));
      }
    }
  }

  #[test]
  fn status_arity() {
    assert_eq!(SystemStatus::SongPositionPointer.arity(), 2);
    assert_eq!(SystemStatus::SongSelect.arity(), 1);
    assert_eq!(SystemStatus::MidiTimeCode.arity(), 1);
    assert_eq!(SystemStatus::TuneRequest.arity(), 0);
    assert_eq!(SystemStatus::TimingClock.arity(), 0);
    assert_eq!(SystemStatus::SysExStart.arity(), 0);
    assert_eq!(SystemStatus::SysExEnd.arity(), 0);
    assert_eq!(SystemStatus::Reset.arity(), 0);
  }

  #[test]
  fn params_match_arity() {
    let messages = [
      SystemMessage::SysExStart,
      SystemMessage::MidiTimeCode { data: 0x12 },
      SystemMessage::SongPositionPointer { lsb: 1, msb: 2 },
      SystemMessage::SongSelect { song: 3 },
      SystemMessage::TimingClock,
      SystemMessage::Reset,
    ];
    for message in messages {
      assert_eq!(
        message.params().len(),
        message.status().arity(),
        "{:?}",
        message
      );
    }
  }

  #[test]
  fn params_in_wire_order() {
    assert_eq!(
      SystemMessage::MidiTimeCode { data: 0x12 }.params().as_slice(),
      [0x12]
    );
    assert_eq!(
      SystemMessage::SongSelect { song: 0x85 }.params().as_slice(),
      [0x85]
    );
    assert_eq!(
      SystemMessage::SongPositionPointer { lsb: 1, msb: 2 }
        .params()
        .as_slice(),
      [1, 2]
    );
    assert!(SystemMessage::Start.params().is_empty());
  }

  #[test]
  fn real_time() {
    assert!(SystemStatus::TimingClock.is_real_time());
    assert!(SystemStatus::Reset.is_real_time());
    assert!(!SystemStatus::SysExEnd.is_real_time());
  }

  #[test]
  fn song_position() {
    let message = SystemMessage::SongPositionPointer {
      lsb: 0x7f,
      msb: 0x7f,
    };
    assert_eq!(message.position(), Some(0x3fff));
    assert_eq!(SystemMessage::Stop.position(), None);
  }

  #[test]
  fn midi_time_code() {
    let test_cases = vec![
      (0x01, TimeCode::FrameLessSignificantNibble(1)),
      (0x12, TimeCode::FrameMostSignificantNibble(2)),
      (0x23, TimeCode::SecondsLessSignificantNibble(3)),
      (0x34, TimeCode::SecondsMostSignificantNibble(4)),
      (0x45, TimeCode::MinutesLessSignificantNibble(5)),
      (0x56, TimeCode::MinutesMostSignificantNibble(6)),
      (0x67, TimeCode::HoursLessSignificantNibble(7)),
      (0x78, TimeCode::HoursMostSignificantNibble(8)),
    ];

    for (data, expected) in test_cases {
      assert_eq!(
        SystemMessage::MidiTimeCode { data }.time_code(),
        Some(expected)
      );
    }
  }
}
