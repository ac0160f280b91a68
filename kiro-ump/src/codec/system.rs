use crate::codec::{check_nibble, expect_type};
use crate::error::{Error, Result};
use crate::header::MessageType;
use crate::messages::system::{SystemMessage, SystemStatus};

/// Decodes a System Common or Real Time message.
///
/// Parameter bytes not used by the status are ignored, whatever their value.
pub fn decode_system(word: u32) -> Result<SystemMessage> {
  expect_type(word, MessageType::System)?;
  let status = ((word >> 16) & 0xff) as u8;
  let parm1 = ((word >> 8) & 0xff) as u8;
  let parm2 = (word & 0xff) as u8;
  let message = match SystemStatus::try_from(status)? {
    SystemStatus::SysExStart => SystemMessage::SysExStart,
    SystemStatus::MidiTimeCode => SystemMessage::MidiTimeCode { data: parm1 },
    SystemStatus::SongPositionPointer => SystemMessage::SongPositionPointer {
      lsb: parm1,
      msb: parm2,
    },
    SystemStatus::SongSelect => SystemMessage::SongSelect { song: parm1 },
    SystemStatus::TuneRequest => SystemMessage::TuneRequest,
    SystemStatus::SysExEnd => SystemMessage::SysExEnd,
    SystemStatus::TimingClock => SystemMessage::TimingClock,
    SystemStatus::Start => SystemMessage::Start,
    SystemStatus::Continue => SystemMessage::Continue,
    SystemStatus::Stop => SystemMessage::Stop,
    SystemStatus::ActiveSensing => SystemMessage::ActiveSensing,
    SystemStatus::Reset => SystemMessage::Reset,
  };
  Ok(message)
}

/// Builds a System packet from a raw status byte and exactly the parameters it takes
pub fn encode_system(group: u8, status: u8, parms: &[u8]) -> Result<u32> {
  let group = check_nibble("group", group)?;
  let expected = SystemStatus::try_from(status)?.arity();
  if parms.len() != expected {
    return Err(Error::ArityMismatch {
      status,
      expected,
      found: parms.len(),
    });
  }

  let mut word = (MessageType::System as u32) << 28 | group << 24 | (status as u32) << 16;
  if let Some(parm1) = parms.first() {
    word |= (*parm1 as u32) << 8;
  }
  if let Some(parm2) = parms.get(1) {
    word |= *parm2 as u32;
  }
  Ok(word)
}

pub fn encode_system_message(group: u8, message: &SystemMessage) -> Result<u32> {
  encode_system(group, message.status().into(), message.params().as_slice())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decode_wrong_type() {
    assert_eq!(
      decode_system(0x20f80000),
      Err(Error::WrongType {
        expected: MessageType::System,
        found: 0x2
      })
    );
  }

  #[test]
  fn decode_unknown_status() {
    for status in [0x00u8, 0x80, 0xf4, 0xf5, 0xf9, 0xfd] {
      let word = 0x10000000 | (status as u32) << 16;
      assert_eq!(decode_system(word), Err(Error::UnknownStatus(status)));
    }
  }

  #[test]
  fn decode_midi_time_code() {
    assert_eq!(
      decode_system(0x10f13400),
      Ok(SystemMessage::MidiTimeCode { data: 0x34 })
    );
  }

  #[test]
  fn decode_song_position_pointer() {
    let result = decode_system(0x10f27f7f);
    assert_eq!(
      result,
      Ok(SystemMessage::SongPositionPointer {
        lsb: 0x7f,
        msb: 0x7f
      })
    );
    assert_eq!(result.map(|message| message.position()), Ok(Some(0x3fff)));
  }

  #[test]
  fn decode_song_select_ignores_second_parameter() {
    assert_eq!(
      decode_system(0x10f37fff),
      Ok(SystemMessage::SongSelect { song: 0x7f })
    );
  }

  #[test]
  fn decode_timing_clock_ignores_parameters() {
    for word in [0x10f80000, 0x10f8ffff, 0x10f81234] {
      assert_eq!(decode_system(word), Ok(SystemMessage::TimingClock));
    }
  }

  #[test]
  fn decode_no_parameter_messages() {
    let test_cases = [
      (0x10f00000, SystemMessage::SysExStart),
      (0x10f60000, SystemMessage::TuneRequest),
      (0x10f70000, SystemMessage::SysExEnd),
      (0x10fa0000, SystemMessage::Start),
      (0x10fb0000, SystemMessage::Continue),
      (0x10fc0000, SystemMessage::Stop),
      (0x10fe0000, SystemMessage::ActiveSensing),
      (0x10ff0000, SystemMessage::Reset),
    ];
    for (word, expected) in test_cases {
      assert_eq!(decode_system(word), Ok(expected));
    }
  }

  #[test]
  fn decode_keeps_group() {
    assert_eq!(crate::header::group_of(0x1cfa0000), 0xc);
    assert_eq!(decode_system(0x1cfa0000), Ok(SystemMessage::Start));
  }

  #[test]
  fn encode_song_select_arity() {
    assert_eq!(
      encode_system(0, 0xf3, &[]),
      Err(Error::ArityMismatch {
        status: 0xf3,
        expected: 1,
        found: 0
      })
    );
    assert_eq!(encode_system(0, 0xf3, &[0x05]), Ok(0x10f30500));
  }

  #[test]
  fn encode_arity_mismatch() {
    assert!(matches!(
      encode_system(0, 0xf8, &[0x01]),
      Err(Error::ArityMismatch {
        expected: 0,
        found: 1,
        ..
      })
    ));
    assert!(matches!(
      encode_system(0, 0xf2, &[0x01]),
      Err(Error::ArityMismatch {
        expected: 2,
        found: 1,
        ..
      })
    ));
  }

  #[test]
  fn encode_unknown_status() {
    assert_eq!(encode_system(0, 0xf9, &[]), Err(Error::UnknownStatus(0xf9)));
    assert_eq!(encode_system(0, 0x90, &[]), Err(Error::UnknownStatus(0x90)));
  }

  #[test]
  fn encode_overflow() {
    assert!(matches!(
      encode_system(16, 0xf8, &[]),
      Err(Error::FieldOverflow { field: "group", .. })
    ));
  }

  #[test]
  fn encode_full_byte_parameters() {
    assert_eq!(encode_system(0, 0xf1, &[0x80]), Ok(0x10f18000));
    assert_eq!(encode_system(0, 0xf2, &[0x00, 0x80]), Ok(0x10f20080));
    assert_eq!(encode_system(3, 0xf2, &[0xff, 0xff]), Ok(0x13f2ffff));
  }

  #[test]
  fn round_trip_high_parameter_bytes() -> anyhow::Result<()> {
    let message = decode_system(0x10f2ffff)?;
    assert_eq!(
      message,
      SystemMessage::SongPositionPointer {
        lsb: 0xff,
        msb: 0xff
      }
    );
    assert_eq!(encode_system_message(0, &message)?, 0x10f2ffff);

    let message = SystemMessage::MidiTimeCode { data: 0x80 };
    assert_eq!(decode_system(encode_system_message(0, &message)?)?, message);
    Ok(())
  }

  #[test]
  fn encode_song_position_pointer() {
    assert_eq!(encode_system(5, 0xf2, &[0x12, 0x34]), Ok(0x15f21234));
  }

  #[test]
  fn encode_timing_clock() {
    assert_eq!(
      encode_system_message(0, &SystemMessage::TimingClock),
      Ok(0x10f80000)
    );
  }

  #[test]
  fn round_trip() -> anyhow::Result<()> {
    let messages = [
      SystemMessage::SysExStart,
      SystemMessage::MidiTimeCode { data: 0x7f },
      SystemMessage::SongPositionPointer {
        lsb: 0x01,
        msb: 0x7e,
      },
      SystemMessage::SongSelect { song: 0x40 },
      SystemMessage::TuneRequest,
      SystemMessage::SysExEnd,
      SystemMessage::TimingClock,
      SystemMessage::Start,
      SystemMessage::Continue,
      SystemMessage::Stop,
      SystemMessage::ActiveSensing,
      SystemMessage::Reset,
    ];
    for group in 0..16 {
      for message in messages {
        let word = encode_system_message(group, &message)?;
        assert_eq!(crate::header::group_of(word), group);
        assert_eq!(decode_system(word)?, message);
      }
    }
    Ok(())
  }
}
