use std::fmt::{Debug, Formatter};

use crate::header::MessageType;

/// Selects which packets a [`Decoder`](crate::Decoder) emits.
///
/// Groups and channels are 0-based. The default filter accepts everything.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Filter {
  mtypes: u16,
  groups: u16,
  channels: [u16; 16],
}

impl Filter {
  pub fn new() -> Self {
    Self {
      mtypes: 0xffff,
      groups: 0xffff,
      channels: [0xffff; 16],
    }
  }

  #[must_use]
  pub fn with_message_types(mut self, mtypes: &[MessageType]) -> Self {
    self.mtypes = 0;
    for mtype in mtypes.iter().cloned() {
      self.mtypes |= 1 << (mtype as u8);
    }
    self
  }

  #[must_use]
  pub fn with_groups(mut self, groups: &[u8]) -> Self {
    self.groups = 0;
    for group in groups.iter().cloned().filter(|group| *group < 16) {
      self.groups |= 1 << group;
    }
    self
  }

  /// Restricts the channels accepted for one group; other groups are left untouched
  #[must_use]
  pub fn with_channels(mut self, group: u8, channels: &[u8]) -> Self {
    if group < 16 {
      let group = group as usize;
      self.channels[group] = 0;
      for channel in channels.iter().cloned().filter(|channel| *channel < 16) {
        self.channels[group] |= 1 << channel;
      }
    }
    self
  }

  #[inline]
  pub fn mtype(&self, mtype: u8) -> bool {
    let mtype = mtype & 0x0f;
    let mask = 1 << mtype;
    (self.mtypes & mask) != 0
  }

  #[inline]
  pub fn group(&self, group: u8) -> bool {
    let group = group & 0x0f;
    let mask = 1 << group;
    (self.groups & mask) != 0
  }

  #[inline]
  pub fn channel(&self, group: u8, channel: u8) -> bool {
    let group = (group & 0x0f) as usize;
    let channel = channel & 0x0f;
    let mask = 1 << channel;
    (self.channels[group] & mask) != 0
  }
}

impl Default for Filter {
  fn default() -> Self {
    Self::new()
  }
}

impl Debug for Filter {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    writeln!(f, "Filter:")?;
    writeln!(f, "  MT : {:016b}  GR : {:016b}", self.mtypes, self.groups)?;
    for i in 0..8 {
      let j = i * 2;
      writeln!(
        f,
        "  G{:02}: {:016b}  G{:02}: {:016b}",
        j,
        self.channels[j],
        j + 1,
        self.channels[j + 1]
      )?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_accepts_everything() {
    let filter = Filter::default();
    for value in 0..16 {
      assert!(filter.mtype(value));
      assert!(filter.group(value));
      assert!(filter.channel(value, 15 - value));
    }
  }

  #[test]
  fn message_types() {
    let filter = Filter::new()
      .with_message_types(&[MessageType::System, MessageType::Midi2ChannelVoice]);
    assert!(filter.mtype(0x1));
    assert!(filter.mtype(0x4));
    assert!(!filter.mtype(0x2));
    assert!(!filter.mtype(0x3));
  }

  #[test]
  fn groups() {
    let filter = Filter::new().with_groups(&[0, 15, 16]);
    assert!(filter.group(0));
    assert!(filter.group(15));
    assert!(!filter.group(1));
  }

  #[test]
  fn channels() {
    let filter = Filter::new().with_channels(2, &[0, 9, 99]);
    assert!(filter.channel(2, 0));
    assert!(filter.channel(2, 9));
    assert!(!filter.channel(2, 1));
    assert!(filter.channel(3, 1));
    assert_eq!(Filter::new().with_channels(16, &[]), Filter::new());
  }

  #[test]
  fn debug_output() {
    let output = format!("{:?}", Filter::new().with_groups(&[0]));
    assert!(output.starts_with("Filter:\n  MT : 1111111111111111  GR : 0000000000000001"));
  }
}
