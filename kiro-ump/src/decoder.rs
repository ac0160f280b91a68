use tracing::{debug, trace};

use crate::codec::decode;
use crate::error::Result;
use crate::filter::Filter;
use crate::header::{group_of, packet_len, type_of, MessageType};
use crate::messages::Message;

/// Frames a stream of words into packets and decodes them
#[derive(Debug, Default)]
pub struct Decoder {
  ump: [u32; 4],
  index: usize,
  len: usize,
}

impl Decoder {
  pub fn new() -> Self {
    Self::default()
  }

  /// Feeds the next word of the stream.
  ///
  /// Returns a message once a packet is complete and accepted by the filter. A packet that fails
  /// to decode is reported as an error and dropped, the next word starts a new packet.
  pub fn next(&mut self, data: u32, filter: &Filter) -> Result<Option<Message>> {
    if self.index == 0 {
      self.len = packet_len(type_of(data));
    }
    self.push(data);

    if !self.is_complete() {
      return Ok(None);
    }

    let result = self.decode(filter);
    self.reset();
    result
  }

  fn push(&mut self, data: u32) {
    self.ump[self.index] = data;
    self.index += 1;
  }

  fn is_complete(&self) -> bool {
    self.index == self.len
  }

  /// Drops any partially received packet
  pub fn reset(&mut self) {
    self.index = 0;
    self.len = 0;
  }

  fn decode(&self, filter: &Filter) -> Result<Option<Message>> {
    let ump = &self.ump[0..self.len];
    let (mtype, group) = (type_of(ump[0]), group_of(ump[0]));

    if !filter.mtype(mtype) || !filter.group(group) {
      trace!(mtype, group, "Packet filtered out");
      return Ok(None);
    }

    if MessageType::try_from(mtype).is_err() {
      trace!(mtype, len = self.len, "Skipping packet of an unsupported type");
      return Ok(None);
    }

    let message = decode(ump).map_err(|err| {
      debug!(?ump, %err, "Failed to decode packet");
      err
    })?;

    let accepted = message
      .channel()
      .map_or(true, |channel| filter.channel(group, channel));
    Ok(accepted.then_some(message))
  }
}
