use thiserror::Error;

use crate::header::MessageType;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Expected a {expected:?} packet but found type {found:#x}")]
  WrongType { expected: MessageType, found: u8 },

  #[error("Unknown message type {0:#x}")]
  UnknownType(u8),

  #[error("Unknown status {0:#04x}")]
  UnknownStatus(u8),

  #[error("Field {field} overflow: {value:#x} is greater than {max:#x}")]
  FieldOverflow {
    field: &'static str,
    value: u32,
    max: u32,
  },

  #[error("Status {status:#04x} takes {expected} parameters but {found} were given")]
  ArityMismatch {
    status: u8,
    expected: usize,
    found: usize,
  },

  #[error("Packet needs {expected} words but only {found} were given")]
  Truncated { expected: usize, found: usize },

  #[error("Encoding {0:?} packets is not supported")]
  Unsupported(MessageType),
}
