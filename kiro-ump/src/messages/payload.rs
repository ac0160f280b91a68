/// The one or two words of an encoded packet
pub type Packet = Payload<u32, 2>;

/// Parameter bytes of a System message
pub type Params = Payload<u8, 2>;

/// Fixed capacity, inline buffer with a length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload<T, const N: usize> {
  len: u8,
  data: [T; N],
}

impl<T: Copy + Default, const N: usize> Payload<T, N> {
  pub fn new(source: &[T]) -> Option<Self> {
    if source.len() <= N {
      let mut data = [T::default(); N];
      data[0..source.len()].copy_from_slice(source);
      Some(Self {
        len: source.len() as u8,
        data,
      })
    } else {
      None
    }
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.len as usize
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  pub fn as_slice(&self) -> &[T] {
    &self.data[0..self.len()]
  }
}

impl Packet {
  pub fn single(word: u32) -> Self {
    Self {
      len: 1,
      data: [word, 0],
    }
  }
}

impl<const N: usize> Payload<u32, N> {
  /// Bytes in transport order, most significant byte of the first word first
  pub fn be_bytes(&self) -> impl Iterator<Item = u8> + '_ {
    self.as_slice().iter().flat_map(|word| word.to_be_bytes())
  }
}

impl<T: Copy + Default, const N: usize> Default for Payload<T, N> {
  fn default() -> Self {
    Self {
      len: 0,
      data: [T::default(); N],
    }
  }
}

impl<T, const N: usize> From<[T; N]> for Payload<T, N> {
  fn from(data: [T; N]) -> Self {
    Self { len: N as u8, data }
  }
}

impl<T: Copy + Default> From<[T; 1]> for Payload<T, 2> {
  fn from([value]: [T; 1]) -> Self {
    Self {
      len: 1,
      data: [value, T::default()],
    }
  }
}

impl<T: Copy + Default, const N: usize> TryFrom<&[T]> for Payload<T, N> {
  type Error = usize;

  /// Fails with the source length when it does not fit
  fn try_from(data: &[T]) -> Result<Self, Self::Error> {
    Payload::new(data).ok_or(data.len())
  }
}
