use crate::memory::Address;

/// A block of raw program bytes destined for a fixed place in memory
pub trait Region {
  /// Address of the first byte
  fn origin(&self) -> Address;

  fn instructions(&self) -> &[u8];
}

/// A `Chunk` is a single owned region of bytes that a program loader may
/// place into the virtual machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
  origin: Address,
  instructions: Vec<u8>,
}

impl Chunk {
  /// A chunk placed at `origin` instead of the start of memory
  pub fn at(origin: Address, instructions: &[u8]) -> Self {
    Self {
      origin,
      instructions: instructions.to_vec(),
    }
  }
}

impl From<Vec<u8>> for Chunk {
  fn from(instructions: Vec<u8>) -> Self {
    Self {
      origin: 0,
      instructions,
    }
  }
}

impl Region for Chunk {
  fn origin(&self) -> Address {
    self.origin
  }

  fn instructions(&self) -> &[u8] {
    &self.instructions
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_vec_starts_at_zero() {
    let chunk: Chunk = vec![0x00, 0xE0].into();
    assert_eq!(chunk.origin(), 0);
    assert_eq!(chunk.instructions(), &[0x00, 0xE0]);
  }

  #[test]
  fn at_origin() {
    let chunk = Chunk::at(0x100, &[0x00, 0xEE]);
    assert_eq!(chunk.origin(), 0x100);
    assert_eq!(chunk.instructions(), &[0x00, 0xEE]);
  }
}
