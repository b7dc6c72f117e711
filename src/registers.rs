use std::ops::{Index, IndexMut};

/// Number of general purpose registers
pub const REGISTER_COUNT: usize = 16;

/// A register index, always in `0..16` since it is built from a nibble
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Reg(u8);

impl Reg {
  pub const V0: Reg = Reg(0x0);
  /// The register arithmetic instructions use as their carry flag
  pub const VF: Reg = Reg(0xF);

  /// Build an index from the low nibble of `maybe_nibble`
  pub const fn from_nibble(maybe_nibble: u8) -> Self {
    Self(maybe_nibble & 0x0F)
  }

  pub const fn index(self) -> usize {
    self.0 as usize
  }
}

impl From<u8> for Reg {
  fn from(maybe_nibble: u8) -> Self {
    Self::from_nibble(maybe_nibble)
  }
}

/// The sixteen 8-bit registers `V0..=VF`
///
/// Nothing here treats `VF` specially; that is up to the instructions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
  values: [u8; REGISTER_COUNT],
}

impl Registers {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn as_array(&self) -> &[u8; REGISTER_COUNT] {
    &self.values
  }
}

impl Index<Reg> for Registers {
  type Output = u8;

  fn index(&self, reg: Reg) -> &u8 {
    &self.values[reg.index()]
  }
}

impl IndexMut<Reg> for Registers {
  fn index_mut(&mut self, reg: Reg) -> &mut u8 {
    &mut self.values[reg.index()]
  }
}
