/// A 12-bit memory address, as carried by `NNN` instruction fields
pub type Address = u16;

/// Number of addressable bytes
pub const MEMORY_SIZE: usize = 0x1000;

/// Flat byte-addressable memory shared by code and data
#[derive(Clone)]
pub struct Memory {
  bytes: Box<[u8; MEMORY_SIZE]>,
}

impl Memory {
  /// Create a zeroed memory
  pub fn new() -> Self {
    Self {
      bytes: Box::new([0; MEMORY_SIZE]),
    }
  }

  /// Read the big-endian instruction word at `address`, or `None` when the
  /// second byte would fall past the end of memory
  pub fn read_word(&self, address: Address) -> Option<u16> {
    let address = address as usize;
    let hi = *self.bytes.get(address)?;
    let lo = *self.bytes.get(address + 1)?;
    Some(u16::from_be_bytes([hi, lo]))
  }

  /// Copy `data` into memory starting at `origin`; nothing is written unless
  /// the whole slice fits
  pub fn write_slice(&mut self, origin: Address, data: &[u8]) -> Option<()> {
    let start = origin as usize;
    let end = start.checked_add(data.len())?;
    self.bytes.get_mut(start..end)?.copy_from_slice(data);
    Some(())
  }

  pub fn as_slice(&self) -> &[u8] {
    &self.bytes[..]
  }
}

impl Default for Memory {
  fn default() -> Self {
    Self::new()
  }
}

// 4K of zeroes is not worth printing
impl std::fmt::Debug for Memory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let used = self.bytes.iter().filter(|b| **b != 0).count();
    f.debug_struct("Memory")
      .field("size", &MEMORY_SIZE)
      .field("nonzero", &used)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_is_zeroed() {
    let memory = Memory::new();
    assert_eq!(memory.as_slice().len(), MEMORY_SIZE);
    assert!(memory.as_slice().iter().all(|b| *b == 0));
  }

  #[test]
  fn read_word_is_big_endian() {
    let mut memory = Memory::new();
    memory.write_slice(0x200, &[0x80, 0x14]).unwrap();
    assert_eq!(memory.read_word(0x200), Some(0x8014));
  }

  #[test]
  fn read_word_at_last_pair() {
    let mut memory = Memory::new();
    memory.write_slice(0xFFE, &[0x12, 0x34]).unwrap();
    assert_eq!(memory.read_word(0xFFE), Some(0x1234));
  }

  #[test]
  fn read_word_past_end() {
    let memory = Memory::new();
    assert_eq!(memory.read_word(0xFFF), None);
    assert_eq!(memory.read_word(0x1000), None);
  }

  #[test]
  fn write_slice_last_byte() {
    let mut memory = Memory::new();
    assert_eq!(memory.write_slice(0xFFF, &[7]), Some(()));
    assert_eq!(memory.as_slice()[0xFFF], 7);
    assert_eq!(memory.write_slice(0x1000, &[7]), None);
  }

  #[test]
  fn write_slice_overflow_writes_nothing() {
    let mut memory = Memory::new();
    assert_eq!(memory.write_slice(0xFFE, &[1, 2, 3]), None);
    assert!(memory.as_slice().iter().all(|b| *b == 0));
  }
}
