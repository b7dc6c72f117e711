use crate::memory::Address;
use crate::registers::Reg;

/// The structural fields of a 16-bit instruction word
///
/// The fields overlap; every interpretation is extracted and the opcode
/// decides which ones matter.
///
/// | Field     | Bits  | Meaning                 |
/// |-----------|-------|-------------------------|
/// | `class`   | 12-15 | Operation class         |
/// | `x`       | 8-11  | Register `Vx`           |
/// | `y`       | 4-7   | Register `Vy`           |
/// | `kk`      | 0-7   | Immediate byte          |
/// | `n`       | 0-3   | Sub-opcode              |
/// | `nnn`     | 0-11  | Address                 |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
  pub word: u16,
  pub class: u8,
  pub x: Reg,
  pub y: Reg,
  pub kk: u8,
  pub n: u8,
  pub nnn: Address,
}

impl From<u16> for Instruction {
  fn from(word: u16) -> Self {
    Self {
      word,
      class: ((word & 0xF000) >> 12) as u8,
      x: Reg::from_nibble(((word & 0x0F00) >> 8) as u8),
      y: Reg::from_nibble(((word & 0x00F0) >> 4) as u8),
      kk: (word & 0x00FF) as u8,
      n: (word & 0x000F) as u8,
      nnn: word & 0x0FFF,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
  /// | Pattern | Assembly | Semantics/RTL    |
  /// |---------|----------|------------------|
  /// | `0000`  | `halt`   | `(stop execution)` |
  Halt,

  /// Clears the screen, which is not modelled, so this does nothing.
  ///
  /// | Pattern | Assembly | Semantics/RTL  |
  /// |---------|----------|----------------|
  /// | `00E0`  | `cls`    | `(do nothing)` |
  Clear,

  /// | Pattern | Assembly | Semantics/RTL   |
  /// |---------|----------|-----------------|
  /// | `00EE`  | `ret`    | `pc ← pop()`    |
  Return,

  /// | Pattern | Assembly  | Semantics/RTL |
  /// |---------|-----------|---------------|
  /// | `1nnn`  | `jp nnn`  | `pc ← nnn`    |
  Jump { nnn: Address },

  /// The pushed address is the one after the call, since `pc` has already
  /// moved past it.
  ///
  /// | Pattern | Assembly    | Semantics/RTL            |
  /// |---------|-------------|--------------------------|
  /// | `2nnn`  | `call nnn`  | `push(pc); pc ← nnn`     |
  Call { nnn: Address },

  /// | Pattern | Assembly      | Semantics/RTL                   |
  /// |---------|---------------|---------------------------------|
  /// | `3xkk`  | `se vx, kk`   | `if r[x] == kk : pc ← pc + 2`   |
  SkipEqualImmediate { x: Reg, kk: u8 },

  /// | Pattern | Assembly      | Semantics/RTL                   |
  /// |---------|---------------|---------------------------------|
  /// | `4xkk`  | `sne vx, kk`  | `if r[x] != kk : pc ← pc + 2`   |
  SkipNotEqualImmediate { x: Reg, kk: u8 },

  /// | Pattern | Assembly      | Semantics/RTL                    |
  /// |---------|---------------|----------------------------------|
  /// | `5xy0`  | `se vx, vy`   | `if r[x] == r[y] : pc ← pc + 2`  |
  SkipEqualRegister { x: Reg, y: Reg },

  /// | Pattern | Assembly      | Semantics/RTL |
  /// |---------|---------------|---------------|
  /// | `6xkk`  | `ld vx, kk`   | `r[x] ← kk`   |
  LoadImmediate { x: Reg, kk: u8 },

  /// Wraps on overflow and leaves `VF` alone.
  ///
  /// | Pattern | Assembly      | Semantics/RTL       |
  /// |---------|---------------|---------------------|
  /// | `7xkk`  | `add vx, kk`  | `r[x] ← r[x] + kk`  |
  AddImmediate { x: Reg, kk: u8 },

  /// | Pattern | Assembly      | Semantics/RTL  |
  /// |---------|---------------|----------------|
  /// | `8xy0`  | `ld vx, vy`   | `r[x] ← r[y]`  |
  Move { x: Reg, y: Reg },

  /// | Pattern | Assembly      | Semantics/RTL         |
  /// |---------|---------------|-----------------------|
  /// | `8xy1`  | `or vx, vy`   | `r[x] ← r[x] \| r[y]` |
  Or { x: Reg, y: Reg },

  /// | Pattern | Assembly      | Semantics/RTL         |
  /// |---------|---------------|-----------------------|
  /// | `8xy2`  | `and vx, vy`  | `r[x] ← r[x] & r[y]`  |
  And { x: Reg, y: Reg },

  /// | Pattern | Assembly      | Semantics/RTL         |
  /// |---------|---------------|-----------------------|
  /// | `8xy3`  | `xor vx, vy`  | `r[x] ← r[x] ^ r[y]`  |
  Xor { x: Reg, y: Reg },

  /// Always writes the carry into `VF`, after the sum.
  ///
  /// | Pattern | Assembly      | Semantics/RTL                                   |
  /// |---------|---------------|-------------------------------------------------|
  /// | `8xy4`  | `add vx, vy`  | `s ← r[x] + r[y]; r[x] ← s & ff; r[f] ← s > ff` |
  AddRegister { x: Reg, y: Reg },
}

impl Opcode {
  /// Look up the instruction for a word, `None` if nothing in the instruction
  /// set matches it
  pub fn decode(word: u16) -> Option<Self> {
    let i = Instruction::from(word);
    let (x, y, kk, nnn) = (i.x, i.y, i.kk, i.nnn);
    let op = match (i.class, i.x.index(), i.y.index(), i.n) {
      (0x0, 0x0, 0x0, 0x0) => Self::Halt,
      (0x0, 0x0, 0xE, 0x0) => Self::Clear,
      (0x0, 0x0, 0xE, 0xE) => Self::Return,
      (0x1, ..) => Self::Jump { nnn },
      (0x2, ..) => Self::Call { nnn },
      (0x3, ..) => Self::SkipEqualImmediate { x, kk },
      (0x4, ..) => Self::SkipNotEqualImmediate { x, kk },
      (0x5, _, _, 0x0) => Self::SkipEqualRegister { x, y },
      (0x6, ..) => Self::LoadImmediate { x, kk },
      (0x7, ..) => Self::AddImmediate { x, kk },
      (0x8, _, _, 0x0) => Self::Move { x, y },
      (0x8, _, _, 0x1) => Self::Or { x, y },
      (0x8, _, _, 0x2) => Self::And { x, y },
      (0x8, _, _, 0x3) => Self::Xor { x, y },
      (0x8, _, _, 0x4) => Self::AddRegister { x, y },
      _ => return None,
    };
    Some(op)
  }
}
