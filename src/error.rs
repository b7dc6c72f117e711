use crate::memory::Address;

/// An error that occurred while loading or executing a program
///
/// Every variant raised by an instruction is fatal to the current run; the
/// machine records it in [`crate::vm::State::Faulted`] and stops.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  #[error("call stack overflow at pc {pc:#05x}")]
  StackOverflow { pc: Address },

  #[error("call stack underflow at pc {pc:#05x}")]
  StackUnderflow { pc: Address },

  #[error("unhandled opcode {opcode:#06x} at pc {pc:#05x}")]
  UnhandledOpcode { opcode: u16, pc: Address },

  #[error("program counter {pc:#06x} is outside of memory")]
  ProgramCounterOutOfBounds { pc: Address },

  #[error("region of {len} bytes at {origin:#05x} does not fit in memory")]
  LoadOutOfBounds { origin: Address, len: usize },

  #[error("step limit of {limit} instructions exceeded")]
  StepLimitExceeded { limit: u64 },

  #[error("machine is halted")]
  MachineHalted,
}
