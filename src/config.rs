use crate::memory::Address;

/// Knobs for a fresh [`crate::vm::Vm`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
  /// Where the program counter starts
  pub entry: Address,
  /// Stop [`crate::vm::Vm::run`] after this many instructions; unbounded when
  /// `None`, so a `jp` to itself spins forever
  pub step_limit: Option<u64>,
}

impl Config {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_entry(mut self, entry: Address) -> Self {
    self.entry = entry;
    self
  }

  pub fn with_step_limit(mut self, limit: u64) -> Self {
    self.step_limit = Some(limit);
    self
  }
}
