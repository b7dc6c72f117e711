use crate::config::Config;
use crate::error::Error;
use crate::memory::{Address, Memory};
use crate::opcode::Opcode;
use crate::region::Region;
use crate::registers::{Reg, Registers};
use crate::stack::CallStack;

/// Where the machine is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
  Running,
  Halted,
  /// Stopped by a fatal error; the program counter still points at the
  /// instruction that raised it
  Faulted(Error),
}

/// A virtual machine with sixteen byte registers, 4K of memory and a 16 deep
/// call stack.
///
/// Instructions are two bytes, big-endian. The program counter moves past an
/// instruction *before* it executes, so jumps and calls overwrite the advanced
/// value and skips add a second step on top of it.
#[derive(Debug)]
pub struct Vm {
  // address of the next instruction to fetch
  pc: Address,
  registers: Registers,
  memory: Memory,
  stack: CallStack,
  state: State,
  config: Config,
}

impl Vm {
  /// Create a new, empty virtual machine starting at address `0x000`
  pub fn new() -> Self {
    Self::with_config(Config::default())
  }

  pub fn with_config(config: Config) -> Self {
    Self {
      pc: config.entry,
      registers: Registers::new(),
      memory: Memory::new(),
      stack: CallStack::new(),
      state: State::Running,
      config,
    }
  }

  /// Copy a region's bytes into memory at its origin
  pub fn load<R>(&mut self, region: &R) -> Result<(), Error>
  where
    R: Region,
  {
    let origin = region.origin();
    let bytes = region.instructions();
    self
      .memory
      .write_slice(origin, bytes)
      .ok_or(Error::LoadOutOfBounds {
        origin,
        len: bytes.len(),
      })?;
    log::debug!("loaded {} bytes at {:#05x}", bytes.len(), origin);
    Ok(())
  }

  pub fn register(&self, reg: Reg) -> u8 {
    self.registers[reg]
  }

  pub fn set_register(&mut self, reg: Reg, value: u8) {
    self.registers[reg] = value;
  }

  pub fn registers(&self) -> &Registers {
    &self.registers
  }

  pub fn program_counter(&self) -> Address {
    self.pc
  }

  pub fn memory(&self) -> &Memory {
    &self.memory
  }

  pub fn state(&self) -> &State {
    &self.state
  }

  /// Execute a single instruction.
  ///
  /// A fault moves the machine into [`State::Faulted`] and every later call
  /// hands back the same error without touching anything.
  pub fn step(&mut self) -> Result<(), Error> {
    match &self.state {
      State::Running => {}
      State::Halted => return Err(Error::MachineHalted),
      State::Faulted(fault) => return Err(fault.clone()),
    }
    let pc = self.pc;
    let result = Task::new(self, pc).run();
    if let Err(fault) = &result {
      log::warn!("{fault}");
      self.pc = pc;
      self.state = State::Faulted(fault.clone());
    }
    result
  }

  /// Step until the program halts, faults, or runs into the configured step
  /// limit. Hitting the limit leaves the machine running, so `run` can pick up
  /// where it stopped.
  pub fn run(&mut self) -> Result<(), Error> {
    let mut steps: u64 = 0;
    loop {
      if let Some(limit) = self.config.step_limit {
        if steps >= limit {
          return Err(Error::StepLimitExceeded { limit });
        }
      }
      self.step()?;
      steps += 1;
      if self.state == State::Halted {
        log::debug!("halted after {steps} steps at {:#05x}", self.pc);
        return Ok(());
      }
    }
  }
}

impl Default for Vm {
  fn default() -> Self {
    Self::new()
  }
}

/// Everything needed to carry out the instruction at `pc`
struct Task<'vm> {
  vm: &'vm mut Vm,
  // address of the instruction being executed, for fault reports
  pc: Address,
}

impl<'vm> Task<'vm> {
  fn new(vm: &'vm mut Vm, pc: Address) -> Self {
    Self { vm, pc }
  }

  fn run(&mut self) -> Result<(), Error> {
    let pc = self.pc;
    let word = self
      .vm
      .memory
      .read_word(pc)
      .ok_or(Error::ProgramCounterOutOfBounds { pc })?;
    let op = Opcode::decode(word).ok_or(Error::UnhandledOpcode { opcode: word, pc })?;
    log::trace!("{pc:#05x}: {word:04x} {op:?}");
    // read_word succeeded, so pc <= 0xFFE
    self.vm.pc = pc + 2;
    let regs = &self.vm.registers;
    match op {
      Opcode::Halt => halt(self),
      Opcode::Clear => {}
      Opcode::Return => ret(self)?,
      Opcode::Jump { nnn } => jump(self, nnn),
      Opcode::Call { nnn } => call(self, nnn)?,
      Opcode::SkipEqualImmediate { x, kk } => {
        let cond = regs[x] == kk;
        skip_if(self, cond)
      }
      Opcode::SkipNotEqualImmediate { x, kk } => {
        let cond = regs[x] != kk;
        skip_if(self, cond)
      }
      Opcode::SkipEqualRegister { x, y } => {
        let cond = regs[x] == regs[y];
        skip_if(self, cond)
      }
      Opcode::LoadImmediate { x, kk } => load(self, x, kk),
      Opcode::AddImmediate { x, kk } => {
        let value = regs[x].wrapping_add(kk);
        load(self, x, value)
      }
      Opcode::Move { x, y } => {
        let value = regs[y];
        load(self, x, value)
      }
      Opcode::Or { x, y } => {
        let value = regs[x] | regs[y];
        load(self, x, value)
      }
      Opcode::And { x, y } => {
        let value = regs[x] & regs[y];
        load(self, x, value)
      }
      Opcode::Xor { x, y } => {
        let value = regs[x] ^ regs[y];
        load(self, x, value)
      }
      Opcode::AddRegister { x, y } => add_xy(self, x, y),
    }
    Ok(())
  }
}

// (stop execution)
fn halt(task: &mut Task<'_>) {
  task.vm.state = State::Halted;
}

// pc ← pop()
fn ret(task: &mut Task<'_>) -> Result<(), Error> {
  let pc = task.pc;
  let target = task.vm.stack.pop().ok_or(Error::StackUnderflow { pc })?;
  log::debug!("{pc:#05x}: return to {target:#05x}");
  task.vm.pc = target;
  Ok(())
}

// pc ← nnn
fn jump(task: &mut Task<'_>, nnn: Address) {
  task.vm.pc = nnn;
}

// push(pc); pc ← nnn
fn call(task: &mut Task<'_>, nnn: Address) -> Result<(), Error> {
  let pc = task.pc;
  task
    .vm
    .stack
    .push(task.vm.pc)
    .ok_or(Error::StackOverflow { pc })?;
  log::debug!("{pc:#05x}: call {nnn:#05x}");
  task.vm.pc = nnn;
  Ok(())
}

// if cond : pc ← pc + 2
fn skip_if(task: &mut Task<'_>, cond: bool) {
  if cond {
    task.vm.pc += 2;
  }
}

// r[x] ← v
fn load(task: &mut Task<'_>, x: Reg, value: u8) {
  task.vm.registers[x] = value;
}

// s ← r[x] + r[y]; r[x] ← s & ff; r[f] ← s > ff
fn add_xy(task: &mut Task<'_>, x: Reg, y: Reg) {
  let (sum, carry) = task.vm.registers[x].overflowing_add(task.vm.registers[y]);
  task.vm.registers[x] = sum;
  task.vm.registers[Reg::VF] = carry as u8;
}
