//! A small 16-bit instruction, 8-bit memory byte-code machine
//!
//! Sixteen byte registers (the last one doubling as a carry flag), 4K of flat
//! memory, and a 16 deep return-address stack. Programs are placed into memory
//! through a [`region::Region`] and driven with [`vm::Vm::run`].

pub mod config;
pub mod error;
pub mod memory;
pub mod opcode;
pub mod region;
pub mod registers;
pub mod stack;
pub mod vm;

pub use config::Config;
pub use error::Error;
pub use vm::{State, Vm};
